#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use swiperow::{Direction, GesturePhase, GestureSample, RowState, SwipeConfig, SwipeableRow};

#[derive(Debug, Arbitrary)]
enum Op {
    Sample { x: f64, v: f64, phase: u8 },
    Tick(u8),
    Open(bool),
    Close,
    Reset,
    Tap,
    Layout { left: f64, row: f64, right_offset: f64 },
    Enable(bool),
}

#[derive(Debug, Arbitrary)]
struct Input {
    friction: f64,
    overshoot_friction: f64,
    left_trigger: Option<f64>,
    overshoot_left: Option<bool>,
    overshoot_right: Option<bool>,
    ops: Vec<Op>,
}

/// Keep values within a physical screen range; NaN and infinities pass
/// through untouched.
fn bounded(v: f64) -> f64 {
    if v.is_finite() { v % 1.0e5 } else { v }
}

fuzz_target!(|input: Input| {
    if input.ops.len() > 512 {
        return;
    }
    let mut cfg = SwipeConfig::default()
        .with_friction(input.friction)
        .with_overshoot_friction(input.overshoot_friction);
    cfg.left_trigger = input.left_trigger;
    cfg.overshoot_left = input.overshoot_left;
    cfg.overshoot_right = input.overshoot_right;

    let mut row = SwipeableRow::new(cfg);
    row.set_row_width(390.0);
    row.set_left_width(64.0);
    row.set_right_offset(290.0);

    for op in input.ops {
        match op {
            Op::Sample { x, v, phase } => {
                let phase = match phase % 3 {
                    0 => GesturePhase::Pending,
                    1 => GesturePhase::Active,
                    _ => GesturePhase::Ended,
                };
                row.handle_sample(GestureSample::new(bounded(x), bounded(v), phase));
            }
            Op::Tick(ms) => {
                row.tick(Duration::from_millis(u64::from(ms)));
            }
            Op::Open(left) => {
                row.open(if left { Direction::Left } else { Direction::Right });
            }
            Op::Close => {
                row.close();
            }
            Op::Reset => row.reset(),
            Op::Tap => {
                row.tap();
            }
            Op::Layout {
                left,
                row: width,
                right_offset,
            } => {
                row.set_row_width(bounded(width));
                row.set_left_width(bounded(left));
                row.set_right_offset(bounded(right_offset));
            }
            Op::Enable(on) => {
                row.set_enabled(on);
            }
        }

        // Post-conditions that must always hold:
        let p = row.projection();
        assert!(!p.trans_x.is_nan(), "offset is NaN");
        assert!((0.0..=1.0).contains(&p.left_progress), "left progress out of range");
        assert!((0.0..=1.0).contains(&p.right_progress), "right progress out of range");
        if row.is_at_rest() {
            let sign = if p.trans_x > 0.0 {
                1
            } else if p.trans_x < 0.0 {
                -1
            } else {
                0
            };
            assert_eq!(sign, row.state().sign(), "resting offset disagrees with state");
        }
    }

    row.reset();
    assert_eq!(row.state(), RowState::Closed);
});
