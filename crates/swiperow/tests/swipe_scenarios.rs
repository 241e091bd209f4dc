#![forbid(unsafe_code)]

//! End-to-end row scenarios driven the way a chat list drives them.
//!
//! Each test feeds a realistic stream of pan samples and 60 Hz frame ticks
//! into a `SwipeableRow` and checks the event stream a host would receive.
//!
//! Run:
//!   cargo test -p swiperow --test swipe_scenarios

use std::sync::{Arc, Mutex};
use std::time::Duration;

use swiperow::focus::{self, FocusGeometry, MeasureError, RowBounds};
use swiperow::{
    Direction, GestureSample, PointerPolicy, RowState, SwipeConfig, SwipeEvent, SwipeableRow,
};
use tracing_subscriber::layer::SubscriberExt;

const FRAME: Duration = Duration::from_millis(16);

// ============================================================================
// Helpers
// ============================================================================

/// A message bubble row as laid out in a chat: reply panel on the left,
/// options on the right.
fn message_row(config: SwipeConfig) -> SwipeableRow {
    let mut row = SwipeableRow::new(config);
    row.set_row_width(390.0);
    row.set_left_width(64.0);
    row.set_right_offset(390.0);
    row
}

/// Reply-swipe configuration: the row moves at half finger speed, never
/// snaps open, and commits once dragged past one panel width.
fn reply_config() -> SwipeConfig {
    SwipeConfig::default()
        .with_friction(2.0)
        .with_left_threshold(1000.0)
        .with_left_trigger(64.0)
        .with_overshoot_left(true)
        .with_overshoot_right(false)
}

/// Drag in `steps` equal increments, then lift.
fn swipe(row: &mut SwipeableRow, to: f64, velocity: f64, steps: u32) -> Vec<SwipeEvent> {
    let mut events = row.handle_sample(GestureSample::pending(0.0));
    for i in 1..=steps {
        let x = to * f64::from(i) / f64::from(steps);
        events.extend(row.handle_sample(GestureSample::active(x, velocity)));
    }
    events.extend(row.handle_sample(GestureSample::ended(to, velocity)));
    events
}

fn run_frames(row: &mut SwipeableRow, max_frames: usize) -> Vec<SwipeEvent> {
    let mut events = Vec::new();
    for _ in 0..max_frames {
        events.extend(row.tick(FRAME));
        if !row.is_settling() {
            break;
        }
    }
    events
}

// ============================================================================
// Reply swipe
// ============================================================================

#[test]
fn reply_swipe_commits_and_springs_back() {
    let mut row = message_row(reply_config());

    let mut events = swipe(&mut row, 200.0, 300.0, 10);
    assert!(row.is_settling());
    events.extend(run_frames(&mut row, 300));

    assert_eq!(
        events,
        vec![
            SwipeEvent::OpenStartDrag(Direction::Left),
            SwipeEvent::LeftTrigger,
            SwipeEvent::WillClose(Direction::Left),
            SwipeEvent::Close(Direction::Left),
        ]
    );
    assert_eq!(row.state(), RowState::Closed);
    assert_eq!(row.offset(), 0.0);
}

#[test]
fn short_reply_swipe_does_not_commit() {
    let mut row = message_row(reply_config());
    // (120 + 0.05 * 40) / 2 = 61 < 64.
    let events = swipe(&mut row, 120.0, 40.0, 6);
    assert!(!events.contains(&SwipeEvent::LeftTrigger));
}

#[test]
fn reply_swipe_rubber_bands_past_panel() {
    let mut row = message_row(reply_config());
    row.handle_sample(GestureSample::pending(0.0));
    row.handle_sample(GestureSample::active(100.0, 0.0));
    // Inside the panel the row follows at half speed.
    assert_eq!(row.offset(), 50.0);
    assert!((row.left_panel().progress - 50.0 / 64.0).abs() < 1e-9);

    row.handle_sample(GestureSample::active(300.0, 0.0));
    // Past the panel edge: 64 + (150 - 64) with overshoot friction 1.
    assert!((row.offset() - 150.0).abs() < 1e-9);
    assert_eq!(row.left_panel().progress, 1.0);
}

#[test]
fn right_side_without_overshoot_stops_at_edge() {
    let mut row = message_row(reply_config());
    row.handle_sample(GestureSample::pending(0.0));
    row.handle_sample(GestureSample::active(-300.0, 0.0));
    // No right panel is measured, so the row cannot move left at all.
    assert_eq!(row.offset(), 0.0);
    assert!(!row.right_panel().visible);
}

// ============================================================================
// Options panel
// ============================================================================

#[test]
fn options_panel_open_then_tap_closes() {
    let mut row = SwipeableRow::new(SwipeConfig::default());
    row.set_row_width(390.0);
    row.set_left_width(0.0);
    row.set_right_offset(290.0);

    let mut events = swipe(&mut row, -80.0, -200.0, 8);
    events.extend(run_frames(&mut row, 300));
    assert_eq!(
        events,
        vec![
            SwipeEvent::OpenStartDrag(Direction::Right),
            SwipeEvent::WillOpen(Direction::Right),
            SwipeEvent::Open(Direction::Right),
        ]
    );
    assert_eq!(row.state(), RowState::OpenRight);
    assert_eq!(row.offset(), -100.0);
    assert_eq!(row.pointer_policy(), PointerPolicy::BoxOnly);

    let mut events = row.tap();
    events.extend(run_frames(&mut row, 300));
    assert_eq!(
        events,
        vec![
            SwipeEvent::WillClose(Direction::Right),
            SwipeEvent::Close(Direction::Right),
        ]
    );
    assert_eq!(row.pointer_policy(), PointerPolicy::Auto);
}

#[test]
fn dragging_open_row_reports_close_start() {
    let mut row = SwipeableRow::new(SwipeConfig::default());
    row.set_row_width(390.0);
    row.set_right_offset(290.0);
    row.open(Direction::Right);
    run_frames(&mut row, 300);

    let events = swipe(&mut row, 70.0, 0.0, 7);
    assert_eq!(events[0], SwipeEvent::CloseStartDrag(Direction::Right));
    assert_eq!(events[1], SwipeEvent::WillClose(Direction::Right));
}

#[test]
fn open_row_stays_open_on_small_drag_back() {
    let mut row = SwipeableRow::new(SwipeConfig::default());
    row.set_row_width(390.0);
    row.set_right_offset(290.0);
    row.open(Direction::Right);
    run_frames(&mut row, 300);

    // 40 < right threshold 50.
    let mut events = swipe(&mut row, 40.0, 0.0, 4);
    events.extend(run_frames(&mut row, 300));
    assert!(events.contains(&SwipeEvent::Open(Direction::Right)));
    assert_eq!(row.state(), RowState::OpenRight);
}

// ============================================================================
// Interruption
// ============================================================================

#[test]
fn grab_mid_settle_and_drag_continues_from_there() {
    let mut row = message_row(SwipeConfig::default());
    row.open(Direction::Left);
    for _ in 0..8 {
        row.tick(FRAME);
    }
    let caught_at = row.offset();
    assert!(caught_at > 20.0 && caught_at < 64.0);

    // Already counts as open while it springs there.
    row.handle_sample(GestureSample::pending(0.0));
    let events = row.handle_sample(GestureSample::active(-20.0, 0.0));
    assert_eq!(events, vec![SwipeEvent::CloseStartDrag(Direction::Left)]);
    assert!((row.offset() - (caught_at - 20.0)).abs() < 1e-9);

    // Past the left threshold (32) the way back closes it.
    row.handle_sample(GestureSample::active(-36.0, 0.0));
    let mut events = row.handle_sample(GestureSample::ended(-36.0, 0.0));
    events.extend(run_frames(&mut row, 300));
    assert_eq!(
        events,
        vec![
            SwipeEvent::WillClose(Direction::Left),
            SwipeEvent::Close(Direction::Left),
        ]
    );
    assert_eq!(row.state(), RowState::Closed);
}

#[test]
fn regrab_settling_row_and_push_same_way_stays_open() {
    let mut row = message_row(SwipeConfig::default());
    let mut events = swipe(&mut row, 50.0, 0.0, 5);
    assert_eq!(events.last(), Some(&SwipeEvent::WillOpen(Direction::Left)));
    for _ in 0..3 {
        events.extend(row.tick(FRAME));
    }
    let caught_at = row.offset();
    assert!(caught_at > 50.0 && caught_at < 64.0);
    assert_eq!(row.state(), RowState::OpenLeft);

    let regrab = swipe(&mut row, 15.0, 0.0, 3);
    assert_eq!(
        regrab,
        vec![
            SwipeEvent::CloseStartDrag(Direction::Left),
            SwipeEvent::WillOpen(Direction::Left),
        ]
    );
    assert_eq!(run_frames(&mut row, 300), vec![SwipeEvent::Open(Direction::Left)]);
    assert_eq!(row.state(), RowState::OpenLeft);
    assert_eq!(row.offset(), 64.0);
    assert!(!events.iter().any(|e| matches!(e, SwipeEvent::Close(_))));
}

#[test]
fn reset_during_settle_is_silent() {
    let mut row = message_row(SwipeConfig::default());
    row.open(Direction::Left);
    row.tick(FRAME);
    row.reset();
    assert!(run_frames(&mut row, 300).is_empty());
    assert_eq!(row.state(), RowState::Closed);
    assert_eq!(row.offset(), 0.0);
}

// ============================================================================
// Focus placement
// ============================================================================

#[test]
fn long_press_focus_uses_measured_bounds() {
    let geometry = FocusGeometry::chat(844.0, true);
    let measure = || -> Result<RowBounds, MeasureError> {
        Ok(RowBounds {
            width: 280.0,
            height: 48.0,
            page_x: 12.0,
            page_y: 400.0,
        })
    };
    let layout = focus::focus(&geometry, &measure).expect("placed");
    assert_eq!(layout.row_y, 350.0);
    assert_eq!(layout.options_offset, 98.0);
}

// ============================================================================
// Logging
// ============================================================================

/// Captures event messages.
struct MessageCapture {
    messages: Arc<Mutex<Vec<(tracing::Level, String)>>>,
}

struct MessageVisitor(Option<String>);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for MessageCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.messages
                .lock()
                .unwrap()
                .push((*event.metadata().level(), message));
        }
    }
}

fn with_captured_messages<F: FnOnce()>(f: F) -> Vec<(tracing::Level, String)> {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::TRACE)
        .with(MessageCapture {
            messages: messages.clone(),
        });
    tracing::subscriber::with_default(subscriber, f);
    let captured = messages.lock().unwrap().clone();
    captured
}

#[test]
fn settle_lifecycle_is_logged_at_debug() {
    let messages = with_captured_messages(|| {
        let mut row = message_row(SwipeConfig::default());
        swipe(&mut row, 50.0, 0.0, 5);
        run_frames(&mut row, 300);
    });
    let debug: Vec<&str> = messages
        .iter()
        .filter(|(level, _)| *level == tracing::Level::DEBUG)
        .map(|(_, m)| m.as_str())
        .collect();
    for expected in ["drag start", "drag release", "settle start", "settle done"] {
        assert!(debug.contains(&expected), "missing {expected:?} in {debug:?}");
    }
}

#[test]
fn failed_measurement_warns() {
    let messages = with_captured_messages(|| {
        let geometry = FocusGeometry::chat(844.0, true);
        let detached = || -> Result<RowBounds, MeasureError> { Err(MeasureError::Detached) };
        assert!(focus::focus(&geometry, &detached).is_none());
    });
    assert!(
        messages
            .iter()
            .any(|(level, m)| *level == tracing::Level::WARN && m.contains("skipping focus"))
    );
}
