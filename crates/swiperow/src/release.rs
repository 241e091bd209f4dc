#![forbid(unsafe_code)]

//! Release resolution: where a row snaps when the finger lifts.
//!
//! The release velocity is folded into the drag as a small "toss" term,
//! approximating flick momentum without simulating it:
//!
//!   translation = (drag_x + DRAG_TOSS × velocity_x) / friction
//!
//! # Decision table
//!
//! | State     | Condition                          | Target         |
//! |-----------|------------------------------------|----------------|
//! | Closed    | translation >  left_threshold      | `left_width`   |
//! | Closed    | translation < -right_threshold     | `-right_width` |
//! | Closed    | otherwise                          | 0              |
//! | OpenLeft  | translation <= -left_threshold     | 0              |
//! | OpenLeft  | otherwise                          | `left_width`   |
//! | OpenRight | translation >= right_threshold     | 0              |
//! | OpenRight | otherwise                          | `-right_width` |
//!
//! The same threshold governs opening and closing on each side, so an open
//! row stays open unless dragged back past the threshold.
//!
//! From `Closed`, a translation beyond the left trigger fires the trigger
//! once, regardless of where the row snaps.

use crate::config::SwipeConfig;
use crate::metrics::PanelMetrics;
use crate::state::{Direction, RowState};

/// Weight of release velocity in the toss translation.
pub const DRAG_TOSS: f64 = 0.05;

/// Toss-adjusted translation used by every release decision.
#[inline]
#[must_use]
pub fn toss_translation(drag_x: f64, velocity_x: f64, friction: f64) -> f64 {
    (drag_x + DRAG_TOSS * velocity_x) / friction
}

/// Thresholds and widths with config defaults resolved against layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseParams {
    pub friction: f64,
    pub left_width: f64,
    pub right_width: f64,
    pub left_threshold: f64,
    pub right_threshold: f64,
    /// `None` disables the trigger.
    pub left_trigger: Option<f64>,
}

impl ReleaseParams {
    /// Resolve defaults: thresholds at half a panel's width; the left
    /// trigger at half the left panel when one is measured.
    #[must_use]
    pub fn resolve(config: &SwipeConfig, metrics: &PanelMetrics) -> Self {
        let left_width = metrics.left_width();
        let right_width = metrics.right_width();
        let left_trigger = config
            .left_trigger
            .or_else(|| (left_width > 0.0).then_some(left_width / 2.0));
        Self {
            friction: crate::config::at_least(config.friction, 1.0),
            left_width,
            right_width,
            left_threshold: config.left_threshold.unwrap_or(left_width / 2.0),
            right_threshold: config.right_threshold.unwrap_or(right_width / 2.0),
            left_trigger,
        }
    }

    /// Offset a row rests at in `state`.
    #[must_use]
    pub fn settled_offset(&self, state: RowState) -> f64 {
        match state {
            RowState::Closed => 0.0,
            RowState::OpenLeft => self.left_width,
            RowState::OpenRight => -self.right_width,
        }
    }

    /// Offset of the fully open panel on `direction`.
    #[must_use]
    pub fn open_offset(&self, direction: Direction) -> f64 {
        self.settled_offset(RowState::open(direction))
    }
}

/// Input of one release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Offset the drag started from (settled offset or interrupted value).
    pub baseline: f64,
    /// Cumulative drag translation at release.
    pub drag_x: f64,
    pub velocity_x: f64,
    pub state: RowState,
}

/// Output of one release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Raw offset the settle starts from.
    pub start_offset: f64,
    /// Toss-adjusted translation used for the decision.
    pub translation: f64,
    /// Snap target.
    pub target: f64,
    /// Velocity handed to the settle, in offset px/s.
    pub velocity: f64,
    /// Whether the left trigger fired on this release.
    pub left_trigger: bool,
}

/// Pure release decision.
#[must_use]
pub fn resolve(release: &Release, params: &ReleaseParams) -> Resolution {
    let friction = params.friction;
    let start_offset = release.baseline + release.drag_x / friction;
    let translation = toss_translation(release.drag_x, release.velocity_x, friction);

    let mut left_trigger = false;
    let target = match release.state {
        RowState::Closed => {
            if let Some(trigger) = params.left_trigger {
                left_trigger = translation > trigger;
            }
            if translation > params.left_threshold {
                params.left_width
            } else if translation < -params.right_threshold {
                -params.right_width
            } else {
                0.0
            }
        }
        RowState::OpenLeft => {
            if translation > -params.left_threshold {
                params.left_width
            } else {
                0.0
            }
        }
        // TODO: confirm with product whether closing an open right panel
        // should use left_threshold, as one legacy call site did.
        RowState::OpenRight => {
            if translation < params.right_threshold {
                -params.right_width
            } else {
                0.0
            }
        }
    };

    Resolution {
        start_offset,
        translation,
        target,
        velocity: release.velocity_x / friction,
        left_trigger,
    }
}

/// Direction reported when a drag activates.
///
/// An open row reports its open side. A closed row reports the side the
/// toss translation points to.
#[must_use]
pub fn start_drag_direction(state: RowState, translation: f64) -> Direction {
    state
        .direction()
        .unwrap_or(if translation > 0.0 { Direction::Left } else { Direction::Right })
}
