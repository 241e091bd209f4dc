#![forbid(unsafe_code)]

//! Snapped row state and swipe direction.
//!
//! # State Machine
//!
//! ```text
//!            release / open(Left)            release / close()
//!   Closed ───────────────────────▶ OpenLeft ────────────────▶ Closed
//!     │                                                          ▲
//!     └───────────────────────────▶ OpenRight ───────────────────┘
//!            release / open(Right)           release / close()
//! ```
//!
//! There is no terminal state. Transitions are committed when a settle
//! animation starts, or immediately by `reset()`.

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Which panel an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// The panel revealed by dragging right (positive offsets).
    Left,
    /// The panel revealed by dragging left (negative offsets).
    Right,
}

impl Direction {
    /// Direction implied by the sign of an offset. Zero and negative map to `Right`.
    #[inline]
    #[must_use]
    pub fn from_offset(offset: f64) -> Self {
        if offset > 0.0 { Self::Left } else { Self::Right }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapped state of a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RowState {
    #[default]
    Closed,
    OpenLeft,
    OpenRight,
}

impl RowState {
    /// State whose sign matches `offset`.
    #[must_use]
    pub fn from_offset(offset: f64) -> Self {
        if offset > 0.0 {
            Self::OpenLeft
        } else if offset < 0.0 {
            Self::OpenRight
        } else {
            Self::Closed
        }
    }

    /// The `{0, +1, -1}` encoding.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Closed => 0,
            Self::OpenLeft => 1,
            Self::OpenRight => -1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The open side, if any.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Closed => None,
            Self::OpenLeft => Some(Direction::Left),
            Self::OpenRight => Some(Direction::Right),
        }
    }

    /// The open state for `direction`.
    #[must_use]
    pub const fn open(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::OpenLeft,
            Direction::Right => Self::OpenRight,
        }
    }

    /// How pointer input reaches the row content in this state.
    #[must_use]
    pub const fn pointer_policy(self) -> PointerPolicy {
        match self {
            Self::Closed => PointerPolicy::Auto,
            Self::OpenLeft | Self::OpenRight => PointerPolicy::BoxOnly,
        }
    }
}

/// Pointer routing for the row content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPolicy {
    /// Content and its children receive touches.
    Auto,
    /// Only the row container receives touches; a tap closes the row.
    BoxOnly,
}
