#![forbid(unsafe_code)]

//! Events emitted by a swipeable row.
//!
//! Hosts drain these from every engine call and route them to their own
//! callbacks (haptics, "reply to message", analytics). Each variant carries
//! the panel [`Direction`] it concerns; per-side legacy callbacks are
//! expressed by matching on it.

use crate::state::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeEvent {
    /// A settle toward an open panel is starting.
    WillOpen(Direction),
    /// A settle toward an open panel finished.
    Open(Direction),
    /// A settle toward the closed position is starting.
    WillClose(Direction),
    /// A settle toward the closed position finished.
    Close(Direction),
    /// A drag began on a closed row.
    OpenStartDrag(Direction),
    /// A drag began on an open row.
    CloseStartDrag(Direction),
    /// A release passed the left trigger distance.
    LeftTrigger,
}

impl SwipeEvent {
    /// The panel direction, if the event carries one.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::WillOpen(d)
            | Self::Open(d)
            | Self::WillClose(d)
            | Self::Close(d)
            | Self::OpenStartDrag(d)
            | Self::CloseStartDrag(d) => Some(d),
            Self::LeftTrigger => None,
        }
    }

    /// Stable name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WillOpen(_) => "will_open",
            Self::Open(_) => "open",
            Self::WillClose(_) => "will_close",
            Self::Close(_) => "close",
            Self::OpenStartDrag(_) => "open_start_drag",
            Self::CloseStartDrag(_) => "close_start_drag",
            Self::LeftTrigger => "left_trigger",
        }
    }
}
