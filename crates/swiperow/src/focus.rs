#![forbid(unsafe_code)]

//! Long-press focus placement for a row.
//!
//! When a row is long-pressed the host lifts it into a focus overlay with a
//! reactions bar above and an options sheet below. This module decides where
//! the lifted row and the options sheet go, given the row's on-screen
//! bounds.
//!
//! Bounds come from a host measurement callback ([`RowMeasurer`]) that can
//! fail, e.g. when the row was recycled between the press and the
//! measurement. A failed measurement skips the focus action; it is logged
//! and never propagated.
//!
//! # Placement rules
//!
//! - The row never sits above `top_inset`.
//! - If row + reactions + options do not fit between `top_inset` and
//!   `screen_height - bottom_inset`, the row is pinned at `top_inset` and the
//!   options sheet is pinned to the bottom of the available area.
//! - Otherwise the row stays where it is (reactions bar directly above it),
//!   unless that would push the options off-screen, in which case the whole
//!   stack is lifted to end at `screen_height - bottom_inset`.

use std::fmt;

/// On-screen bounds of a measured row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowBounds {
    pub width: f64,
    pub height: f64,
    /// Top-left corner in screen coordinates.
    pub page_x: f64,
    pub page_y: f64,
}

/// Why a row could not be measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasureError {
    /// The row is no longer attached to the view tree.
    Detached,
    /// The host reported a failure.
    Host(String),
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detached => write!(f, "row is not attached"),
            Self::Host(reason) => write!(f, "host measurement failed: {reason}"),
        }
    }
}

impl std::error::Error for MeasureError {}

/// Host callback that locates a row on screen.
pub trait RowMeasurer {
    fn measure(&self) -> Result<RowBounds, MeasureError>;
}

impl<F> RowMeasurer for F
where
    F: Fn() -> Result<RowBounds, MeasureError>,
{
    fn measure(&self) -> Result<RowBounds, MeasureError> {
        self()
    }
}

/// Fixed geometry of the focus overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusGeometry {
    pub screen_height: f64,
    /// Minimum y of the focused row.
    pub top_inset: f64,
    /// Space kept free below the options sheet.
    pub bottom_inset: f64,
    pub reactions_height: f64,
    pub options_height: f64,
}

impl FocusGeometry {
    /// Overlay used by chat rows. Disconnected chats hide the reactions bar
    /// and show a shorter options sheet.
    #[must_use]
    pub fn chat(screen_height: f64, connected: bool) -> Self {
        Self {
            screen_height,
            top_inset: 125.0,
            bottom_inset: 100.0,
            reactions_height: if connected { 50.0 } else { 0.0 },
            options_height: if connected { 271.0 } else { 218.0 },
        }
    }
}

/// Where to draw the focused row and its options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusLayout {
    /// y of the focused row.
    pub row_y: f64,
    /// y of the options sheet, relative to `row_y`.
    pub options_offset: f64,
}

/// Pure placement for measured bounds.
#[must_use]
pub fn place(geometry: &FocusGeometry, bounds: &RowBounds) -> FocusLayout {
    let FocusGeometry {
        screen_height,
        top_inset,
        bottom_inset,
        reactions_height,
        options_height,
    } = *geometry;
    let available = screen_height - bottom_inset - top_inset;
    let stack = reactions_height + bounds.height + options_height;
    let pinned_options = available - reactions_height - options_height;
    let below_row = bounds.height + reactions_height;

    if stack > available {
        return FocusLayout {
            row_y: top_inset,
            options_offset: pinned_options,
        };
    }
    if bounds.page_y < top_inset {
        return FocusLayout {
            row_y: top_inset,
            options_offset: below_row,
        };
    }
    let row_y = if screen_height - (bounds.page_y - reactions_height) > stack {
        bounds.page_y - reactions_height
    } else {
        screen_height - bottom_inset - stack
    };
    FocusLayout {
        row_y,
        options_offset: below_row,
    }
}

/// Measure a row and place it, or skip focusing if measurement fails.
pub fn focus(geometry: &FocusGeometry, measurer: &impl RowMeasurer) -> Option<FocusLayout> {
    match measurer.measure() {
        Ok(bounds) => {
            let layout = place(geometry, &bounds);
            tracing::debug!(row_y = layout.row_y, page_y = bounds.page_y, "focus placed");
            Some(layout)
        }
        Err(err) => {
            tracing::warn!(error = %err, "unable to measure row, skipping focus");
            None
        }
    }
}
