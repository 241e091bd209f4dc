#![forbid(unsafe_code)]

//! Measured row and panel geometry.
//!
//! Hosts report three numbers from layout callbacks: the row width, the x
//! position of the left panel's trailing edge (its width), and the x
//! position where the right panel begins. Anything not yet measured falls
//! back to a value that leaves the corresponding panel at zero width.
//!
//! # Invariants
//!
//! 1. `left_width() >= 0` and `row_width() >= 0`.
//! 2. `right_offset() <= row_width()`.
//! 3. `right_width() == max(0, row_width() - right_offset())`.

/// Sanitize a host-reported length: NaN and negatives become zero.
#[inline]
fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Layout measurements for one row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelMetrics {
    left_width: Option<f64>,
    row_width: Option<f64>,
    right_offset: Option<f64>,
}

impl PanelMetrics {
    /// Metrics with nothing measured yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left_width: None,
            row_width: None,
            right_offset: None,
        }
    }

    /// Fully measured metrics (mostly for tests and hosts that know sizes up front).
    #[must_use]
    pub fn measured(left_width: f64, row_width: f64, right_offset: f64) -> Self {
        let mut m = Self::new();
        m.set_row_width(row_width);
        m.set_left_width(left_width);
        m.set_right_offset(right_offset);
        m
    }

    /// Record the row width. Returns `true` if the value changed.
    pub fn set_row_width(&mut self, width: f64) -> bool {
        Self::replace(&mut self.row_width, sanitize(width))
    }

    /// Record the left panel width. Returns `true` if the value changed.
    pub fn set_left_width(&mut self, width: f64) -> bool {
        Self::replace(&mut self.left_width, sanitize(width))
    }

    /// Record where the right panel starts. Returns `true` if the value changed.
    pub fn set_right_offset(&mut self, offset: f64) -> bool {
        Self::replace(&mut self.right_offset, sanitize(offset))
    }

    fn replace(slot: &mut Option<f64>, value: f64) -> bool {
        if *slot == Some(value) {
            return false;
        }
        *slot = Some(value);
        true
    }

    #[inline]
    #[must_use]
    pub fn left_width(&self) -> f64 {
        self.left_width.unwrap_or(0.0)
    }

    #[inline]
    #[must_use]
    pub fn row_width(&self) -> f64 {
        self.row_width.unwrap_or(0.0)
    }

    /// Where the right panel starts, never past the row's end.
    #[inline]
    #[must_use]
    pub fn right_offset(&self) -> f64 {
        let row = self.row_width();
        self.right_offset.unwrap_or(row).min(row)
    }

    #[inline]
    #[must_use]
    pub fn right_width(&self) -> f64 {
        (self.row_width() - self.right_offset()).max(0.0)
    }

    /// Raw measured inputs, used as part of the projection's dependency key.
    #[must_use]
    pub(crate) fn key(&self) -> [Option<u64>; 3] {
        [
            self.left_width.map(f64::to_bits),
            self.right_offset.map(f64::to_bits),
            self.row_width.map(f64::to_bits),
        ]
    }
}
