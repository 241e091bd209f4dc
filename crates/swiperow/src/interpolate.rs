#![forbid(unsafe_code)]

//! Pure mapping functions used to wire the projection graph.
//!
//! Every function here is total: degenerate input ranges (zero-width spans,
//! NaN samples, out-of-order breakpoints) collapse to a clamp point instead
//! of producing a non-monotonic domain or panicking.

/// Clamp `value` into `[min, max]`.
///
/// If the bounds arrive inverted the range collapses onto `min`.
/// NaN collapses onto `min` as well.
#[inline]
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if max < min || value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

/// Linear map of `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`,
/// clamped to the output span.
///
/// A zero-width input span maps everything at or above `in_lo` to `out_hi`
/// and everything below to `out_lo`.
#[must_use]
pub fn ramp(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    if value.is_nan() {
        return out_lo;
    }
    let span = in_hi - in_lo;
    if span.abs() <= f64::EPSILON {
        return if value >= in_lo { out_hi } else { out_lo };
    }
    let t = ((value - in_lo) / span).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// A piecewise-linear curve over strictly increasing breakpoints.
///
/// Outside the first/last breakpoint the curve extends the slope of the
/// nearest segment (`extend` extrapolation).
#[derive(Debug, Clone, PartialEq)]
pub struct Piecewise {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Piecewise {
    /// Build a curve from `(input, output)` breakpoints.
    ///
    /// Non-increasing neighbours are merged, so transiently equal
    /// breakpoints (e.g. a panel measured at zero width) never produce a
    /// backwards segment. An empty list yields the identity-at-zero curve.
    #[must_use]
    pub fn new(points: &[(f64, f64)]) -> Self {
        let mut input: Vec<f64> = Vec::with_capacity(points.len());
        let mut output: Vec<f64> = Vec::with_capacity(points.len());
        for &(x, y) in points {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            match input.last() {
                Some(&last) if x <= last => {
                    // Keep the later output so the curve stays continuous
                    // at the merged point.
                    if let Some(prev) = output.last_mut() {
                        *prev = y;
                    }
                }
                _ => {
                    input.push(x);
                    output.push(y);
                }
            }
        }
        if input.is_empty() {
            input.push(0.0);
            output.push(0.0);
        }
        Self { input, output }
    }

    /// Number of distinct breakpoints after merging.
    #[must_use]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Whether the curve collapsed to a single clamp point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.input.len() < 2
    }

    /// Evaluate the curve at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.input.len();
        if n == 1 || x.is_nan() {
            return self.output[0];
        }
        // Locate the segment; the end segments extrapolate.
        let seg = match self.input.iter().position(|&bp| x < bp) {
            Some(0) => 0,
            Some(i) => i - 1,
            None => n - 2,
        };
        let (x0, x1) = (self.input[seg], self.input[seg + 1]);
        let (y0, y1) = (self.output[seg], self.output[seg + 1]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}
