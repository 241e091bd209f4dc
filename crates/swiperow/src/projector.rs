#![forbid(unsafe_code)]

//! Drag projection: gesture translation to visual row offset.
//!
//! The projection composes three stages:
//!
//! ```text
//!   raw    = row_translation + drag_x / friction
//!   trans  = rubber(raw)          piecewise over [-rw-1, -rw, lw, lw+1]
//!   reveal = ramp(trans)          per panel, in [0, 1]
//! ```
//!
//! `rubber` is identity between the panel edges. Past an edge it continues
//! with slope `1 / overshoot_friction` when that side may overshoot, and
//! with slope 0 (a hard clamp) otherwise.
//!
//! # Invariants
//!
//! 1. With overshoot disabled on a side, `trans` never passes that panel edge.
//! 2. A panel of zero width always reports reveal progress 0.
//! 3. `rubber` is monotonically non-decreasing in `raw`.

use crate::config::{SwipeConfig, at_least};
use crate::interpolate::{Piecewise, ramp};
use crate::metrics::PanelMetrics;

/// Structural inputs of the projection, with all defaults resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionInputs {
    pub friction: f64,
    pub overshoot_friction: f64,
    pub left_width: f64,
    pub right_width: f64,
    pub overshoot_left: bool,
    pub overshoot_right: bool,
}

impl ProjectionInputs {
    /// Resolve config defaults against measured geometry.
    ///
    /// Overshoot defaults to "enabled" for a panel with measured width. A
    /// zero-width panel never overshoots, whatever the config says.
    #[must_use]
    pub fn resolve(config: &SwipeConfig, metrics: &PanelMetrics) -> Self {
        let left_width = metrics.left_width();
        let right_width = metrics.right_width();
        Self {
            friction: at_least(config.friction, 1.0),
            overshoot_friction: at_least(config.overshoot_friction, 1.0),
            left_width,
            right_width,
            overshoot_left: left_width > 0.0 && config.overshoot_left.unwrap_or(true),
            overshoot_right: right_width > 0.0 && config.overshoot_right.unwrap_or(true),
        }
    }
}

/// Output of one projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Unprojected offset (`row_translation + drag_x / friction`).
    pub raw: f64,
    /// Visual row offset after rubber-banding.
    pub trans_x: f64,
    /// Left panel reveal progress in `[0, 1]`.
    pub left_progress: f64,
    /// Right panel reveal progress in `[0, 1]`.
    pub right_progress: f64,
}

impl Projection {
    /// A fully hidden panel is moved off-screen by the host.
    #[inline]
    #[must_use]
    pub fn left_visible(&self) -> bool {
        self.left_progress > 0.0
    }

    #[inline]
    #[must_use]
    pub fn right_visible(&self) -> bool {
        self.right_progress > 0.0
    }
}

/// Pure projector for one set of structural inputs.
#[derive(Debug, Clone)]
pub struct DragProjector {
    inputs: ProjectionInputs,
    rubber: Piecewise,
}

impl DragProjector {
    #[must_use]
    pub fn new(inputs: ProjectionInputs) -> Self {
        let ProjectionInputs {
            left_width: lw,
            right_width: rw,
            overshoot_friction,
            ..
        } = inputs;
        let slope = 1.0 / overshoot_friction;
        let over_l = if inputs.overshoot_left { slope } else { 0.0 };
        let over_r = if inputs.overshoot_right { slope } else { 0.0 };
        let rubber = Piecewise::new(&[
            (-rw - 1.0, -rw - over_r),
            (-rw, -rw),
            (lw, lw),
            (lw + 1.0, lw + over_l),
        ]);
        Self { inputs, rubber }
    }

    #[inline]
    #[must_use]
    pub fn inputs(&self) -> &ProjectionInputs {
        &self.inputs
    }

    /// `row_translation + drag_x / friction`.
    #[inline]
    #[must_use]
    pub fn raw_offset(&self, row_translation: f64, drag_x: f64) -> f64 {
        row_translation + drag_x / self.inputs.friction
    }

    /// Rubber-band a raw offset into the visual offset.
    #[must_use]
    pub fn visual_offset(&self, raw: f64) -> f64 {
        self.rubber.eval(raw)
    }

    /// Left panel progress for a visual offset.
    #[must_use]
    pub fn left_progress(&self, trans_x: f64) -> f64 {
        let lw = self.inputs.left_width;
        if lw <= 0.0 {
            return 0.0;
        }
        ramp(trans_x, 0.0, lw, 0.0, 1.0)
    }

    /// Right panel progress for a visual offset.
    #[must_use]
    pub fn right_progress(&self, trans_x: f64) -> f64 {
        let rw = self.inputs.right_width;
        if rw <= 0.0 {
            return 0.0;
        }
        ramp(trans_x, 0.0, -rw, 0.0, 1.0)
    }

    /// Full projection of a baseline plus drag delta.
    #[must_use]
    pub fn project(&self, row_translation: f64, drag_x: f64) -> Projection {
        let raw = self.raw_offset(row_translation, drag_x);
        let trans_x = self.visual_offset(raw);
        Projection {
            raw,
            trans_x,
            left_progress: self.left_progress(trans_x),
            right_progress: self.right_progress(trans_x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(lw: f64, rw: f64) -> ProjectionInputs {
        ProjectionInputs {
            friction: 1.0,
            overshoot_friction: 1.0,
            left_width: lw,
            right_width: rw,
            overshoot_left: lw > 0.0,
            overshoot_right: rw > 0.0,
        }
    }

    #[test]
    fn identity_inside_panel_bounds() {
        let p = DragProjector::new(inputs(64.0, 80.0));
        for raw in [-80.0, -40.0, 0.0, 32.0, 64.0] {
            assert!((p.visual_offset(raw) - raw).abs() < 1e-9, "raw {raw}");
        }
    }

    #[test]
    fn friction_divides_drag() {
        let p = DragProjector::new(ProjectionInputs {
            friction: 2.0,
            ..inputs(64.0, 0.0)
        });
        assert!((p.project(0.0, 100.0).raw - 50.0).abs() < 1e-9);
        assert!((p.project(0.0, 100.0).trans_x - 50.0).abs() < 1e-9);
    }

    #[test]
    fn overshoot_friction_damps_past_edge() {
        let p = DragProjector::new(ProjectionInputs {
            overshoot_friction: 4.0,
            ..inputs(64.0, 0.0)
        });
        // 40px past the edge moves 10px visually.
        assert!((p.visual_offset(104.0) - 74.0).abs() < 1e-9);
    }

    #[test]
    fn disabled_overshoot_is_hard_clamp() {
        let p = DragProjector::new(ProjectionInputs {
            overshoot_left: false,
            ..inputs(64.0, 80.0)
        });
        assert_eq!(p.visual_offset(500.0), 64.0);
        // Right side still rubber-bands at slope 1.
        assert!((p.visual_offset(-100.0) - -100.0).abs() < 1e-9);
    }

    #[test]
    fn no_right_panel_pins_at_zero() {
        let p = DragProjector::new(inputs(64.0, 0.0));
        assert_eq!(p.visual_offset(-300.0), 0.0);
        assert_eq!(p.right_progress(-300.0), 0.0);
    }

    #[test]
    fn progress_ramps() {
        let p = DragProjector::new(inputs(64.0, 80.0));
        assert!((p.left_progress(32.0) - 0.5).abs() < 1e-9);
        assert_eq!(p.left_progress(-10.0), 0.0);
        assert_eq!(p.left_progress(200.0), 1.0);
        assert!((p.right_progress(-40.0) - 0.5).abs() < 1e-9);
        assert_eq!(p.right_progress(10.0), 0.0);
    }

    #[test]
    fn zero_width_layout_collapses_to_clamp_point() {
        let p = DragProjector::new(inputs(0.0, 0.0));
        for raw in [-1000.0, -1.0, 0.0, 1.0, 1000.0] {
            let proj = p.project(raw, 0.0);
            assert_eq!(proj.trans_x, 0.0);
            assert_eq!(proj.left_progress, 0.0);
            assert_eq!(proj.right_progress, 0.0);
            assert!(!proj.left_visible() && !proj.right_visible());
        }
    }

    #[test]
    fn resolve_defaults_overshoot_from_widths() {
        let metrics = PanelMetrics::measured(64.0, 320.0, 320.0);
        let resolved = ProjectionInputs::resolve(&SwipeConfig::default(), &metrics);
        assert!(resolved.overshoot_left);
        assert!(!resolved.overshoot_right);
        assert_eq!(resolved.right_width, 0.0);
    }

    #[test]
    fn resolve_honors_explicit_overshoot() {
        let metrics = PanelMetrics::measured(64.0, 320.0, 240.0);
        let cfg = SwipeConfig::default().with_overshoot_left(false);
        let resolved = ProjectionInputs::resolve(&cfg, &metrics);
        assert!(!resolved.overshoot_left);
        assert!(resolved.overshoot_right);
    }

    #[test]
    fn zero_width_panel_never_overshoots() {
        let metrics = PanelMetrics::measured(0.0, 320.0, 320.0);
        let cfg = SwipeConfig::default().with_overshoot_right(true);
        let resolved = ProjectionInputs::resolve(&cfg, &metrics);
        assert!(!resolved.overshoot_right);
        assert_eq!(DragProjector::new(resolved).visual_offset(-50.0), 0.0);
    }
}
