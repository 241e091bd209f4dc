#![forbid(unsafe_code)]

//! Value graph driving the row's visual state.
//!
//! Two source nodes feed one derived node:
//!
//! ```text
//!   Offset ─────┐
//!               ├──▶ Projection (trans_x, left/right progress)
//!   DragDelta ──┘
//! ```
//!
//! The projector itself depends on a structural key: friction, overshoot
//! flags, overshoot friction, measured widths and the left trigger. The key
//! is compared on every [`sync`](ProjectionGraph::sync); the projector is
//! rebuilt only when it changes, and the cached projection is dropped
//! whenever any source node or the projector changes.

use crate::config::SwipeConfig;
use crate::metrics::PanelMetrics;
use crate::projector::{DragProjector, Projection, ProjectionInputs};

/// Everything the projection is rebuilt from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StructuralKey {
    friction: u64,
    overshoot_friction: u64,
    overshoot_left: Option<bool>,
    overshoot_right: Option<bool>,
    metrics: [Option<u64>; 3],
    left_trigger: Option<u64>,
}

impl StructuralKey {
    fn of(config: &SwipeConfig, metrics: &PanelMetrics) -> Self {
        Self {
            friction: config.friction.to_bits(),
            overshoot_friction: config.overshoot_friction.to_bits(),
            overshoot_left: config.overshoot_left,
            overshoot_right: config.overshoot_right,
            metrics: metrics.key(),
            left_trigger: config.left_trigger.map(f64::to_bits),
        }
    }
}

/// Memoized projection over the `Offset` and `DragDelta` nodes.
#[derive(Debug, Clone)]
pub struct ProjectionGraph {
    key: StructuralKey,
    projector: DragProjector,
    offset: f64,
    drag_delta: f64,
    cached: Option<Projection>,
    rebuilds: u64,
}

impl ProjectionGraph {
    #[must_use]
    pub fn new(config: &SwipeConfig, metrics: &PanelMetrics) -> Self {
        Self {
            key: StructuralKey::of(config, metrics),
            projector: DragProjector::new(ProjectionInputs::resolve(config, metrics)),
            offset: 0.0,
            drag_delta: 0.0,
            cached: None,
            rebuilds: 0,
        }
    }

    /// Rebuild the projector if any structural dependency changed.
    ///
    /// Returns `true` when a rebuild happened.
    pub fn sync(&mut self, config: &SwipeConfig, metrics: &PanelMetrics) -> bool {
        let key = StructuralKey::of(config, metrics);
        if key == self.key {
            return false;
        }
        self.key = key;
        self.projector = DragProjector::new(ProjectionInputs::resolve(config, metrics));
        self.cached = None;
        self.rebuilds += 1;
        tracing::trace!(
            rebuilds = self.rebuilds,
            left_width = metrics.left_width(),
            right_width = metrics.right_width(),
            "projection rebuilt"
        );
        true
    }

    #[inline]
    #[must_use]
    pub fn projector(&self) -> &DragProjector {
        &self.projector
    }

    /// Number of structural rebuilds since construction.
    #[inline]
    #[must_use]
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    #[must_use]
    pub fn drag_delta(&self) -> f64 {
        self.drag_delta
    }

    pub fn set_offset(&mut self, value: f64) {
        if value.to_bits() != self.offset.to_bits() {
            self.offset = value;
            self.cached = None;
        }
    }

    pub fn set_drag_delta(&mut self, value: f64) {
        if value.to_bits() != self.drag_delta.to_bits() {
            self.drag_delta = value;
            self.cached = None;
        }
    }

    /// Raw (unprojected) offset of the current node values.
    #[must_use]
    pub fn raw(&self) -> f64 {
        self.projector.raw_offset(self.offset, self.drag_delta)
    }

    /// Current projection, computed on first read after an invalidation.
    pub fn projection(&mut self) -> Projection {
        if let Some(p) = self.cached {
            return p;
        }
        let p = self.projector.project(self.offset, self.drag_delta);
        self.cached = Some(p);
        p
    }

    /// Projection without touching the cache.
    #[must_use]
    pub fn peek(&self) -> Projection {
        self.cached
            .unwrap_or_else(|| self.projector.project(self.offset, self.drag_delta))
    }
}
