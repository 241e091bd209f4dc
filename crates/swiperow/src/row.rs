#![forbid(unsafe_code)]

//! The swipeable row: gesture input, release resolution, settling, and the
//! imperative handle, wired together for one list item.
//!
//! # Driving a row
//!
//! ```ignore
//! let mut row = SwipeableRow::new(SwipeConfig::default().with_friction(2.0));
//! row.set_row_width(360.0);
//! row.set_left_width(64.0);
//!
//! for sample in samples {
//!     for event in row.handle_sample(sample) {
//!         dispatch(event);
//!     }
//! }
//! // every frame:
//! for event in row.tick(frame_dt) {
//!     dispatch(event);
//! }
//! draw_content_at(row.offset());
//! draw_left_panel(row.left_panel());
//! ```
//!
//! # Invariants
//!
//! 1. At rest, the sign of `offset()` equals `state()`.
//! 2. `offset()` never passes a panel edge on a side whose overshoot is off.
//! 3. Interrupting a settle (touch-down or any imperative call) leaves
//!    `offset()` unchanged at the moment of interruption.
//! 4. `state()` changes when a settle starts, to the state of its target.
//!    `Open`/`Close` events fire only when a settle completes naturally.
//! 5. Each settle is announced once: a touch that ends without dragging
//!    resumes the settle it held without a second `Will*` event.
//! 6. `reset()` emits nothing.

use std::time::Duration;

use crate::animation::{Animation, Settle, SettleAnimator};
use crate::config::SwipeConfig;
use crate::event::SwipeEvent;
use crate::gesture::{DragGate, DragStep, DragTracker, GesturePhase, GestureSample};
use crate::graph::ProjectionGraph;
use crate::metrics::PanelMetrics;
use crate::projector::Projection;
use crate::release::{self, Release, ReleaseParams};
use crate::state::{Direction, PointerPolicy, RowState};

/// Values a host needs to draw one side panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Reveal progress in `[0, 1]`.
    pub progress: f64,
    /// Current visual row offset.
    pub drag_offset: f64,
    /// A hidden panel is moved off-screen so it cannot catch touches.
    pub visible: bool,
}

/// One swipeable list row.
#[derive(Debug, Clone)]
pub struct SwipeableRow {
    config: SwipeConfig,
    metrics: PanelMetrics,
    graph: ProjectionGraph,
    state: RowState,
    animator: SettleAnimator,
    tracker: DragTracker,
    /// Settle held by the current touch, resumed if the touch never drags.
    held: Option<Settle>,
}

impl Default for SwipeableRow {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl SwipeableRow {
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        let config = config.sanitized();
        let metrics = PanelMetrics::new();
        Self {
            graph: ProjectionGraph::new(&config, &metrics),
            animator: SettleAnimator::new(config.spring),
            config,
            metrics,
            state: RowState::Closed,
            tracker: DragTracker::new(),
            held: None,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn state(&self) -> RowState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn metrics(&self) -> &PanelMetrics {
        &self.metrics
    }

    /// Current projection of the row.
    #[must_use]
    pub fn projection(&self) -> Projection {
        self.graph.peek()
    }

    /// Visual row offset, px.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.graph.peek().trans_x
    }

    #[must_use]
    pub fn left_panel(&self) -> PanelFrame {
        let p = self.graph.peek();
        PanelFrame {
            progress: p.left_progress,
            drag_offset: p.trans_x,
            visible: p.left_visible(),
        }
    }

    #[must_use]
    pub fn right_panel(&self) -> PanelFrame {
        let p = self.graph.peek();
        PanelFrame {
            progress: p.right_progress,
            drag_offset: p.trans_x,
            visible: p.right_visible(),
        }
    }

    /// How touches reach the row content.
    #[must_use]
    pub fn pointer_policy(&self) -> PointerPolicy {
        self.state.pointer_policy()
    }

    #[inline]
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.animator.is_running()
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Whether the row rests at its snapped offset with nothing in flight.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        !self.animator.is_running()
            && !self.tracker.is_touching()
            && self.graph.drag_delta() == 0.0
            && self.graph.offset() == self.params().settled_offset(self.state)
    }

    fn params(&self) -> ReleaseParams {
        ReleaseParams::resolve(&self.config, &self.metrics)
    }

    fn gate(&self) -> DragGate {
        DragGate::new(
            self.config.drag_offset_from_left_edge,
            self.config.drag_offset_from_right_edge,
        )
    }

    // -----------------------------------------------------------------------
    // Configuration and layout
    // -----------------------------------------------------------------------

    /// Replace the configuration.
    ///
    /// Disabling a row mid-touch abandons the touch. A settle the touch was
    /// holding carries on; otherwise the row settles back to its state.
    pub fn set_config(&mut self, config: SwipeConfig) -> Vec<SwipeEvent> {
        self.config = config.sanitized();
        self.animator.set_config(self.config.spring);
        self.sync();
        if !self.config.enabled && self.tracker.is_touching() {
            tracing::debug!("row disabled during touch");
            if let Some(settle) = self.held.take() {
                self.tracker.abandon();
                self.animator.resume(settle);
                return Vec::new();
            }
            let target = self.params().settled_offset(self.state);
            return self.settle_to(target);
        }
        Vec::new()
    }

    /// Enable or disable gesture handling.
    pub fn set_enabled(&mut self, enabled: bool) -> Vec<SwipeEvent> {
        let config = self.config.clone().with_enabled(enabled);
        self.set_config(config)
    }

    /// Layout callback: row container width.
    pub fn set_row_width(&mut self, width: f64) {
        if self.metrics.set_row_width(width) {
            self.sync();
        }
    }

    /// Layout callback: left panel width (x of its trailing edge).
    pub fn set_left_width(&mut self, width: f64) {
        if self.metrics.set_left_width(width) {
            self.sync();
        }
    }

    /// Layout callback: x where the right panel starts.
    pub fn set_right_offset(&mut self, offset: f64) {
        if self.metrics.set_right_offset(offset) {
            self.sync();
        }
    }

    /// Rebuild derived projections after a structural change and keep a
    /// resting row glued to its snapped offset.
    fn sync(&mut self) {
        self.graph.sync(&self.config, &self.metrics);
        if !self.animator.is_running() && !self.tracker.is_touching() {
            self.snap_to_state();
        }
        self.graph.projection();
    }

    /// Put the baseline at the settled offset of the current state.
    fn snap_to_state(&mut self) {
        let settled = self.params().settled_offset(self.state);
        // A panel that collapsed to zero width leaves nothing open.
        if settled == 0.0 && self.state.is_open() {
            tracing::debug!(from = ?self.state, "open panel collapsed");
            self.state = RowState::Closed;
        }
        self.graph.set_offset(settled);
    }

    // -----------------------------------------------------------------------
    // Gesture input
    // -----------------------------------------------------------------------

    /// Feed one pan sample.
    pub fn handle_sample(&mut self, sample: GestureSample) -> Vec<SwipeEvent> {
        if !self.config.enabled {
            if sample.phase == GesturePhase::Ended {
                self.tracker.reset();
            }
            return Vec::new();
        }
        let mut events = Vec::new();

        if !self.tracker.is_touching() && sample.phase != GesturePhase::Ended {
            self.begin_touch();
        }

        let gate = self.gate();
        match self.tracker.process(sample, &gate) {
            None => {}
            Some(DragStep::Activate(s)) => {
                self.held = None;
                let params = self.params();
                let translation =
                    release::toss_translation(s.translation_x, s.velocity_x, params.friction);
                let direction = release::start_drag_direction(self.state, translation);
                let event = if self.state.is_open() {
                    SwipeEvent::CloseStartDrag(direction)
                } else {
                    SwipeEvent::OpenStartDrag(direction)
                };
                tracing::debug!(state = ?self.state, %direction, "drag start");
                events.push(event);
                self.graph.set_drag_delta(s.translation_x);
            }
            Some(DragStep::Move(s)) => {
                self.graph.set_drag_delta(s.translation_x);
                tracing::trace!(drag_x = s.translation_x, "drag move");
            }
            Some(DragStep::Release(s)) => {
                self.held = None;
                events.extend(self.release(s));
            }
            Some(DragStep::Tap) => {
                events.extend(self.handle_tap());
            }
        }

        self.graph.projection();
        events
    }

    /// Touch-down: hold a running settle where it is.
    fn begin_touch(&mut self) {
        if let Some(settle) = self.animator.suspend() {
            self.graph.set_offset(settle.value());
            self.graph.set_drag_delta(0.0);
            self.held = Some(settle);
        }
    }

    fn release(&mut self, sample: GestureSample) -> Vec<SwipeEvent> {
        let params = self.params();
        let resolution = release::resolve(
            &Release {
                baseline: self.graph.offset(),
                drag_x: sample.translation_x,
                velocity_x: sample.velocity_x,
                state: self.state,
            },
            &params,
        );
        tracing::debug!(
            state = ?self.state,
            translation = resolution.translation,
            to = resolution.target,
            "drag release"
        );

        let mut events = Vec::with_capacity(2);
        if resolution.left_trigger {
            events.push(SwipeEvent::LeftTrigger);
        }
        events.push(self.animate(
            resolution.start_offset,
            resolution.target,
            resolution.velocity,
        ));
        events
    }

    /// A touch that never dragged. An open (or opening) row closes; a held
    /// settle toward closed just carries on.
    fn handle_tap(&mut self) -> Vec<SwipeEvent> {
        let held = self.held.take();
        if self.state.is_open() {
            return self.close();
        }
        if let Some(settle) = held {
            self.animator.resume(settle);
        }
        Vec::new()
    }

    /// A tap on the row content from a host tap recognizer.
    ///
    /// Closes an open row. On a closed row the tap belongs to the content and
    /// nothing happens here.
    pub fn tap(&mut self) -> Vec<SwipeEvent> {
        if self.state.is_open() { self.close() } else { Vec::new() }
    }

    // -----------------------------------------------------------------------
    // Settling
    // -----------------------------------------------------------------------

    /// Start a settle and commit the state it is heading for.
    fn animate(&mut self, from: f64, target: f64, velocity: f64) -> SwipeEvent {
        let state = RowState::from_offset(target);
        if state != self.state {
            tracing::debug!(from = ?self.state, to = ?state, "row state");
        }
        self.state = state;
        self.graph.set_drag_delta(0.0);
        self.graph.set_offset(from);
        self.graph.projection();
        self.animator.start(from, target, velocity)
    }

    /// Advance the settle animation by one frame.
    pub fn tick(&mut self, dt: Duration) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        if let Some(outcome) = self.animator.tick(dt) {
            // Layout may have moved the panel edge while the settle ran.
            self.snap_to_state();
            events.push(outcome.event);
        } else if let Some(at) = self.animator.value() {
            self.graph.set_offset(at);
        }
        self.graph.projection();
        events
    }

    // -----------------------------------------------------------------------
    // Imperative handle
    // -----------------------------------------------------------------------

    /// Take over from any running settle or drag, folding the current
    /// position into the baseline.
    fn interrupt(&mut self) {
        let raw = match self.animator.cancel() {
            Some(at) => at,
            None => self.graph.raw(),
        };
        self.tracker.abandon();
        self.held = None;
        self.graph.set_drag_delta(0.0);
        self.graph.set_offset(raw);
    }

    fn settle_to(&mut self, target: f64) -> Vec<SwipeEvent> {
        let resting = !self.animator.is_running()
            && !self.tracker.is_dragging()
            && self.graph.raw() == target
            && self.params().settled_offset(self.state) == target;
        if resting {
            return Vec::new();
        }
        self.interrupt();
        let from = self.graph.offset();
        vec![self.animate(from, target, 0.0)]
    }

    /// Animate the panel on `direction` open.
    pub fn open(&mut self, direction: Direction) -> Vec<SwipeEvent> {
        let target = self.params().open_offset(direction);
        self.settle_to(target)
    }

    /// Animate the row closed. A closed row at rest is left untouched.
    pub fn close(&mut self) -> Vec<SwipeEvent> {
        self.settle_to(0.0)
    }

    /// Snap to closed immediately, without animation or events.
    pub fn reset(&mut self) {
        self.animator.cancel();
        self.tracker.abandon();
        self.held = None;
        self.graph.set_drag_delta(0.0);
        self.graph.set_offset(0.0);
        self.graph.projection();
        if self.state != RowState::Closed {
            tracing::debug!(from = ?self.state, "row reset");
        }
        self.state = RowState::Closed;
    }
}
