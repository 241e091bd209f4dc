#![forbid(unsafe_code)]

//! Pan samples and drag recognition for a single row.
//!
//! A platform adapter turns touch input into [`GestureSample`]s. The
//! [`DragTracker`] turns a stream of samples into [`DragStep`]s:
//!
//! ```text
//!   Pending ──(|dx| past dead-zone)──▶ Activate ──▶ Move* ──▶ Release
//!      │
//!      └──(Ended, never activated)──▶ Tap
//! ```
//!
//! # Invariants
//!
//! 1. `Activate` is emitted at most once per touch and always precedes
//!    `Move`/`Release` for that touch.
//! 2. `Tap` and `Release` never both emit for the same touch.
//! 3. After `Release` or `Tap` the tracker is idle again.
//!
//! Samples carry cumulative translation since touch-down, so the dead-zone
//! distance is part of the drag once it activates.

/// Phase reported by the platform pan recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Finger down, recognizer not yet committed.
    Pending,
    /// Recognizer committed to a horizontal pan.
    Active,
    /// Finger lifted or the recognizer was cancelled.
    Ended,
}

/// One frame of pan input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Horizontal translation since touch-down, px.
    pub translation_x: f64,
    /// Horizontal velocity, px/s.
    pub velocity_x: f64,
    pub phase: GesturePhase,
}

impl GestureSample {
    #[must_use]
    pub const fn new(translation_x: f64, velocity_x: f64, phase: GesturePhase) -> Self {
        Self {
            translation_x,
            velocity_x,
            phase,
        }
    }

    #[must_use]
    pub const fn pending(translation_x: f64) -> Self {
        Self::new(translation_x, 0.0, GesturePhase::Pending)
    }

    #[must_use]
    pub const fn active(translation_x: f64, velocity_x: f64) -> Self {
        Self::new(translation_x, velocity_x, GesturePhase::Active)
    }

    #[must_use]
    pub const fn ended(translation_x: f64, velocity_x: f64) -> Self {
        Self::new(translation_x, velocity_x, GesturePhase::Ended)
    }

    /// Replace non-finite readings with zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let fix = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            translation_x: fix(self.translation_x),
            velocity_x: fix(self.velocity_x),
            phase: self.phase,
        }
    }
}

/// Horizontal dead-zone a drag must leave before it activates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGate {
    /// Rightward travel required.
    pub from_left_edge: f64,
    /// Leftward travel required.
    pub from_right_edge: f64,
}

impl DragGate {
    #[must_use]
    pub const fn new(from_left_edge: f64, from_right_edge: f64) -> Self {
        Self {
            from_left_edge,
            from_right_edge,
        }
    }

    /// Whether a translation has left the dead-zone.
    #[inline]
    #[must_use]
    pub fn passes(&self, translation_x: f64) -> bool {
        translation_x > self.from_left_edge || translation_x < -self.from_right_edge
    }
}

/// Recognized step of a touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragStep {
    /// The drag just activated; carries the activating sample.
    Activate(GestureSample),
    /// Drag moved.
    Move(GestureSample),
    /// Drag released.
    Release(GestureSample),
    /// Touch ended without ever activating a drag.
    Tap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TouchState {
    #[default]
    Idle,
    Pending,
    Dragging,
    /// Touch continues but its drag was taken over; swallow until it ends.
    Abandoned,
}

/// Per-row drag recognizer.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    state: TouchState,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == TouchState::Dragging
    }

    #[inline]
    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.state != TouchState::Idle
    }

    /// Drop any in-progress touch without emitting anything.
    pub fn reset(&mut self) {
        self.state = TouchState::Idle;
    }

    /// Stop tracking the current touch. Its remaining samples, including
    /// the final `Ended`, produce no steps.
    pub fn abandon(&mut self) {
        if self.state != TouchState::Idle {
            self.state = TouchState::Abandoned;
        }
    }

    /// Feed one sample. Emits at most one step; `Move` is emitted for the
    /// activating sample's successors only.
    pub fn process(&mut self, sample: GestureSample, gate: &DragGate) -> Option<DragStep> {
        let sample = sample.sanitized();
        match (self.state, sample.phase) {
            (TouchState::Abandoned, GesturePhase::Ended) => {
                self.state = TouchState::Idle;
                None
            }
            (TouchState::Abandoned, _) => None,
            (TouchState::Dragging, GesturePhase::Ended) => {
                self.state = TouchState::Idle;
                Some(DragStep::Release(sample))
            }
            (TouchState::Dragging, _) => Some(DragStep::Move(sample)),
            (_, GesturePhase::Ended) => {
                let was_touching = self.state == TouchState::Pending;
                self.state = TouchState::Idle;
                was_touching.then_some(DragStep::Tap)
            }
            (_, GesturePhase::Pending | GesturePhase::Active) => {
                if gate.passes(sample.translation_x) {
                    self.state = TouchState::Dragging;
                    Some(DragStep::Activate(sample))
                } else {
                    self.state = TouchState::Pending;
                    None
                }
            }
        }
    }
}
