#![forbid(unsafe_code)]

//! Settle animation: spring a row from its release offset to a snap target.
//!
//! # Lifecycle
//!
//! ```text
//!   start(from, to, v) ──▶ WillOpen / WillClose   (returned synchronously)
//!        │
//!        ├── tick ... tick ──▶ Open / Close         (natural completion only)
//!        │
//!        └── cancel() ──▶ Some(current value)       (no completion event)
//! ```
//!
//! Starting a new settle while one is running cancels the old one first; its
//! completion event is never emitted.

use std::time::Duration;

use super::Animation;
use super::spring::Spring;
use crate::config::SpringConfig;
use crate::event::SwipeEvent;
use crate::state::Direction;

/// One in-flight settle.
#[derive(Debug, Clone)]
pub struct Settle {
    spring: Spring,
    from: f64,
}

impl Settle {
    #[must_use]
    pub fn new(from: f64, target: f64, velocity: f64, config: &SpringConfig) -> Self {
        Self {
            spring: Spring::with_config(from, target, config).with_velocity(velocity),
            from,
        }
    }

    #[inline]
    #[must_use]
    pub fn start_offset(&self) -> f64 {
        self.from
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.spring.target()
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.spring.velocity()
    }

    /// Event announcing this settle, fired before the first frame.
    #[must_use]
    pub fn will_event(&self) -> SwipeEvent {
        let target = self.target();
        if target != 0.0 {
            SwipeEvent::WillOpen(Direction::from_offset(target))
        } else {
            SwipeEvent::WillClose(Direction::from_offset(self.from))
        }
    }

    /// Event announcing natural completion.
    #[must_use]
    pub fn done_event(&self) -> SwipeEvent {
        let target = self.target();
        if target != 0.0 {
            SwipeEvent::Open(Direction::from_offset(target))
        } else {
            SwipeEvent::Close(Direction::from_offset(self.from))
        }
    }
}

impl Animation for Settle {
    fn tick(&mut self, dt: Duration) {
        self.spring.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.spring.is_at_rest()
    }

    fn value(&self) -> f64 {
        self.spring.position()
    }
}

/// Result of a settle reaching its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleOutcome {
    /// The snapped offset the row now rests at.
    pub target: f64,
    /// `Open(..)` or `Close(..)`.
    pub event: SwipeEvent,
}

/// Owns at most one running settle for a row.
#[derive(Debug, Clone, Default)]
pub struct SettleAnimator {
    config: SpringConfig,
    active: Option<Settle>,
}

impl SettleAnimator {
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Spring parameters for settles started from now on.
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&Settle> {
        self.active.as_ref()
    }

    /// Current animated value, if a settle is running.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.active.as_ref().map(Animation::value)
    }

    /// Start a settle, replacing any running one.
    ///
    /// Returns the `WillOpen`/`WillClose` event, which the caller must
    /// deliver before the next frame is rendered.
    pub fn start(&mut self, from: f64, target: f64, velocity: f64) -> SwipeEvent {
        if let Some(prev) = self.active.take() {
            tracing::debug!(
                at = prev.value(),
                to = prev.target(),
                "settle replaced before completion"
            );
        }
        let settle = Settle::new(from, target, velocity, &self.config);
        let event = settle.will_event();
        tracing::debug!(from, to = target, velocity, event = event.name(), "settle start");
        self.active = Some(settle);
        event
    }

    /// Stop the running settle, returning the value it had reached.
    pub fn cancel(&mut self) -> Option<f64> {
        self.suspend().map(|settle| settle.value())
    }

    /// Stop the running settle and hand it back, spring state intact, so it
    /// can be [`resume`](Self::resume)d later.
    pub fn suspend(&mut self) -> Option<Settle> {
        let settle = self.active.take()?;
        tracing::debug!(at = settle.value(), to = settle.target(), "settle interrupted");
        Some(settle)
    }

    /// Put a suspended settle back in flight. Nothing is announced; the
    /// settle's `Will*` event was already delivered when it first started.
    pub fn resume(&mut self, settle: Settle) {
        tracing::debug!(at = settle.value(), to = settle.target(), "settle resumed");
        self.active = Some(settle);
    }

    /// Advance the running settle by one frame.
    ///
    /// Returns the outcome only on the frame the settle comes to rest.
    pub fn tick(&mut self, dt: Duration) -> Option<SettleOutcome> {
        let settle = self.active.as_mut()?;
        settle.tick(dt);
        if !settle.is_complete() {
            return None;
        }
        let settle = self.active.take()?;
        let outcome = SettleOutcome {
            target: settle.target(),
            event: settle.done_event(),
        };
        tracing::debug!(to = outcome.target, event = outcome.event.name(), "settle done");
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_16: Duration = Duration::from_millis(16);

    fn run_to_rest(anim: &mut SettleAnimator) -> Option<SettleOutcome> {
        for _ in 0..600 {
            if let Some(outcome) = anim.tick(MS_16) {
                return Some(outcome);
            }
        }
        None
    }

    #[test]
    fn will_open_fires_on_start() {
        let mut anim = SettleAnimator::default();
        assert_eq!(anim.start(20.0, 64.0, 0.0), SwipeEvent::WillOpen(Direction::Left));
        assert_eq!(anim.start(-20.0, -80.0, 0.0), SwipeEvent::WillOpen(Direction::Right));
    }

    #[test]
    fn will_close_direction_follows_start_sign() {
        let mut anim = SettleAnimator::default();
        assert_eq!(anim.start(30.0, 0.0, 0.0), SwipeEvent::WillClose(Direction::Left));
        assert_eq!(anim.start(-30.0, 0.0, 0.0), SwipeEvent::WillClose(Direction::Right));
        assert_eq!(anim.start(0.0, 0.0, 0.0), SwipeEvent::WillClose(Direction::Right));
    }

    #[test]
    fn completion_reports_target_and_event() {
        let mut anim = SettleAnimator::default();
        anim.start(10.0, 64.0, 200.0);
        let outcome = run_to_rest(&mut anim).expect("settles");
        assert_eq!(outcome.target, 64.0);
        assert_eq!(outcome.event, SwipeEvent::Open(Direction::Left));
        assert!(!anim.is_running());
        assert!(anim.tick(MS_16).is_none());
    }

    #[test]
    fn close_completion_uses_start_direction() {
        let mut anim = SettleAnimator::default();
        anim.start(-80.0, 0.0, 0.0);
        let outcome = run_to_rest(&mut anim).expect("settles");
        assert_eq!(outcome.event, SwipeEvent::Close(Direction::Right));
    }

    #[test]
    fn cancel_returns_current_value_without_outcome() {
        let mut anim = SettleAnimator::default();
        anim.start(0.0, 64.0, 0.0);
        for _ in 0..3 {
            assert!(anim.tick(MS_16).is_none());
        }
        let mid = anim.value().expect("running");
        assert_eq!(anim.cancel(), Some(mid));
        assert!(mid > 0.0 && mid < 64.0);
        assert!(run_to_rest(&mut anim).is_none());
        assert_eq!(anim.cancel(), None);
    }

    #[test]
    fn suspended_settle_resumes_where_it_stopped() {
        let mut anim = SettleAnimator::default();
        anim.start(0.0, 64.0, 0.0);
        for _ in 0..3 {
            anim.tick(MS_16);
        }
        let settle = anim.suspend().expect("running");
        let (at, velocity) = (settle.value(), settle.velocity());
        assert!(!anim.is_running());
        assert!(velocity > 0.0);

        anim.resume(settle);
        assert_eq!(anim.value(), Some(at));
        assert_eq!(anim.active().map(Settle::velocity), Some(velocity));
        let outcome = run_to_rest(&mut anim).expect("settles");
        assert_eq!(outcome.event, SwipeEvent::Open(Direction::Left));
    }
}
