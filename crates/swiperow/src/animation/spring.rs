#![forbid(unsafe_code)]

//! Damped harmonic oscillator (spring) used to settle a row.
//!
//! Based on the classical damped spring equation:
//!
//!   F = -stiffness × (position - target) - damping × velocity
//!
//! Positions are px and velocities px/s, so a release velocity from the
//! gesture recognizer can be carried straight into the spring.
//!
//! # Integration
//!
//! Semi-implicit Euler with large frame deltas subdivided into steps of at
//! most 4ms for stability with stiff settings.
//!
//! # Invariants
//!
//! 1. A spring at rest (`is_at_rest() == true`) does not move on `advance`.
//! 2. Coming to rest snaps the position exactly onto the target and zeroes
//!    the velocity, so settled offsets are exact.
//! 3. Stiffness is always positive and damping non-negative.

use std::time::Duration;

use super::Animation;
use crate::config::SpringConfig;

/// Maximum dt per integration step (4ms).
const MAX_STEP_SECS: f64 = 0.004;

/// Minimum stiffness to prevent degenerate springs.
const MIN_STIFFNESS: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    rest_displacement: f64,
    rest_speed: f64,
    at_rest: bool,
}

impl Spring {
    /// Create a spring at `from`, heading for `to`, with default parameters.
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self::with_config(from, to, &SpringConfig::default())
    }

    #[must_use]
    pub fn with_config(from: f64, to: f64, config: &SpringConfig) -> Self {
        Self {
            position: from,
            velocity: 0.0,
            target: to,
            stiffness: config.stiffness.max(MIN_STIFFNESS),
            damping: config.damping.max(0.0),
            rest_displacement: config.rest_displacement_threshold.abs(),
            rest_speed: config.rest_speed_threshold.abs(),
            at_rest: false,
        }
    }

    /// Start with an initial velocity (builder pattern).
    #[must_use]
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[inline]
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Damping coefficient at which the spring stops oscillating.
    #[must_use]
    pub fn critical_damping(&self) -> f64 {
        2.0 * self.stiffness.sqrt()
    }

    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    fn settled(&self) -> bool {
        (self.position - self.target).abs() <= self.rest_displacement
            && self.velocity.abs() <= self.rest_speed
    }

    /// Advance the spring by `dt`, subdividing if necessary for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }
        // A spring born at rest settles on its first tick.
        if self.settled() {
            self.finish();
            return;
        }

        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }

        if self.settled() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.at_rest = true;
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.at_rest
    }

    fn value(&self) -> f64 {
        self.position
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Spring parameter sets for row settling.
pub mod presets {
    use crate::config::SpringConfig;

    /// The stock settle: zero bounciness, near-critical damping.
    #[must_use]
    pub fn stock() -> SpringConfig {
        SpringConfig::default()
    }

    /// Snappier settle for dense lists.
    #[must_use]
    pub fn snappy() -> SpringConfig {
        SpringConfig::default().with_stiffness(600.0).with_damping(49.0)
    }

    /// Visible bounce past the snap point.
    #[must_use]
    pub fn bouncy() -> SpringConfig {
        SpringConfig::default().with_stiffness(300.0).with_damping(12.0)
    }
}
