#![forbid(unsafe_code)]

//! Frame-driven animation primitives.
//!
//! Animations advance only when the host calls [`Animation::tick`] with the
//! elapsed frame time; nothing here owns a clock or a thread.

pub mod settle;
pub mod spring;

use std::time::Duration;

pub use settle::{Settle, SettleAnimator, SettleOutcome};
pub use spring::Spring;

/// A value that evolves over frame ticks.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has come to rest.
    fn is_complete(&self) -> bool;

    /// Current value (px for the swipe engine).
    fn value(&self) -> f64;
}
