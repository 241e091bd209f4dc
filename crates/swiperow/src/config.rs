#![forbid(unsafe_code)]

//! Tunable parameters for a swipeable row.
//!
//! [`SwipeConfig`] is a plain builder-style struct with defaults matching the
//! stock component: friction 1, no rubber-band damping, thresholds at half the
//! panel width, 10px edge dead-zones, and a zero-bounce spring.
//!
//! With the `config` feature enabled the struct can also be loaded from TOML
//! or JSON:
//!
//! ```toml
//! friction = 2.0
//! left_threshold = 1000.0
//! left_trigger = 64.0
//!
//! [spring]
//! stiffness = 342.0
//! damping = 37.0
//! ```
//!
//! ```rust,ignore
//! let cfg = SwipeConfig::from_toml_file("swipe.toml")?;
//! ```
//!
//! Values that arrive out of range through deserialization are reported by
//! [`SwipeConfig::validate`]; values set through the builders are clamped.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Default edge dead-zone in px before a drag is recognized.
pub const DEFAULT_EDGE_DEAD_ZONE: f64 = 10.0;

/// Replace NaN/sub-minimum values with `min`.
#[inline]
pub(crate) fn at_least(value: f64, min: f64) -> f64 {
    if value.is_nan() { min } else { value.max(min) }
}

/// Keep an optional distance only if it is a usable number.
#[inline]
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

// ---------------------------------------------------------------------------
// SpringConfig
// ---------------------------------------------------------------------------

/// Spring parameters for the settle animation.
///
/// The defaults reproduce a platform spring configured with zero bounciness
/// and speed 12, which is very close to critically damped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SpringConfig {
    /// Restoring force per px of displacement.
    pub stiffness: f64,
    /// Velocity drag.
    pub damping: f64,
    /// Speed (px/s) below which the spring may come to rest.
    pub rest_speed_threshold: f64,
    /// Distance (px) from the target below which the spring may come to rest.
    pub rest_displacement_threshold: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 342.0,
            damping: 37.0,
            rest_speed_threshold: 1.7,
            rest_displacement_threshold: 0.4,
        }
    }
}

impl SpringConfig {
    #[must_use]
    pub fn with_stiffness(mut self, k: f64) -> Self {
        self.stiffness = k;
        self
    }

    #[must_use]
    pub fn with_damping(mut self, c: f64) -> Self {
        self.damping = c;
        self
    }

    #[must_use]
    pub fn with_rest_speed_threshold(mut self, v: f64) -> Self {
        self.rest_speed_threshold = v.abs();
        self
    }

    #[must_use]
    pub fn with_rest_displacement_threshold(mut self, d: f64) -> Self {
        self.rest_displacement_threshold = d.abs();
        self
    }
}

// ---------------------------------------------------------------------------
// SwipeConfig
// ---------------------------------------------------------------------------

/// Configuration of one swipeable row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SwipeConfig {
    /// Gesture px per visual px. 2 means the row moves at half the finger speed.
    pub friction: f64,
    /// Damping applied past a panel's edge when overshoot is enabled.
    pub overshoot_friction: f64,
    /// Release distance that opens (or keeps open) the left panel.
    /// Defaults to half the left panel width.
    pub left_threshold: Option<f64>,
    /// Release distance that opens (or keeps open) the right panel.
    /// Defaults to half the right panel width.
    pub right_threshold: Option<f64>,
    /// One-shot trigger distance, independent of the snap threshold.
    /// Defaults to half the left panel width when a left panel is measured.
    pub left_trigger: Option<f64>,
    /// Allow dragging past the left panel. Defaults to `left_width > 0`.
    pub overshoot_left: Option<bool>,
    /// Allow dragging past the right panel. Defaults to `right_width > 0`.
    pub overshoot_right: Option<bool>,
    /// Rightward travel required before a drag activates.
    pub drag_offset_from_left_edge: f64,
    /// Leftward travel required before a drag activates.
    pub drag_offset_from_right_edge: f64,
    /// When false, gesture samples are ignored (e.g. during multi-select).
    pub enabled: bool,
    pub spring: SpringConfig,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            friction: 1.0,
            overshoot_friction: 1.0,
            left_threshold: None,
            right_threshold: None,
            left_trigger: None,
            overshoot_left: None,
            overshoot_right: None,
            drag_offset_from_left_edge: DEFAULT_EDGE_DEAD_ZONE,
            drag_offset_from_right_edge: DEFAULT_EDGE_DEAD_ZONE,
            enabled: true,
            spring: SpringConfig::default(),
        }
    }
}

impl SwipeConfig {
    /// Set friction (builder pattern). Clamped to minimum 1.
    #[must_use]
    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = at_least(friction, 1.0);
        self
    }

    /// Set overshoot friction (builder pattern). Clamped to minimum 1.
    #[must_use]
    pub fn with_overshoot_friction(mut self, friction: f64) -> Self {
        self.overshoot_friction = at_least(friction, 1.0);
        self
    }

    #[must_use]
    pub fn with_left_threshold(mut self, threshold: f64) -> Self {
        self.left_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn with_right_threshold(mut self, threshold: f64) -> Self {
        self.right_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn with_left_trigger(mut self, trigger: f64) -> Self {
        self.left_trigger = Some(trigger);
        self
    }

    #[must_use]
    pub fn with_overshoot_left(mut self, allow: bool) -> Self {
        self.overshoot_left = Some(allow);
        self
    }

    #[must_use]
    pub fn with_overshoot_right(mut self, allow: bool) -> Self {
        self.overshoot_right = Some(allow);
        self
    }

    /// Set both edge dead-zones (builder pattern).
    #[must_use]
    pub fn with_drag_offsets(mut self, from_left_edge: f64, from_right_edge: f64) -> Self {
        self.drag_offset_from_left_edge = at_least(from_left_edge, 0.0);
        self.drag_offset_from_right_edge = at_least(from_right_edge, 0.0);
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Clamp every field into its usable range.
    ///
    /// The engine calls this on every config it accepts, so out-of-range
    /// values never reach the projection or resolver.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.friction = at_least(self.friction, 1.0);
        self.overshoot_friction = at_least(self.overshoot_friction, 1.0);
        self.left_threshold = finite(self.left_threshold);
        self.right_threshold = finite(self.right_threshold);
        self.left_trigger = finite(self.left_trigger);
        self.drag_offset_from_left_edge = at_least(self.drag_offset_from_left_edge, 0.0);
        self.drag_offset_from_right_edge = at_least(self.drag_offset_from_right_edge, 0.0);
        self.spring.stiffness = at_least(self.spring.stiffness, 0.1);
        self.spring.damping = at_least(self.spring.damping, 0.0);
        self.spring.rest_speed_threshold = at_least(self.spring.rest_speed_threshold.abs(), 0.0);
        self.spring.rest_displacement_threshold =
            at_least(self.spring.rest_displacement_threshold.abs(), 0.0);
        self
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.friction.is_nan() || self.friction < 1.0 {
            errors.push(format!("friction must be >= 1, got {}", self.friction));
        }
        if self.overshoot_friction.is_nan() || self.overshoot_friction < 1.0 {
            errors.push(format!(
                "overshoot_friction must be >= 1, got {}",
                self.overshoot_friction
            ));
        }
        for (name, value) in [
            ("left_threshold", self.left_threshold),
            ("right_threshold", self.right_threshold),
            ("left_trigger", self.left_trigger),
        ] {
            if value.is_some_and(f64::is_nan) {
                errors.push(format!("{name} must be a number"));
            }
        }
        for (name, value) in [
            ("drag_offset_from_left_edge", self.drag_offset_from_left_edge),
            ("drag_offset_from_right_edge", self.drag_offset_from_right_edge),
        ] {
            if value.is_nan() || value < 0.0 {
                errors.push(format!("{name} must be >= 0, got {value}"));
            }
        }
        if self.spring.stiffness.is_nan() || self.spring.stiffness <= 0.0 {
            errors.push(format!(
                "spring.stiffness must be > 0, got {}",
                self.spring.stiffness
            ));
        }
        if self.spring.damping.is_nan() || self.spring.damping < 0.0 {
            errors.push(format!(
                "spring.damping must be >= 0, got {}",
                self.spring.damping
            ));
        }
        if self.spring.rest_speed_threshold.is_nan() || self.spring.rest_speed_threshold < 0.0 {
            errors.push("spring.rest_speed_threshold must be >= 0".to_string());
        }
        if self.spring.rest_displacement_threshold.is_nan()
            || self.spring.rest_displacement_threshold < 0.0
        {
            errors.push("spring.rest_displacement_threshold must be >= 0".to_string());
        }

        errors
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        cfg.checked()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        cfg.checked()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    #[cfg(feature = "config")]
    fn checked(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a swipe configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
