//! Per-element gesture settings.
//!
//! Settings arrive from the host page as a loose bag of optional values
//! ([`GestureOptions`]) and are resolved once, at bind time, into an immutable
//! [`GestureConfig`]. Validation happens before any listener is attached, so a
//! bad option never leaves a half-bound element behind.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("FrictionTouch: element must be provided.")]
    MissingElement,
    #[error("FrictionTouch: {option} must be non-negative (got {value}).")]
    Negative { option: &'static str, value: f64 },
    #[error("FrictionTouch: {option} must be a number.")]
    NotANumber { option: &'static str },
    #[error("FrictionTouch: {option} has an unsupported type.")]
    InvalidType { option: &'static str },
}

/// Resolved, validated settings. Immutable once a controller owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    pub flick_duration_ms: f64,
    pub flick_threshold: f64,
    pub friction: f64,
    pub max_rotation: f64,
    pub return_duration_ms: f64,
    pub reset_position: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            flick_duration_ms: DEFAULT_FLICK_DURATION_MS,
            flick_threshold: DEFAULT_FLICK_THRESHOLD,
            friction: DEFAULT_FRICTION,
            max_rotation: DEFAULT_MAX_ROTATION,
            return_duration_ms: DEFAULT_RETURN_DURATION_MS,
            reset_position: false,
        }
    }
}

impl GestureConfig {
    /// Reject negative or NaN values for any of the numeric settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numeric = [
            (OPT_FLICK_DURATION, self.flick_duration_ms),
            (OPT_FLICK_THRESHOLD, self.flick_threshold),
            (OPT_FRICTION, self.friction),
            (OPT_MAX_ROTATION, self.max_rotation),
            (OPT_RETURN_DURATION, self.return_duration_ms),
        ];
        for (option, value) in numeric {
            if value.is_nan() {
                return Err(ConfigError::NotANumber { option });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { option, value });
            }
        }
        Ok(())
    }
}

/// Optional settings as supplied by the host. Missing values take defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureOptions {
    pub flick_duration_ms: Option<f64>,
    pub flick_threshold: Option<f64>,
    pub friction: Option<f64>,
    pub max_rotation: Option<f64>,
    pub return_duration_ms: Option<f64>,
    pub reset_position: Option<bool>,
}

impl GestureOptions {
    pub fn resolve(&self) -> Result<GestureConfig, ConfigError> {
        let defaults = GestureConfig::default();
        let config = GestureConfig {
            flick_duration_ms: self.flick_duration_ms.unwrap_or(defaults.flick_duration_ms),
            flick_threshold: self.flick_threshold.unwrap_or(defaults.flick_threshold),
            friction: self.friction.unwrap_or(defaults.friction),
            max_rotation: self.max_rotation.unwrap_or(defaults.max_rotation),
            // Defaults from its own key, not from flickDuration.
            return_duration_ms: self
                .return_duration_ms
                .unwrap_or(defaults.return_duration_ms),
            reset_position: self.reset_position.unwrap_or(defaults.reset_position),
        };
        config.validate()?;
        Ok(config)
    }
}
