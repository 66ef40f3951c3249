//! Profile field validation.
//!
//! The engine itself is total and never inspects its config, so bad tuning
//! values (a zero window, a smoothing weight of 3.0) would silently produce
//! nonsense estimates. Validation happens here instead, at the boundary
//! where profiles come in from files or user input.
//!
//! # Example
//!
//! ```rust
//! use pulso_config::{TempoProfile, validate_profile};
//!
//! let profile = TempoProfile::new("standard");
//! validate_profile(&profile).expect("defaults are valid");
//!
//! let broken = TempoProfile::new("broken").with_smoothing_factor(0.0);
//! assert!(validate_profile(&broken).is_err());
//! ```

use crate::profile::TempoProfile;
use thiserror::Error;

/// Highest accepted BPM rounding precision. More decimal places than this
/// is noise for a quantity derived from millisecond timestamps.
pub const MAX_DECIMAL_PLACES: u32 = 6;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Window capacity below the minimum of one tap.
    #[error("max_taps must be at least 1, got {0}")]
    WindowTooSmall(usize),

    /// Rounding precision beyond [`MAX_DECIMAL_PLACES`].
    #[error("decimal_places must be at most {max}, got {value}")]
    TooManyDecimalPlaces {
        /// The rejected precision.
        value: u32,
        /// The accepted maximum.
        max: u32,
    },

    /// Smoothing weight outside (0, 1].
    #[error("smoothing_factor must be in (0, 1], got {0}")]
    SmoothingOutOfRange(f64),

    /// Change-detection ratio at or below 1, which would flag every tap.
    #[error("tempo_change_threshold must be greater than 1, got {0}")]
    ChangeThresholdOutOfRange(f64),

    /// Non-positive pause threshold, which would reset on every tap.
    #[error("pause_threshold_ms must be positive, got {0}")]
    PauseThresholdOutOfRange(f64),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate every tuning field of a profile.
///
/// All failures are collected: a profile with several bad fields reports
/// them in one [`ValidationError::Multiple`] instead of one at a time.
pub fn validate_profile(profile: &TempoProfile) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if profile.max_taps < 1 {
        errors.push(ValidationError::WindowTooSmall(profile.max_taps));
    }
    if profile.decimal_places > MAX_DECIMAL_PLACES {
        errors.push(ValidationError::TooManyDecimalPlaces {
            value: profile.decimal_places,
            max: MAX_DECIMAL_PLACES,
        });
    }
    let smoothing = profile.smoothing_factor;
    if smoothing.is_nan() || smoothing <= 0.0 || smoothing > 1.0 {
        errors.push(ValidationError::SmoothingOutOfRange(smoothing));
    }
    let threshold = profile.tempo_change_threshold;
    if threshold.is_nan() || threshold <= 1.0 {
        errors.push(ValidationError::ChangeThresholdOutOfRange(threshold));
    }
    let pause = profile.pause_threshold_ms;
    if pause.is_nan() || pause <= 0.0 {
        errors.push(ValidationError::PauseThresholdOutOfRange(pause));
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_valid() {
        assert!(validate_profile(&TempoProfile::new("ok")).is_ok());
    }

    #[test]
    fn rejects_zero_window() {
        let profile = TempoProfile::new("bad").with_max_taps(0);
        assert_eq!(
            validate_profile(&profile),
            Err(ValidationError::WindowTooSmall(0))
        );
    }

    #[test]
    fn rejects_excess_precision() {
        let profile = TempoProfile::new("bad").with_decimal_places(9);
        assert!(matches!(
            validate_profile(&profile),
            Err(ValidationError::TooManyDecimalPlaces { value: 9, .. })
        ));
    }

    #[test]
    fn rejects_smoothing_outside_unit_interval() {
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let profile = TempoProfile::new("bad").with_smoothing_factor(bad);
            assert!(
                matches!(
                    validate_profile(&profile),
                    Err(ValidationError::SmoothingOutOfRange(_))
                ),
                "smoothing {bad} should be rejected"
            );
        }
        let edge = TempoProfile::new("edge").with_smoothing_factor(1.0);
        assert!(validate_profile(&edge).is_ok());
    }

    #[test]
    fn rejects_change_threshold_at_or_below_one() {
        for bad in [1.0, 0.5, -2.0] {
            let profile = TempoProfile::new("bad").with_tempo_change_threshold(bad);
            assert!(validate_profile(&profile).is_err(), "threshold {bad}");
        }
    }

    #[test]
    fn rejects_non_positive_pause() {
        let profile = TempoProfile::new("bad").with_pause_threshold_ms(0.0);
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn collects_multiple_failures() {
        let profile = TempoProfile::new("bad")
            .with_max_taps(0)
            .with_smoothing_factor(2.0);
        match validate_profile(&profile) {
            Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected Multiple, got {other:?}"),
        }
    }

    #[test]
    fn multiple_display_joins_messages() {
        let err = ValidationError::Multiple(vec![
            ValidationError::WindowTooSmall(0),
            ValidationError::PauseThresholdOutOfRange(-1.0),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("max_taps"), "got: {msg}");
        assert!(msg.contains("pause_threshold_ms"), "got: {msg}");
    }
}
