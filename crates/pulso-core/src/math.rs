//! Tempo unit conversions and rounding.
//!
//! One beat per interval: an interval of `i` milliseconds between taps
//! corresponds to `60000 / i` beats per minute. All stored BPM values go
//! through [`round_to_places`], which rounds half away from zero at a fixed
//! decimal precision so chained and displayed values agree.

use libm::{pow, round};

/// Milliseconds per minute; the numerator of every tempo conversion.
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Round a value to `places` decimal places, half away from zero.
///
/// # Example
/// ```rust
/// use pulso_core::round_to_places;
///
/// assert_eq!(round_to_places(99.585, 2), 99.59);
/// assert_eq!(round_to_places(-0.125, 2), -0.13);
/// assert_eq!(round_to_places(120.0, 2), 120.0);
/// ```
#[inline]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = pow(10.0, f64::from(places));
    round(value * factor) / factor
}

/// Convert an inter-tap interval in milliseconds to beats per minute,
/// rounded to `decimal_places`.
///
/// The interval must be positive; the update steps guarantee this by never
/// converting a non-positive interval (see [`crate::update_adaptive`]).
///
/// # Example
/// ```rust
/// use pulso_core::interval_to_bpm;
///
/// assert_eq!(interval_to_bpm(500.0, 2), 120.0);
/// assert_eq!(interval_to_bpm(1000.0, 2), 60.0);
/// assert_eq!(interval_to_bpm(603.0, 2), 99.5);
/// ```
#[inline]
pub fn interval_to_bpm(interval_ms: f64, decimal_places: u32) -> f64 {
    round_to_places(MS_PER_MINUTE / interval_ms, decimal_places)
}

/// Convert beats per minute to the corresponding inter-tap interval in
/// milliseconds.
///
/// # Example
/// ```rust
/// use pulso_core::bpm_to_interval;
///
/// assert_eq!(bpm_to_interval(120.0), 500.0);
/// ```
#[inline]
pub fn bpm_to_interval(bpm: f64) -> f64 {
    MS_PER_MINUTE / bpm
}
