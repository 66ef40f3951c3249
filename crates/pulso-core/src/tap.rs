//! Tap state and the basic update step.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::config::DEFAULT_DECIMAL_PLACES;
use crate::math::interval_to_bpm;
use crate::stats::{collect_intervals, intervals, mean};
use crate::window::push_bounded;

/// The engine's state between taps.
///
/// A `TapData` is a plain value: the update steps take the current value by
/// reference and return a new one, leaving the argument untouched. Callers
/// must thread each result into the next update (feeding a stale copy loses
/// that update).
///
/// Field invariants, upheld by every update step:
///
/// - `timestamps` is bounded by the window capacity and chronological
/// - `bpm` is `None` exactly when fewer than 2 timestamps are held
/// - stored BPM values are rounded to the configured precision
/// - `tempo_change_detected` describes only the most recent update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TapData {
    /// Retained tap instants, milliseconds of wall-clock time, oldest first.
    pub timestamps: Vec<f64>,
    /// Current tempo estimate; smoothed when produced by the adaptive step.
    pub bpm: Option<f64>,
    /// Unsmoothed estimate from the newest interval alone. Only the
    /// adaptive step produces this; the basic step leaves it `None`.
    pub raw_bpm: Option<f64>,
    /// Mean squared deviation of `recent_intervals`, in ms². Consistency
    /// signal for display; never fed back into the estimate.
    pub variance: Option<f64>,
    /// Inter-tap intervals derived from `timestamps`.
    pub recent_intervals: Vec<f64>,
    /// True when this update concluded the tapper switched tempo, either
    /// by pausing or by a large interval jump. Recomputed fresh per update.
    pub tempo_change_detected: bool,
}

impl TapData {
    /// Empty state: no taps, no estimate.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Tempo estimate over a full timestamp window.
///
/// Averages the consecutive intervals and converts to BPM at the default
/// precision. `None` when fewer than two timestamps exist, and also when
/// the average interval is not positive (possible only for non-monotonic
/// caller input, which the engine deliberately declines to estimate from).
///
/// # Example
/// ```rust
/// use pulso_core::calculate_bpm;
///
/// assert_eq!(calculate_bpm(&[]), None);
/// assert_eq!(calculate_bpm(&[1000.0]), None);
/// assert_eq!(calculate_bpm(&[1000.0, 1500.0, 2000.0]), Some(120.0));
/// ```
pub fn calculate_bpm(timestamps: &[f64]) -> Option<f64> {
    if timestamps.len() < 2 {
        return None;
    }
    let avg = mean(&intervals(timestamps).collect::<Vec<f64>>());
    if avg.is_nan() || avg <= 0.0 {
        return None;
    }
    Some(interval_to_bpm(avg, DEFAULT_DECIMAL_PLACES))
}

/// Basic update step: window append plus full-window-average estimate.
///
/// Appends the timestamp under a `max_taps` sliding window, then recomputes
/// the estimate from the whole retained window. Pure: the input state is
/// not modified, and identical inputs give identical outputs. Cannot fail.
///
/// The adaptive-only fields come back empty (`raw_bpm`/`variance` `None`,
/// no change flag); use [`crate::update_adaptive`] for those.
///
/// # Example
/// ```rust
/// use pulso_core::{TapData, update_tap_data, DEFAULT_MAX_TAPS};
///
/// let mut data = TapData::new();
/// for t in [1000.0, 1500.0, 2000.0, 2500.0, 3000.0] {
///     data = update_tap_data(&data, t, DEFAULT_MAX_TAPS);
/// }
/// assert_eq!(data.bpm, Some(120.0));
/// ```
pub fn update_tap_data(current: &TapData, timestamp_ms: f64, max_taps: usize) -> TapData {
    let timestamps = push_bounded(&current.timestamps, timestamp_ms, max_taps);
    let bpm = calculate_bpm(&timestamps);
    let recent_intervals = collect_intervals(&timestamps);
    TapData {
        timestamps,
        bpm,
        raw_bpm: None,
        variance: None,
        recent_intervals,
        tempo_change_detected: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_TAPS;

    #[test]
    fn no_estimate_below_two_timestamps() {
        assert_eq!(calculate_bpm(&[]), None);
        assert_eq!(calculate_bpm(&[5000.0]), None);
    }

    #[test]
    fn estimate_from_two_timestamps() {
        assert_eq!(calculate_bpm(&[1000.0, 1500.0]), Some(120.0));
    }

    #[test]
    fn no_estimate_from_non_positive_average() {
        assert_eq!(calculate_bpm(&[1000.0, 1000.0]), None);
        assert_eq!(calculate_bpm(&[1000.0, 400.0]), None);
    }

    #[test]
    fn update_threads_window_and_estimate() {
        let mut data = TapData::new();
        for t in [1000.0, 1580.0, 2200.0, 2790.0, 3410.0] {
            data = update_tap_data(&data, t, DEFAULT_MAX_TAPS);
        }
        // intervals 580/620/590/620, mean 602.5
        assert_eq!(data.bpm, Some(99.59));
        assert_eq!(data.recent_intervals.len(), 4);
    }

    #[test]
    fn update_truncates_window_and_keeps_tempo() {
        let data = TapData {
            timestamps: vec![1000.0, 1500.0, 2000.0, 2500.0, 3000.0],
            bpm: Some(120.0),
            ..TapData::default()
        };
        let next = update_tap_data(&data, 3500.0, 3);
        assert_eq!(next.timestamps, vec![2500.0, 3000.0, 3500.0]);
        assert_eq!(next.bpm, Some(120.0));
    }

    #[test]
    fn update_recomputes_over_retained_window() {
        let data = TapData {
            timestamps: vec![1000.0, 1500.0],
            bpm: Some(120.0),
            ..TapData::default()
        };
        // 700 ms gap: window average is now (500 + 700) / 2 = 600
        let next = update_tap_data(&data, 2200.0, DEFAULT_MAX_TAPS);
        assert_eq!(next.bpm, Some(100.0));
    }

    #[test]
    fn update_does_not_mutate_input() {
        let data = TapData {
            timestamps: vec![1000.0, 1500.0],
            bpm: Some(120.0),
            ..TapData::default()
        };
        let snapshot = data.clone();
        let _ = update_tap_data(&data, 2000.0, DEFAULT_MAX_TAPS);
        assert_eq!(data, snapshot);
    }

    #[test]
    fn window_of_one_never_estimates() {
        let mut data = TapData::new();
        for t in [1000.0, 1500.0, 2000.0] {
            data = update_tap_data(&data, t, 1);
            assert_eq!(data.timestamps.len(), 1);
            assert_eq!(data.bpm, None);
        }
    }
}
