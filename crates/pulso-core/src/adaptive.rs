//! Adaptive update step: smoothing plus tempo-change detection.
//!
//! The basic step in [`crate::tap`] averages the whole window, which drags
//! behind a tapper who deliberately switches tempo. The adaptive step keeps
//! an exponentially smoothed estimate that follows the newest interval, and
//! classifies each tap as either a continuation, a deliberate tempo change
//! (large interval jump), or the start of a new sequence (long pause).

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::config::TempoConfig;
use crate::math::{MS_PER_MINUTE, round_to_places};
use crate::stats::{collect_intervals, mean, mean_squared_deviation};
use crate::tap::TapData;
use crate::window::push_bounded;

/// Multiplier applied to the smoothing weight for the update that detected
/// a ratio-triggered tempo change, capped so the effective weight never
/// exceeds 1. Detector policy, not a user tuning knob.
pub const FAST_ADAPT_BOOST: f64 = 2.0;

/// Adaptive update step.
///
/// Appends the timestamp under the configured sliding window and produces a
/// new state in which:
///
/// 1. a gap beyond [`TempoConfig::pause_threshold_ms`] discards all prior
///    history (the window restarts at this tap) and flags the change;
/// 2. a newest interval differing from the recent average by more than
///    [`TempoConfig::tempo_change_threshold`] in either direction flags the
///    change and boosts the smoothing weight by [`FAST_ADAPT_BOOST`] for
///    this update only;
/// 3. otherwise the estimate is blended as
///    `smoothing_factor * raw + (1 - smoothing_factor) * previous`;
/// 4. `raw_bpm` is the estimate from the newest interval alone, and
///    `variance` is the mean squared deviation of the retained intervals.
///
/// Pure and total: the input state is never modified, identical inputs give
/// identical outputs, and no input stream can produce a panic or a
/// non-finite stored value. A timestamp at or before the previous one is
/// recorded but performs no estimation (the previous estimate carries
/// over), and a non-finite timestamp is ignored outright; see the crate
/// documentation for that policy.
///
/// # Example
/// ```rust
/// use pulso_core::{TapData, TempoConfig, update_adaptive};
///
/// let config = TempoConfig::default();
/// let mut data = TapData::new();
/// for t in [0.0, 500.0, 1000.0, 1500.0] {
///     data = update_adaptive(&data, t, &config);
/// }
/// assert_eq!(data.bpm, Some(120.0));
/// assert!(!data.tempo_change_detected);
///
/// // A pause far beyond the threshold starts a new sequence.
/// data = update_adaptive(&data, 10_000.0, &config);
/// assert!(data.tempo_change_detected);
/// assert_eq!(data.timestamps, vec![10_000.0]);
/// assert_eq!(data.bpm, None);
/// ```
pub fn update_adaptive(current: &TapData, timestamp_ms: f64, config: &TempoConfig) -> TapData {
    if !timestamp_ms.is_finite() {
        // A NaN or infinite instant would poison every later gap; ignore it.
        return current.clone();
    }

    if let Some(&last) = current.timestamps.last() {
        let gap = timestamp_ms - last;

        if gap > config.pause_threshold_ms {
            #[cfg(feature = "tracing")]
            tracing::debug!(gap_ms = gap, "pause detected, restarting tap sequence");
            return TapData {
                timestamps: vec![timestamp_ms],
                bpm: None,
                raw_bpm: None,
                variance: None,
                recent_intervals: Vec::new(),
                tempo_change_detected: true,
            };
        }

        if gap <= 0.0 {
            // Degenerate timestamp (caller broke monotonicity): record it,
            // estimate nothing from it.
            let timestamps = push_bounded(&current.timestamps, timestamp_ms, config.max_taps);
            let recent_intervals = collect_intervals(&timestamps);
            return TapData {
                timestamps,
                recent_intervals,
                bpm: current.bpm,
                raw_bpm: current.raw_bpm,
                variance: current.variance,
                tempo_change_detected: false,
            };
        }
    }

    let timestamps = push_bounded(&current.timestamps, timestamp_ms, config.max_taps);
    if timestamps.len() < 2 {
        // First tap of a sequence, or a single-slot window.
        return TapData {
            timestamps,
            bpm: None,
            raw_bpm: None,
            variance: None,
            recent_intervals: Vec::new(),
            tempo_change_detected: false,
        };
    }

    let recent_intervals = collect_intervals(&timestamps);
    let newest = timestamp_ms - timestamps[timestamps.len() - 2];
    let raw = MS_PER_MINUTE / newest;

    // Compare the newest interval against the average of the ones before
    // it; with only one interval there is nothing to compare against.
    let prior = &recent_intervals[..recent_intervals.len() - 1];
    let prior_avg = mean(prior);
    let tempo_change_detected = if prior.is_empty() || prior_avg <= 0.0 {
        false
    } else {
        let ratio = newest / prior_avg;
        ratio > config.tempo_change_threshold || ratio < 1.0 / config.tempo_change_threshold
    };

    #[cfg(feature = "tracing")]
    if tempo_change_detected {
        tracing::debug!(
            interval_ms = newest,
            prior_avg_ms = prior_avg,
            "tempo change detected, fast-adapting"
        );
    }

    let smoothed = match current.bpm {
        None => raw,
        Some(previous) => {
            let alpha = if tempo_change_detected {
                (config.smoothing_factor * FAST_ADAPT_BOOST).min(1.0)
            } else {
                config.smoothing_factor
            };
            alpha * raw + (1.0 - alpha) * previous
        }
    };

    let variance = mean_squared_deviation(&recent_intervals);

    TapData {
        bpm: Some(round_to_places(smoothed, config.decimal_places)),
        raw_bpm: Some(round_to_places(raw, config.decimal_places)),
        variance: Some(variance),
        timestamps,
        recent_intervals,
        tempo_change_detected,
    }
}
