//! Property-based tests for the engine invariants.
//!
//! Uses proptest to verify the update steps over arbitrary tap streams,
//! including hostile non-monotonic ones: bounded windows, chronological
//! retention, purity, and no non-finite stored values.

use proptest::prelude::*;
use pulso_core::{TapData, TempoConfig, intervals, mean, push_bounded, update_adaptive,
    update_tap_data};

/// Timestamps that a well-behaved caller would produce: strictly
/// increasing, gaps from sub-millisecond jitter up to several seconds.
fn monotonic_taps() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..5000.0, 0..40).prop_map(|gaps| {
        let mut t = 0.0;
        gaps.into_iter()
            .map(|gap| {
                t += gap;
                t
            })
            .collect()
    })
}

/// Arbitrary finite timestamps in any order, duplicates included.
fn unordered_taps() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..10_000_000.0, 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The window never exceeds its capacity, for any stream and capacity.
    #[test]
    fn window_bound_holds(taps in unordered_taps(), max_taps in 1usize..12) {
        let config = TempoConfig::default().with_max_taps(max_taps);
        let mut basic = TapData::new();
        let mut adaptive = TapData::new();
        for &t in &taps {
            basic = update_tap_data(&basic, t, max_taps);
            adaptive = update_adaptive(&adaptive, t, &config);
            prop_assert!(basic.timestamps.len() <= max_taps);
            prop_assert!(adaptive.timestamps.len() <= max_taps);
        }
    }

    /// The window retains a suffix of the fed stream, in feed order.
    #[test]
    fn window_retains_newest_in_order(taps in monotonic_taps(), max_taps in 1usize..12) {
        let mut window: Vec<f64> = Vec::new();
        for &t in &taps {
            window = push_bounded(&window, t, max_taps);
        }
        let expected: Vec<f64> = taps
            .iter()
            .copied()
            .skip(taps.len().saturating_sub(max_taps))
            .collect();
        prop_assert_eq!(window, expected);
    }

    /// Updates never mutate their input state.
    #[test]
    fn updates_are_pure(taps in monotonic_taps(), extra in 1.0f64..10_000.0) {
        let config = TempoConfig::default();
        let mut data = TapData::new();
        for &t in &taps {
            data = update_adaptive(&data, t, &config);
        }
        let snapshot = data.clone();
        let next_t = taps.last().copied().unwrap_or(0.0) + extra;
        let _ = update_adaptive(&data, next_t, &config);
        let _ = update_tap_data(&data, next_t, config.max_taps);
        prop_assert_eq!(&data, &snapshot);
    }

    /// Identical inputs give identical outputs.
    #[test]
    fn updates_are_deterministic(taps in monotonic_taps()) {
        let config = TempoConfig::default();
        let run = || {
            let mut data = TapData::new();
            for &t in &taps {
                data = update_adaptive(&data, t, &config);
            }
            data
        };
        prop_assert_eq!(run(), run());
    }

    /// No stream, monotonic or not, can plant a NaN or infinity in the
    /// state: degenerate intervals are recorded but never converted.
    #[test]
    fn no_non_finite_values_stored(taps in unordered_taps()) {
        let config = TempoConfig::default();
        let mut data = TapData::new();
        for &t in &taps {
            data = update_adaptive(&data, t, &config);
            if let Some(bpm) = data.bpm {
                prop_assert!(bpm.is_finite());
            }
            if let Some(raw) = data.raw_bpm {
                prop_assert!(raw.is_finite());
            }
            if let Some(variance) = data.variance {
                prop_assert!(variance.is_finite());
            }
        }
    }

    /// For well-behaved input, the availability rule is exact: an estimate
    /// exists iff at least two timestamps are retained.
    #[test]
    fn bpm_availability_boundary(taps in monotonic_taps(), max_taps in 1usize..12) {
        // Gaps above the pause threshold reset the window, so cap them.
        let config = TempoConfig::default()
            .with_max_taps(max_taps)
            .with_pause_threshold_ms(6000.0);
        let mut data = TapData::new();
        for &t in &taps {
            data = update_adaptive(&data, t, &config);
            prop_assert_eq!(data.bpm.is_some(), data.timestamps.len() >= 2);
        }
    }

    /// Interval derivation matches its definition.
    #[test]
    fn intervals_match_definition(taps in monotonic_taps()) {
        let gaps: Vec<f64> = intervals(&taps).collect();
        prop_assert_eq!(gaps.len(), taps.len().saturating_sub(1));
        for (i, gap) in gaps.iter().enumerate() {
            prop_assert_eq!(*gap, taps[i + 1] - taps[i]);
        }
    }

    /// The mean sits within the bounds of its inputs.
    #[test]
    fn mean_is_bounded(values in prop::collection::vec(1.0f64..100_000.0, 1..32)) {
        let m = mean(&values);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(m >= min && m <= max);
    }

    /// The change flag reflects only the latest tap: continuing at the
    /// window's own average interval never raises it. The window is sized
    /// above the stream length so eviction cannot shift the average.
    #[test]
    fn change_flag_clears_on_steady_continuation(taps in monotonic_taps()) {
        let config = TempoConfig::default()
            .with_max_taps(64)
            .with_pause_threshold_ms(6000.0);
        let mut data = TapData::new();
        for &t in &taps {
            data = update_adaptive(&data, t, &config);
        }
        if data.timestamps.len() >= 2 {
            let avg = mean(&data.recent_intervals);
            let last = *data.timestamps.last().unwrap();
            let next = update_adaptive(&data, last + avg, &config);
            prop_assert!(!next.tempo_change_detected);
        }
    }
}
