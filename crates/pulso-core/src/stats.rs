//! Interval statistics over timestamp sequences.
//!
//! Everything here is a total function: empty input yields an empty
//! iterator or an explicit zero, never an error.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Consecutive differences of an ordered timestamp sequence.
///
/// For `n` timestamps the iterator yields `n - 1` intervals (zero for
/// `n <= 1`), each `t[i+1] - t[i]` in the input's order.
///
/// # Example
/// ```rust
/// use pulso_core::intervals;
///
/// let gaps: Vec<f64> = intervals(&[1000.0, 1500.0, 2200.0]).collect();
/// assert_eq!(gaps, vec![500.0, 700.0]);
/// assert_eq!(intervals(&[]).count(), 0);
/// assert_eq!(intervals(&[1000.0]).count(), 0);
/// ```
pub fn intervals(timestamps: &[f64]) -> impl Iterator<Item = f64> + '_ {
    timestamps.windows(2).map(|pair| pair[1] - pair[0])
}

/// Arithmetic mean of a sequence, `0.0` for empty input.
///
/// The zero-for-empty policy keeps the function total; callers that need
/// to distinguish "no data" check the length themselves.
///
/// # Example
/// ```rust
/// use pulso_core::mean;
///
/// assert_eq!(mean(&[]), 0.0);
/// assert_eq!(mean(&[42.0]), 42.0);
/// assert_eq!(mean(&[500.0, 700.0]), 600.0);
/// ```
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population mean squared deviation from the mean, `0.0` for empty input.
///
/// Used as the dispersion signal over recent inter-tap intervals: a steady
/// tapper produces values near zero, a sloppy one does not. A single
/// observation deviates from its own mean by nothing, so it also yields
/// `0.0`.
pub fn mean_squared_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Collect the intervals of a timestamp sequence into a vector.
///
/// Convenience for the update steps, which store the derived intervals in
/// [`crate::TapData::recent_intervals`].
pub fn collect_intervals(timestamps: &[f64]) -> Vec<f64> {
    intervals(timestamps).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_length_and_values() {
        let ts = [1000.0, 1580.0, 2200.0, 2790.0, 3410.0];
        let gaps: Vec<f64> = intervals(&ts).collect();
        assert_eq!(gaps.len(), ts.len() - 1);
        assert_eq!(gaps, vec![580.0, 620.0, 590.0, 620.0]);
    }

    #[test]
    fn intervals_empty_and_single() {
        assert_eq!(intervals(&[]).count(), 0);
        assert_eq!(intervals(&[123.0]).count(), 0);
    }

    #[test]
    fn intervals_preserve_sign_of_unordered_input() {
        // The engine treats non-monotonic input at a higher level; the
        // primitive just reports the raw difference.
        let gaps: Vec<f64> = intervals(&[1000.0, 900.0]).collect();
        assert_eq!(gaps, vec![-100.0]);
    }

    #[test]
    fn mean_boundaries() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[7.5]), 7.5);
    }

    #[test]
    fn mean_of_scenario_intervals() {
        assert_eq!(mean(&[580.0, 620.0, 590.0, 620.0]), 602.5);
    }

    #[test]
    fn msd_boundaries() {
        assert_eq!(mean_squared_deviation(&[]), 0.0);
        assert_eq!(mean_squared_deviation(&[500.0]), 0.0);
    }

    #[test]
    fn msd_of_uniform_intervals_is_zero() {
        assert_eq!(mean_squared_deviation(&[500.0, 500.0, 500.0]), 0.0);
    }

    #[test]
    fn msd_of_spread_intervals() {
        // mean = 600, deviations -100/+100, msd = 10000
        assert_eq!(mean_squared_deviation(&[500.0, 700.0]), 10_000.0);
    }
}
