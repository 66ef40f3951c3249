//! Mutable convenience wrapper over the functional engine.

use crate::adaptive::update_adaptive;
use crate::config::TempoConfig;
use crate::tap::TapData;

/// Owns the tap state and threads updates internally.
///
/// The functional API ([`crate::update_adaptive`]) requires the caller to
/// feed each result into the next call. `TapTempo` does that bookkeeping
/// for callers that just want to report taps and read the estimate:
///
/// ```rust
/// use pulso_core::{TapTempo, TempoConfig};
///
/// let mut tapper = TapTempo::new(TempoConfig::default());
/// tapper.tap(1000.0);
/// tapper.tap(1500.0);
/// assert_eq!(tapper.bpm(), Some(120.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TapTempo {
    config: TempoConfig,
    data: TapData,
}

impl TapTempo {
    /// Create a tapper with the given tuning.
    pub fn new(config: TempoConfig) -> Self {
        Self {
            config,
            data: TapData::new(),
        }
    }

    /// Register a tap at the supplied timestamp (milliseconds) and return
    /// the current estimate.
    pub fn tap(&mut self, timestamp_ms: f64) -> Option<f64> {
        self.data = update_adaptive(&self.data, timestamp_ms, &self.config);
        self.data.bpm
    }

    /// Current smoothed estimate, if at least two taps are retained.
    pub fn bpm(&self) -> Option<f64> {
        self.data.bpm
    }

    /// The full engine state after the last tap.
    pub fn data(&self) -> &TapData {
        &self.data
    }

    /// The tuning this tapper runs with.
    pub fn config(&self) -> &TempoConfig {
        &self.config
    }

    /// Whether the last tap was classified as a tempo change.
    pub fn tempo_change_detected(&self) -> bool {
        self.data.tempo_change_detected
    }

    /// Forget all taps and start a fresh sequence.
    pub fn reset(&mut self) {
        self.data = TapData::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taps_thread_state() {
        let mut tapper = TapTempo::new(TempoConfig::default());
        assert_eq!(tapper.tap(0.0), None);
        assert_eq!(tapper.tap(500.0), Some(120.0));
        assert_eq!(tapper.tap(1000.0), Some(120.0));
        assert_eq!(tapper.data().timestamps.len(), 3);
    }

    #[test]
    fn reset_clears_history() {
        let mut tapper = TapTempo::new(TempoConfig::default());
        let _ = tapper.tap(0.0);
        let _ = tapper.tap(500.0);
        tapper.reset();
        assert_eq!(tapper.bpm(), None);
        assert!(tapper.data().timestamps.is_empty());
    }

    #[test]
    fn matches_functional_updates() {
        let config = TempoConfig::default().with_max_taps(4);
        let mut tapper = TapTempo::new(config);
        let mut data = TapData::new();
        for t in [0.0, 480.0, 990.0, 1510.0, 2000.0] {
            let _ = tapper.tap(t);
            data = update_adaptive(&data, t, &config);
        }
        assert_eq!(tapper.data(), &data);
    }
}
