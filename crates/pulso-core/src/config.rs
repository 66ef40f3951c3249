//! Tuning configuration for the estimation engine.

/// Default sliding-window capacity in taps.
pub const DEFAULT_MAX_TAPS: usize = 10;

/// Default rounding precision for stored BPM values.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Default exponential-smoothing weight on the newest raw estimate.
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.4;

/// Default interval ratio (either direction) that flags a tempo change.
pub const DEFAULT_TEMPO_CHANGE_THRESHOLD: f64 = 1.5;

/// Default gap, in milliseconds, treated as an intentional pause.
pub const DEFAULT_PAUSE_THRESHOLD_MS: f64 = 2000.0;

/// Tuning knobs for the adaptive update step.
///
/// Values are plain data; the engine never mutates a config. Construct one
/// with [`TempoConfig::default`] and adjust with the `with_*` builders:
///
/// ```rust
/// use pulso_core::TempoConfig;
///
/// let config = TempoConfig::default()
///     .with_max_taps(6)
///     .with_smoothing_factor(0.6);
/// assert_eq!(config.max_taps, 6);
/// ```
///
/// The thresholds are heuristics, not derived quantities; keeping them here
/// rather than inlined keeps the change-detection policy testable
/// independently of the smoothing math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempoConfig {
    /// Sliding-window capacity for retained timestamps (>= 1).
    pub max_taps: usize,
    /// Decimal places for every stored or returned BPM value.
    pub decimal_places: u32,
    /// Weight in (0, 1] applied to the newest raw estimate when smoothing.
    /// Higher values track the tapper more eagerly.
    pub smoothing_factor: f64,
    /// Multiplicative ratio between the newest interval and the recent
    /// average beyond which the tap is treated as a new tempo (> 1).
    pub tempo_change_threshold: f64,
    /// Gap in milliseconds beyond which a tap starts a new tempo sequence
    /// instead of extending the current one.
    pub pause_threshold_ms: f64,
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            max_taps: DEFAULT_MAX_TAPS,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            tempo_change_threshold: DEFAULT_TEMPO_CHANGE_THRESHOLD,
            pause_threshold_ms: DEFAULT_PAUSE_THRESHOLD_MS,
        }
    }
}

impl TempoConfig {
    /// Set the sliding-window capacity.
    pub fn with_max_taps(mut self, max_taps: usize) -> Self {
        self.max_taps = max_taps;
        self
    }

    /// Set the BPM rounding precision.
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Set the exponential-smoothing weight.
    pub fn with_smoothing_factor(mut self, smoothing_factor: f64) -> Self {
        self.smoothing_factor = smoothing_factor;
        self
    }

    /// Set the tempo-change ratio threshold.
    pub fn with_tempo_change_threshold(mut self, tempo_change_threshold: f64) -> Self {
        self.tempo_change_threshold = tempo_change_threshold;
        self
    }

    /// Set the pause threshold in milliseconds.
    pub fn with_pause_threshold_ms(mut self, pause_threshold_ms: f64) -> Self {
        self.pause_threshold_ms = pause_threshold_ms;
        self
    }
}
