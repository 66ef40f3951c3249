//! Profile file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::validate_profile;
use pulso_core::{
    DEFAULT_DECIMAL_PLACES, DEFAULT_MAX_TAPS, DEFAULT_PAUSE_THRESHOLD_MS,
    DEFAULT_SMOOTHING_FACTOR, DEFAULT_TEMPO_CHANGE_THRESHOLD, TempoConfig,
};

/// A named engine tuning, stored as a TOML file.
///
/// Every tuning field is optional in the file and falls back to the engine
/// default, so a profile only spells out what it changes.
///
/// # TOML Format
///
/// ```toml
/// name = "drummer"
/// description = "Tight window, eager smoothing"
///
/// max_taps = 6
/// smoothing_factor = 0.6
/// tempo_change_threshold = 1.4
/// pause_threshold_ms = 1500.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TempoProfile {
    /// Name of the profile.
    pub name: String,

    /// Optional description of when to use it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sliding-window capacity in taps.
    #[serde(default = "default_max_taps")]
    pub max_taps: usize,

    /// Decimal places for stored BPM values.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,

    /// Exponential-smoothing weight on the newest estimate.
    #[serde(default = "default_smoothing_factor")]
    pub smoothing_factor: f64,

    /// Interval ratio beyond which a tempo change is flagged.
    #[serde(default = "default_tempo_change_threshold")]
    pub tempo_change_threshold: f64,

    /// Gap in milliseconds treated as an intentional pause.
    #[serde(default = "default_pause_threshold_ms")]
    pub pause_threshold_ms: f64,
}

fn default_max_taps() -> usize {
    DEFAULT_MAX_TAPS
}

fn default_decimal_places() -> u32 {
    DEFAULT_DECIMAL_PLACES
}

fn default_smoothing_factor() -> f64 {
    DEFAULT_SMOOTHING_FACTOR
}

fn default_tempo_change_threshold() -> f64 {
    DEFAULT_TEMPO_CHANGE_THRESHOLD
}

fn default_pause_threshold_ms() -> f64 {
    DEFAULT_PAUSE_THRESHOLD_MS
}

impl TempoProfile {
    /// Create a profile with the engine's default tuning.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            max_taps: DEFAULT_MAX_TAPS,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            tempo_change_threshold: DEFAULT_TEMPO_CHANGE_THRESHOLD,
            pause_threshold_ms: DEFAULT_PAUSE_THRESHOLD_MS,
        }
    }

    /// Create a profile from an existing engine config.
    pub fn from_config(name: impl Into<String>, config: &TempoConfig) -> Self {
        Self {
            name: name.into(),
            description: None,
            max_taps: config.max_taps,
            decimal_places: config.decimal_places,
            smoothing_factor: config.smoothing_factor,
            tempo_change_threshold: config.tempo_change_threshold,
            pause_threshold_ms: config.pause_threshold_ms,
        }
    }

    /// Add a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the window capacity.
    pub fn with_max_taps(mut self, max_taps: usize) -> Self {
        self.max_taps = max_taps;
        self
    }

    /// Set the BPM rounding precision.
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Set the smoothing weight.
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

    /// Load a profile from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let profile: TempoProfile = toml::from_str(&content)?;
        Ok(profile)
    }

    /// Load a profile from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the profile to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the profile to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the tuning fields and build the engine config.
    pub fn to_config(&self) -> Result<TempoConfig, ConfigError> {
        validate_profile(self)?;
        Ok(TempoConfig {
            max_taps: self.max_taps,
            decimal_places: self.decimal_places,
            smoothing_factor: self.smoothing_factor,
            tempo_change_threshold: self.tempo_change_threshold,
            pause_threshold_ms: self.pause_threshold_ms,
        })
    }
}
