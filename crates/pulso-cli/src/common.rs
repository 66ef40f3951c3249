//! Shared CLI helpers used across multiple commands.

use pulso_config::{
    TempoProfile, find_profile as config_find_profile, get_factory_profile,
};
use pulso_core::TempoConfig;
use std::path::PathBuf;

/// Load a profile by name or path.
///
/// Searches in this order:
/// 1. Factory profiles (by name)
/// 2. User/system profile directories (by name)
/// 3. File path (if it's a path to a .toml file)
pub fn load_profile(name: &str) -> anyhow::Result<TempoProfile> {
    if let Some(profile) = get_factory_profile(name) {
        return Ok(profile);
    }

    if let Some(path) = config_find_profile(name) {
        return TempoProfile::load(&path).map_err(|e| anyhow::anyhow!("{}", e));
    }

    let path = PathBuf::from(name);
    if path.exists() {
        return TempoProfile::load(&path).map_err(|e| anyhow::anyhow!("{}", e));
    }

    anyhow::bail!(
        "Profile '{}' not found. Use 'pulso profiles list' to see available profiles.",
        name
    )
}

/// Build the engine config for a command from an optional profile plus
/// per-invocation overrides.
pub fn resolve_config(
    profile: Option<&str>,
    max_taps: Option<usize>,
    smoothing_factor: Option<f64>,
) -> anyhow::Result<TempoConfig> {
    let mut base = match profile {
        Some(name) => load_profile(name)?,
        None => TempoProfile::new("cli"),
    };

    if let Some(max_taps) = max_taps {
        base = base.with_max_taps(max_taps);
    }
    if let Some(smoothing_factor) = smoothing_factor {
        base = base.with_smoothing_factor(smoothing_factor);
    }

    base.to_config().map_err(|e| anyhow::anyhow!("{}", e))
}
