//! Factory profiles bundled with the library.
//!
//! Embedded at compile time and always available, so the CLI and any host
//! application have sensible tunings without external files.

use crate::TempoProfile;

/// Array of factory profile names for external access.
pub static FACTORY_PROFILE_NAMES: &[&str] = &["standard", "responsive", "steady", "performance"];

/// TOML content for factory profiles.
static FACTORY_PROFILES_TOML: &[(&str, &str)] = &[
    ("standard", STANDARD_PROFILE),
    ("responsive", RESPONSIVE_PROFILE),
    ("steady", STEADY_PROFILE),
    ("performance", PERFORMANCE_PROFILE),
];

/// Balanced defaults, identical to the engine's built-in tuning.
const STANDARD_PROFILE: &str = r#"
name = "standard"
description = "Balanced tracking for general use"

max_taps = 10
decimal_places = 2
smoothing_factor = 0.4
tempo_change_threshold = 1.5
pause_threshold_ms = 2000.0
"#;

/// Small window and heavy weighting on the newest taps.
const RESPONSIVE_PROFILE: &str = r#"
name = "responsive"
description = "Follows the tapper eagerly; best when the tempo moves around"

max_taps = 6
decimal_places = 2
smoothing_factor = 0.7
tempo_change_threshold = 1.35
pause_threshold_ms = 1500.0
"#;

/// Large window and gentle smoothing for a stable readout.
const STEADY_PROFILE: &str = r#"
name = "steady"
description = "Smooth, slow-moving estimate for steady material"

max_taps = 16
decimal_places = 2
smoothing_factor = 0.2
tempo_change_threshold = 1.8
pause_threshold_ms = 3000.0
"#;

/// Whole-BPM readout with a patient pause window, for live settings where
/// taps arrive between phrases.
const PERFORMANCE_PROFILE: &str = r#"
name = "performance"
description = "Whole-BPM display, long pause tolerance for live use"

max_taps = 8
decimal_places = 0
smoothing_factor = 0.5
tempo_change_threshold = 1.5
pause_threshold_ms = 4000.0
"#;

/// All factory profiles, parsed.
pub fn factory_profiles() -> Vec<TempoProfile> {
    FACTORY_PROFILES_TOML
        .iter()
        .filter_map(|(_, toml)| TempoProfile::from_toml(toml).ok())
        .collect()
}

/// Get a factory profile by name.
pub fn get_factory_profile(name: &str) -> Option<TempoProfile> {
    FACTORY_PROFILES_TOML
        .iter()
        .find(|(profile_name, _)| *profile_name == name)
        .and_then(|(_, toml)| TempoProfile::from_toml(toml).ok())
}

/// Names of all factory profiles.
pub fn factory_profile_names() -> Vec<&'static str> {
    FACTORY_PROFILE_NAMES.to_vec()
}

/// Check whether a name refers to a factory profile.
pub fn is_factory_profile(name: &str) -> bool {
    FACTORY_PROFILE_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_profile;

    #[test]
    fn all_factory_profiles_parse() {
        assert_eq!(factory_profiles().len(), FACTORY_PROFILE_NAMES.len());
    }

    #[test]
    fn all_factory_profiles_validate() {
        for profile in factory_profiles() {
            assert!(
                validate_profile(&profile).is_ok(),
                "factory profile '{}' failed validation",
                profile.name
            );
        }
    }

    #[test]
    fn embedded_names_match_profile_names() {
        for name in FACTORY_PROFILE_NAMES {
            let profile = get_factory_profile(name).expect("factory profile should parse");
            assert_eq!(&profile.name, name);
        }
    }

    #[test]
    fn standard_matches_engine_defaults() {
        let profile = get_factory_profile("standard").unwrap();
        let config = profile.to_config().unwrap();
        assert_eq!(config, pulso_core::TempoConfig::default());
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(get_factory_profile("does-not-exist").is_none());
        assert!(!is_factory_profile("does-not-exist"));
        assert!(is_factory_profile("responsive"));
    }
}
