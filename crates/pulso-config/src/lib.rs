//! Tuning profile management for the pulso tap-tempo engine.
//!
//! A profile is a named, documented [`pulso_core::TempoConfig`] stored as a
//! TOML file. This crate loads and saves profiles, validates their fields
//! before they reach the engine, locates platform-specific profile
//! directories, and embeds a set of factory profiles that are always
//! available.
//!
//! # Example
//!
//! ```rust,no_run
//! use pulso_config::{TempoProfile, user_profiles_dir};
//!
//! // Load a profile from file and turn it into an engine config
//! let profile = TempoProfile::load("drummer.toml").unwrap();
//! let config = profile.to_config().unwrap();
//!
//! // Create one programmatically
//! let profile = TempoProfile::new("snappy")
//!     .with_description("Follows the tapper aggressively")
//!     .with_smoothing_factor(0.7)
//!     .with_max_taps(6);
//!
//! // Save it to the user profiles directory
//! let path = user_profiles_dir().join("snappy.toml");
//! profile.save(&path).unwrap();
//! ```

mod error;
mod profile;

/// Platform-specific paths for profiles and configuration.
pub mod paths;

/// Profile field validation.
pub mod validation;

/// Factory profiles bundled with the library.
pub mod factory_profiles;

pub use error::ConfigError;
pub use factory_profiles::{
    FACTORY_PROFILE_NAMES, factory_profile_names, factory_profiles, get_factory_profile,
    is_factory_profile,
};
pub use paths::{
    ensure_user_profiles_dir, find_profile, list_all_profiles, list_system_profiles,
    list_user_profiles, profile_name_from_path, system_profiles_dir, user_config_dir,
    user_profiles_dir,
};
pub use profile::TempoProfile;
pub use validation::{ValidationError, ValidationResult, validate_profile};

/// Re-export the engine config type that profiles resolve into.
pub use pulso_core::TempoConfig;
