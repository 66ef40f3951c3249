//! Platform-specific paths for profiles and configuration.
//!
//! # Directory Structure
//!
//! - **User profiles**: `~/.config/pulso/profiles/` (Linux),
//!   `~/Library/Application Support/pulso/profiles/` (macOS),
//!   `%APPDATA%\pulso\profiles\` (Windows)
//! - **User config**: the same tree one level up
//! - **System profiles**: `/usr/share/pulso/profiles/` (Linux),
//!   `/Library/Application Support/pulso/profiles/` (macOS)

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "pulso";

/// Subdirectory name for profiles.
const PROFILES_SUBDIR: &str = "profiles";

/// Returns the user-specific profiles directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_profiles_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PROFILES_SUBDIR)
}

/// Returns the user-specific configuration directory.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the system-wide profiles directory.
///
/// Typically read-only; holds administrator-installed profiles.
pub fn system_profiles_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        PathBuf::from("/usr/share").join(APP_NAME).join(PROFILES_SUBDIR)
    }
    #[cfg(target_os = "macos")]
    {
        PathBuf::from("/Library/Application Support")
            .join(APP_NAME)
            .join(PROFILES_SUBDIR)
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join(PROFILES_SUBDIR)
    }
}

/// Find a profile file by name.
///
/// Searches in the following order:
/// 1. Direct file path (absolute or relative)
/// 2. User profiles directory
/// 3. System profiles directory
///
/// The name may carry the `.toml` extension or omit it.
pub fn find_profile(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{}.toml", name)
    };

    let user_path = user_profiles_dir().join(&filename);
    if user_path.is_file() {
        return Some(user_path);
    }

    let system_path = system_profiles_dir().join(&filename);
    if system_path.is_file() {
        return Some(system_path);
    }

    None
}

/// Ensure the user profiles directory exists, creating it if needed.
pub fn ensure_user_profiles_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_profiles_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// List all profile files in the user profiles directory.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_profiles() -> Vec<PathBuf> {
    list_profiles_in_dir(&user_profiles_dir())
}

/// List all profile files in the system profiles directory.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_system_profiles() -> Vec<PathBuf> {
    list_profiles_in_dir(&system_profiles_dir())
}

/// List all available profile files, user first, then system.
///
/// Duplicate names are not filtered; the caller decides precedence.
pub fn list_all_profiles() -> Vec<PathBuf> {
    let mut profiles = list_user_profiles();
    profiles.extend(list_system_profiles());
    profiles
}

/// Derive a profile name from its file path (stem without extension).
pub fn profile_name_from_path(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

fn list_profiles_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut profiles: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    profiles.sort();
    profiles
}
