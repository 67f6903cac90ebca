// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **Environment variable** (`LANTERN_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "Lantern";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LANTERN_CONFIG_DIR";

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`:
/// - Linux: `~/.config/Lantern/`
/// - macOS: `~/Library/Application Support/Lantern/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Lantern\`
///
/// Returns `None` if the config directory cannot be determined.
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let custom = PathBuf::from("/tmp/lantern-test-config");
        assert_eq!(
            get_app_config_dir_with_override(Some(custom.clone())),
            Some(custom)
        );
    }

    #[test]
    fn default_dir_ends_with_app_name_unless_env_set() {
        if std::env::var(ENV_CONFIG_DIR).is_ok() {
            return;
        }
        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
