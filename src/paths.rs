//! Centralized path definitions for abg-analyzer
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/abg-analyzer/       # or $ABG_CONFIG_DIR
//! ├── config.toml              # Theme and storage preferences
//! └── results.jsonl            # Saved interpretations (default location)
//! ```

use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "ABG_CONFIG_DIR";

/// Global config directory name under `~/.config`
const GLOBAL_DIR: &str = "abg-analyzer";

/// Global config filename
const CONFIG_FILE: &str = "config.toml";

/// Default results history filename
const RESULTS_FILE: &str = "results.jsonl";

/// Get the global config directory.
///
/// Uses `$ABG_CONFIG_DIR` when set and non-empty.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(".config").join(GLOBAL_DIR)
}

/// Get path to the global config file
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}

/// Get the default results history file
#[must_use]
pub fn default_results_file() -> PathBuf {
    global_config_dir().join(RESULTS_FILE)
}
