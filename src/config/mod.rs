// SPDX-License-Identifier: MPL-2.0
//! Startup configuration loaded from an optional `settings.toml` file.
//!
//! The viewer never writes preferences back: every run starts from the
//! values below, optionally overridden by a hand-edited file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[slideshow]` - Interval and subfolder scanning
//!
//! # Examples
//!
//! ```no_run
//! use beginview::config;
//!
//! let (config, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! assert!(config.slideshow.interval_ms() >= config::MIN_INTERVAL_MS);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "BeginView";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (`ja` or `en`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Delay between slides in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Whether folder scans descend into subfolders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_subfolders: Option<bool>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: Some(DEFAULT_INTERVAL_MS),
            include_subfolders: Some(false),
        }
    }
}

impl SlideshowConfig {
    /// Configured interval, raised to the timer minimum.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
            .unwrap_or(DEFAULT_INTERVAL_MS)
            .max(MIN_INTERVAL_MS)
    }

    #[must_use]
    pub fn include_subfolders(&self) -> bool {
        self.include_subfolders.unwrap_or(false)
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

/// Location of `settings.toml` in the platform config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the startup configuration.
///
/// Returns the configuration together with an optional warning message when
/// the file exists but could not be used. Missing files are not an error.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = default_config_path() else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("ignoring {}: {err}", path.display())),
        ),
    }
}

/// Reads and parses a configuration file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\nlanguage = \"en\"\n\n[slideshow]\ninterval_ms = 5000\ninclude_subfolders = true\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language.as_deref(), Some("en"));
        assert_eq!(loaded.slideshow.interval_ms(), 5000);
        assert!(loaded.slideshow.include_subfolders());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, Config::default());
        assert!(loaded.general.language.is_none());
        assert_eq!(loaded.slideshow.interval_ms(), DEFAULT_INTERVAL_MS);
        assert!(!loaded.slideshow.include_subfolders());
    }

    #[test]
    fn too_short_interval_is_raised_to_minimum() {
        let config = SlideshowConfig {
            interval_ms: Some(10),
            include_subfolders: None,
        };
        assert_eq!(config.interval_ms(), MIN_INTERVAL_MS);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
