// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[scan]` - Default model profile and upload size limit
//! - `[classifier]` - Backend selection (mock or remote) and its tuning
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `CEREBRO_SCAN_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use cerebro_scan::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.scan.default_model = Some("orion".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::classification::ModelProfile;
use crate::domain::upload::UploadLimit;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Scan workflow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Identifier of the model profile selected on start-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,

    /// Largest accepted upload, in MiB.
    #[serde(
        default = "default_max_upload_mb",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_upload_mb: Option<u32>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_model: None,
            max_upload_mb: default_max_upload_mb(),
        }
    }
}

impl ScanConfig {
    /// Model to preselect; unknown identifiers fall back to the default profile.
    #[must_use]
    pub fn model(&self) -> ModelProfile {
        self.default_model
            .as_deref()
            .and_then(ModelProfile::from_id)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn upload_limit(&self) -> UploadLimit {
        UploadLimit::from_mebibytes(self.max_upload_mb.unwrap_or(DEFAULT_MAX_UPLOAD_MB))
    }
}

/// Which classifier adapter to use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierBackend {
    #[default]
    Mock,
    Remote,
}

/// Classifier backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub backend: ClassifierBackend,

    /// Simulated analysis time of the mock backend (milliseconds).
    #[serde(
        default = "default_simulated_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub simulated_delay_ms: Option<u64>,

    /// Inference service URL used by the remote backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout of the remote backend (seconds).
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: ClassifierBackend::default(),
            simulated_delay_ms: default_simulated_delay_ms(),
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClassifierConfig {
    /// Simulated delay, clamped to 0–60 s.
    #[must_use]
    pub fn simulated_delay(&self) -> Duration {
        let ms = self
            .simulated_delay_ms
            .unwrap_or(DEFAULT_SIMULATED_DELAY_MS)
            .clamp(MIN_SIMULATED_DELAY_MS, MAX_SIMULATED_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Request timeout, clamped to 1–300 s.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn default_max_upload_mb() -> Option<u32> {
    Some(DEFAULT_MAX_UPLOAD_MB)
}

fn default_simulated_delay_ms() -> Option<u64> {
    Some(DEFAULT_SIMULATED_DELAY_MS)
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// An existing file that no longer parses is left untouched and reported as
/// [`Error::Config`]: the in-memory settings are defaults in that case, and
/// writing them would erase whatever the user had configured.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if path.exists() {
        if let Err(err) = load_from_path(path) {
            tracing::warn!(path = %path.display(), %err, "not overwriting unreadable settings");
            return Err(Error::Config(format!(
                "{} is unreadable and was not overwritten: {err}",
                path.display()
            )));
        }
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            scan: ScanConfig {
                default_model: Some("pulse".to_string()),
                max_upload_mb: Some(10),
            },
            classifier: ClassifierConfig {
                backend: ClassifierBackend::Remote,
                simulated_delay_ms: Some(100),
                endpoint: Some("http://localhost:9000/predict".to_string()),
                timeout_secs: Some(12),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[scan\nbroken")
            .expect("failed to write broken config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[classifier]\nbackend = \"remote\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.classifier.backend, ClassifierBackend::Remote);
        assert_eq!(loaded.classifier.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.scan.model(), ModelProfile::Atlas);
    }

    #[test]
    fn save_with_override_creates_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(base.clone())).expect("save");
        assert!(base.join(CONFIG_FILE).exists());
    }

    #[test]
    fn save_keeps_an_unreadable_file_intact() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        let original = "[classifier]\nbackend = \"remote\"\nendpoint = \"http://lab:8000/classify\"\n\n[scan]\ndefault_model = \"orion\n";
        fs::write(&config_path, original).expect("failed to write broken config");

        let (mut config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_some());
        config.scan.default_model = Some("pulse".to_string());

        let result = save_with_override(&config, Some(temp_dir.path().to_path_buf()));
        assert!(matches!(result, Err(Error::Config(_))));
        assert_eq!(fs::read_to_string(&config_path).expect("read back"), original);
    }

    #[test]
    fn save_replaces_a_readable_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[scan]\ndefault_model = \"orion\"\n").expect("write");

        let mut config = load_from_path(&config_path).expect("load");
        config.scan.default_model = Some("pulse".to_string());
        save_to_path(&config, &config_path).expect("save");

        assert_eq!(load_from_path(&config_path).expect("reload").scan.model(), ModelProfile::Pulse);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let classifier = ClassifierConfig {
            simulated_delay_ms: Some(10_000_000),
            timeout_secs: Some(0),
            ..ClassifierConfig::default()
        };
        assert_eq!(classifier.simulated_delay(), Duration::from_millis(MAX_SIMULATED_DELAY_MS));
        assert_eq!(classifier.timeout(), Duration::from_secs(MIN_TIMEOUT_SECS));

        let scan = ScanConfig {
            default_model: None,
            max_upload_mb: Some(0),
        };
        assert_eq!(scan.upload_limit().mebibytes(), MIN_MAX_UPLOAD_MB);
    }

    #[test]
    fn unknown_model_falls_back_to_default() {
        let scan = ScanConfig {
            default_model: Some("hal9000".to_string()),
            max_upload_mb: None,
        };
        assert_eq!(scan.model(), ModelProfile::Atlas);
        assert_eq!(scan.upload_limit().mebibytes(), DEFAULT_MAX_UPLOAD_MB);
    }

    #[test]
    fn blank_endpoint_uses_default() {
        let classifier = ClassifierConfig {
            endpoint: Some("  ".to_string()),
            ..ClassifierConfig::default()
        };
        assert_eq!(classifier.endpoint(), DEFAULT_ENDPOINT);
    }
}
