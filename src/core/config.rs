//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.saathi/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::hold::{DEFAULT_COOLDOWN, DEFAULT_HOLD, DEFAULT_RESET, HoldTiming};
use crate::core::model::{Language, Theme};
use crate::core::validate::MAX_CHECK_IN_MINUTES;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SaathiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sos: SosConfig,
    #[serde(default)]
    pub checkin: CheckInConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
    pub language: Option<Language>,
    pub name: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SosConfig {
    pub hold_ms: Option<u64>,
    pub reset_ms: Option<u64>,
    pub cooldown_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CheckInConfig {
    pub default_minutes: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CHECK_IN_MINUTES: u32 = 30;
pub const DEFAULT_USER_NAME: &str = "Traveller";
pub const DEFAULT_TAGLINE: &str = "Stay safe, stay aware";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub language: Language,
    pub user_name: String,
    pub tagline: String,
    pub hold_timing: HoldTiming,
    pub default_check_in_minutes: u32,
    pub skip_onboarding: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the app directory, `~/.saathi/`.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".saathi"))
}

/// Returns the path to `~/.saathi/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.saathi/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SaathiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SaathiConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SaathiConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SaathiConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SaathiConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SaathiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Saathi Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "dark"                     # "light" or "dark" (or SAATHI_THEME)
# language = "en"                    # "en" or "hi" (or SAATHI_LANGUAGE)
# name = "Traveller"
# tagline = "Stay safe, stay aware"

# [sos]
# hold_ms = 2200                     # How long SPACE must be held
# reset_ms = 200                     # Bar drain time after an early release
# cooldown_ms = 600                  # Pause after an SOS before re-arming

# [checkin]
# default_minutes = 30
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_value<T: for<'de> Deserialize<'de>>(var: &str) -> Option<T> {
    let raw = std::env::var(var).ok()?;
    // Reuse serde's lowercase enum names so env and TOML accept the same values.
    match T::deserialize(toml::Value::String(raw.trim().to_lowercase())) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", var, raw, e);
            None
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_theme` and `cli_language` are from CLI flags (None = not specified).
pub fn resolve(
    config: &SaathiConfig,
    cli_theme: Option<Theme>,
    cli_language: Option<Language>,
) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli_theme
        .or_else(|| env_value("SAATHI_THEME"))
        .or(config.general.theme)
        .unwrap_or_default();

    // Language: CLI → env → config → default
    let language = cli_language
        .or_else(|| env_value("SAATHI_LANGUAGE"))
        .or(config.general.language)
        .unwrap_or_default();

    let ms = |value: Option<u64>, default: Duration| {
        value.map(Duration::from_millis).unwrap_or(default)
    };
    let hold_timing = HoldTiming {
        hold: ms(config.sos.hold_ms, DEFAULT_HOLD),
        reset: ms(config.sos.reset_ms, DEFAULT_RESET),
        cooldown: ms(config.sos.cooldown_ms, DEFAULT_COOLDOWN),
    };

    let default_check_in_minutes = match config.checkin.default_minutes {
        Some(m) if (1..=MAX_CHECK_IN_MINUTES).contains(&m) => m,
        Some(m) => {
            warn!("checkin.default_minutes={} out of range, using default", m);
            DEFAULT_CHECK_IN_MINUTES
        }
        None => DEFAULT_CHECK_IN_MINUTES,
    };

    ResolvedConfig {
        theme,
        language,
        user_name: config
            .general
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
        tagline: config
            .general
            .tagline
            .clone()
            .unwrap_or_else(|| DEFAULT_TAGLINE.to_string()),
        hold_timing,
        default_check_in_minutes,
        skip_onboarding: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = SaathiConfig::default();
        assert!(config.general.theme.is_none());
        assert!(config.sos.hold_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = SaathiConfig::default();
        let resolved = resolve(&config, Some(Theme::Dark), Some(Language::En));
        assert_eq!(resolved.hold_timing, HoldTiming::default());
        assert_eq!(resolved.default_check_in_minutes, DEFAULT_CHECK_IN_MINUTES);
        assert_eq!(resolved.user_name, DEFAULT_USER_NAME);
        assert!(!resolved.skip_onboarding);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = SaathiConfig {
            general: GeneralConfig {
                name: Some("Asha".to_string()),
                tagline: Some("Solo in the hills".to_string()),
                ..Default::default()
            },
            sos: SosConfig {
                hold_ms: Some(3000),
                reset_ms: None,
                cooldown_ms: Some(1000),
            },
            checkin: CheckInConfig {
                default_minutes: Some(15),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.user_name, "Asha");
        assert_eq!(resolved.tagline, "Solo in the hills");
        assert_eq!(resolved.hold_timing.hold, Duration::from_millis(3000));
        assert_eq!(resolved.hold_timing.reset, DEFAULT_RESET);
        assert_eq!(resolved.hold_timing.cooldown, Duration::from_millis(1000));
        assert_eq!(resolved.default_check_in_minutes, 15);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = SaathiConfig {
            general: GeneralConfig {
                theme: Some(Theme::Dark),
                language: Some(Language::En),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Theme::Light), Some(Language::Hi));
        assert_eq!(resolved.theme, Theme::Light);
        assert_eq!(resolved.language, Language::Hi);
    }

    #[test]
    fn test_out_of_range_minutes_fall_back() {
        let config = SaathiConfig {
            checkin: CheckInConfig {
                default_minutes: Some(0),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.default_check_in_minutes, DEFAULT_CHECK_IN_MINUTES);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
theme = "light"
language = "hi"
name = "Asha"

[sos]
hold_ms = 1500

[checkin]
default_minutes = 45
"#;
        let config: SaathiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(Theme::Light));
        assert_eq!(config.general.language, Some(Language::Hi));
        assert_eq!(config.general.name.as_deref(), Some("Asha"));
        assert_eq!(config.sos.hold_ms, Some(1500));
        assert_eq!(config.checkin.default_minutes, Some(45));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[sos]
cooldown_ms = 900
"#;
        let config: SaathiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sos.cooldown_ms, Some(900));
        assert!(config.general.theme.is_none());
        assert!(config.checkin.default_minutes.is_none());
    }

    #[test]
    fn test_bad_enum_value_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\ntheme = \"purple\"\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_generates_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.general.name.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Saathi Configuration"));
        // The template is all comments, so it parses back to defaults.
        let reparsed: SaathiConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.sos.hold_ms.is_none());
    }
}
