use crate::assistant::gemini::DEFAULT_BASE_URL;
use crate::assistant::ModelTiers;
use crate::error::{BizOsError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "bizos";

/// The filename for the configuration file.
const CONFIG_FILENAME: &str = "config.toml";

/// The filename holding the API key, kept apart from the shareable config.
const SECRETS_FILENAME: &str = "secrets.toml";

/// The filename for the dashboard log.
const LOG_FILENAME: &str = "bizos.log";

/// Environment variable (and secrets key) holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

pub const DEFAULT_PRIMARY_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_FALLBACK_MODEL: &str = "gemini-1.5-flash";

// ============================================================================
// Configuration
// ============================================================================

/// Application configuration loaded from `~/.config/bizos/config.toml`.
///
/// Missing fields fall back to their defaults, so a partial file works.
///
/// # Example
///
/// ```toml
/// primary_model = "gemini-2.5-flash"
/// fallback_model = "gemini-1.5-flash"
/// request_timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Model tried first for every prompt.
    #[serde(default = "default_primary_model")]
    pub primary_model: String,

    /// Model tried once when the primary model is unavailable.
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,

    /// Base URL of the generative-language API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout. When unset, the HTTP client default applies.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Default log filter, overridden by `BIZOS_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_primary_model() -> String {
    DEFAULT_PRIMARY_MODEL.to_string()
}

fn default_fallback_model() -> String {
    DEFAULT_FALLBACK_MODEL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_model: default_primary_model(),
            fallback_model: default_fallback_model(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn model_tiers(&self) -> ModelTiers {
        ModelTiers::new(&self.primary_model, &self.fallback_model)
    }
}

// ============================================================================
// Config Validation
// ============================================================================

use std::error::Error;
use std::fmt;

/// Error type for configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A model tier has an empty name.
    EmptyModelName(&'static str),
    /// The API base URL is not an http(s) URL.
    InvalidBaseUrl(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyModelName(field) => {
                write!(f, "`{}` must name a model", field)
            }
            ConfigError::InvalidBaseUrl(url) => {
                write!(
                    f,
                    "`api_base_url` must start with http:// or https://, got {:?}",
                    url
                )
            }
        }
    }
}

impl Error for ConfigError {}

/// Validate a configuration before it is used to build clients.
pub fn validate_config(config: &Config) -> std::result::Result<(), ConfigError> {
    if config.primary_model.trim().is_empty() {
        return Err(ConfigError::EmptyModelName("primary_model"));
    }
    if config.fallback_model.trim().is_empty() {
        return Err(ConfigError::EmptyModelName("fallback_model"));
    }
    if !(config.api_base_url.starts_with("http://") || config.api_base_url.starts_with("https://"))
    {
        return Err(ConfigError::InvalidBaseUrl(config.api_base_url.clone()));
    }
    Ok(())
}

// ============================================================================
// Config File Management
// ============================================================================

/// Default config file content with explanatory comments.
const DEFAULT_CONFIG_WITH_COMMENTS: &str = r#"# Bharat Biz OS Configuration

# Model used first for every AI Guru prompt
primary_model = "gemini-2.5-flash"

# Model tried once when the primary model is unavailable
# (network errors, rate limits, server errors, model not found)
fallback_model = "gemini-1.5-flash"

# Base URL of the Gemini generative-language API
api_base_url = "https://generativelanguage.googleapis.com/v1beta"

# Per-request timeout in seconds. Leave unset to use the HTTP client default.
# request_timeout_secs = 30

# Log filter for ~/.config/bizos/bizos.log (BIZOS_LOG overrides it)
log_level = "info"
"#;

/// Template written by `bizos init` when no secrets file exists.
const SECRETS_TEMPLATE: &str = r#"# Bharat Biz OS secrets. Keep this file private.
# GEMINI_API_KEY = "your-api-key"
"#;

/// Get the bizos config directory (~/.config/bizos/).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| BizOsError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Ensure the config directory exists. Returns whether it was newly created.
pub fn ensure_config_dir() -> Result<(PathBuf, bool)> {
    let dir = config_dir()?;
    let created = !dir.exists();
    fs::create_dir_all(&dir)?;
    Ok((dir, created))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

pub fn secrets_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SECRETS_FILENAME))
}

pub fn log_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(LOG_FILENAME))
}

/// Load `~/.config/bizos/config.toml`, creating it with defaults if missing.
pub fn load_config() -> Result<Config> {
    ensure_config_dir()?;
    load_config_from(&config_path()?)
}

/// Load a config file at `path`, writing the commented default if missing.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG_WITH_COMMENTS)?;
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        BizOsError::Config(format!("Failed to parse config file at {:?}: {}", path, e))
    })?;

    validate_config(&config).map_err(|e| {
        BizOsError::Config(format!("Invalid config file at {:?}: {}", path, e))
    })?;

    Ok(config)
}

/// Write the secrets template at `path` unless a file is already there.
///
/// Returns whether a new file was written.
pub fn write_secrets_template(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, SECRETS_TEMPLATE)?;
    Ok(true)
}

// ============================================================================
// API Key Resolution
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct Secrets {
    #[serde(rename = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,
}

/// Resolve the API key from the environment, then `secrets.toml`.
///
/// Returns `Ok(None)` when neither source has a non-empty key; that is a
/// visible-but-non-fatal condition for the dashboard.
pub fn load_api_key() -> Result<Option<String>> {
    load_api_key_from(&secrets_path()?, env::var(API_KEY_VAR).ok())
}

/// Testable form of [`load_api_key`] with an explicit secrets path and
/// environment value.
pub fn load_api_key_from(secrets: &Path, env_value: Option<String>) -> Result<Option<String>> {
    if let Some(key) = env_value.map(|k| k.trim().to_string()) {
        if !key.is_empty() {
            return Ok(Some(key));
        }
    }

    if !secrets.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(secrets)?;
    let parsed: Secrets = toml::from_str(&content).map_err(|e| {
        BizOsError::Config(format!("Failed to parse secrets file at {:?}: {}", secrets, e))
    })?;

    Ok(parsed
        .gemini_api_key
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty()))
}

/// Mask an API key for display, keeping the last four characters.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.primary_model, "gemini-2.5-flash");
        assert_eq!(config.fallback_model, "gemini-1.5-flash");
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_commented_default_parses_to_default() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG_WITH_COMMENTS).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_load_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();

        assert_eq!(config, Config::default());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# Bharat Biz OS Configuration"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "fallback_model = \"gemini-2.0-flash\"\nrequest_timeout_secs = 20\n")
            .unwrap();

        let config = load_config_from(&path).unwrap();

        assert_eq!(config.primary_model, "gemini-2.5-flash");
        assert_eq!(config.fallback_model, "gemini-2.0-flash");
        assert_eq!(config.request_timeout_secs, Some(20));
        assert_eq!(
            config.model_tiers(),
            ModelTiers::new("gemini-2.5-flash", "gemini-2.0-flash")
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "primary_model = [not toml").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, BizOsError::Config(ref msg) if msg.contains("Failed to parse")));
    }

    #[test]
    fn test_invalid_values_are_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "primary_model = \"  \"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, BizOsError::Config(ref msg) if msg.contains("primary_model")));
    }

    #[test]
    fn test_validate_config() {
        assert!(validate_config(&Config::default()).is_ok());

        let config = Config {
            fallback_model: String::new(),
            ..Default::default()
        };
        assert_eq!(
            validate_config(&config),
            Err(ConfigError::EmptyModelName("fallback_model"))
        );

        let config = Config {
            api_base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_env_key_takes_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let secrets = temp_dir.path().join("secrets.toml");
        fs::write(&secrets, "GEMINI_API_KEY = \"from-file\"\n").unwrap();

        let key = load_api_key_from(&secrets, Some("from-env".to_string())).unwrap();
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_key_from_secrets_file() {
        let temp_dir = TempDir::new().unwrap();
        let secrets = temp_dir.path().join("secrets.toml");
        fs::write(&secrets, "GEMINI_API_KEY = \" from-file \"\n").unwrap();

        let key = load_api_key_from(&secrets, Some("   ".to_string())).unwrap();
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let secrets = temp_dir.path().join("secrets.toml");
        assert_eq!(load_api_key_from(&secrets, None).unwrap(), None);

        assert!(write_secrets_template(&secrets).unwrap());
        assert!(!write_secrets_template(&secrets).unwrap());
        assert_eq!(load_api_key_from(&secrets, None).unwrap(), None);
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("AIzaSyExample1234"), "*************1234");
        assert_eq!(mask_key("abc"), "***");
    }
}
