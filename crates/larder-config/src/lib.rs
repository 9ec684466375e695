//! Shared configuration for the larder CLI.
//!
//! TOML profiles layered under `LARDER_` environment variables, and
//! translation to `larder_core::CatalogConfig`. The CLI adds flag-aware
//! wrappers on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use larder_core::config::{DEFAULT_MAX_LOCATIONS, DEFAULT_ZIP_CODE};
use larder_core::pagination::{DEFAULT_MAX_RESULTS, DEFAULT_PAGE_LIMIT};
use larder_core::{CatalogConfig, CoreError, SearchConfig};

/// Catalog URL used when a profile does not name one.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when `--profile` is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named catalog profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Name of the profile to use: the override, else `default_profile`,
    /// else `"default"`.
    pub fn active_profile_name(&self, name_override: Option<&str>) -> String {
        name_override
            .map(str::to_owned)
            .or_else(|| self.default_profile.clone())
            .unwrap_or_else(|| "default".into())
    }

    /// Look up a profile by name. A missing `"default"` profile resolves to
    /// built-in defaults so a fresh install works without a config file.
    pub fn profile(&self, name: &str) -> Result<Profile, ConfigError> {
        match self.profiles.get(name) {
            Some(p) => Ok(p.clone()),
            None if name == "default" => Ok(Profile::default()),
            None => Err(ConfigError::UnknownProfile { name: name.into() }),
        }
    }

    /// Switch `default_profile`, refusing names with no profile behind them.
    pub fn set_default_profile(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.profiles.contains_key(name) {
            return Err(ConfigError::UnknownProfile { name: name.into() });
        }
        self.default_profile = Some(name.into());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named catalog profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Catalog service base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Zip code whose nearby locations are offered.
    pub zip_code: Option<String>,

    /// Locations requested per lookup.
    pub max_locations: Option<u32>,

    /// Results per page.
    pub page_size: Option<u32>,

    /// Highest result the catalog will page to.
    pub max_results: Option<u32>,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds; falls back to `defaults.timeout`.
    pub timeout: Option<u64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            zip_code: None,
            max_locations: None,
            page_size: None,
            max_results: None,
            ca_cert: None,
            timeout: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "larder", "larder").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("larder");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path`, layered under `LARDER_*` environment variables.
///
/// Nested keys use a double underscore, e.g.
/// `LARDER_PROFILES__DEFAULT__ZIP_CODE=97201`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("LARDER_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is invalid.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile translation ─────────────────────────────────────────────

/// Build a validated `CatalogConfig` from a profile. `default_timeout`
/// applies when the profile sets none.
pub fn profile_to_catalog_config(
    profile: &Profile,
    default_timeout: u64,
) -> Result<CatalogConfig, ConfigError> {
    let url: url::Url = profile
        .api_url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {}", profile.api_url),
        })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    let search = SearchConfig::new(
        profile
            .zip_code
            .clone()
            .unwrap_or_else(|| DEFAULT_ZIP_CODE.into()),
        profile.max_locations.unwrap_or(DEFAULT_MAX_LOCATIONS),
        profile.page_size.unwrap_or(DEFAULT_PAGE_LIMIT),
        profile.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
    )
    .map_err(|e| validation_error("search", &e))?;

    let timeout = profile.timeout.unwrap_or(default_timeout);
    if timeout == 0 {
        return Err(ConfigError::Validation {
            field: "timeout".into(),
            reason: "must be at least 1 second".into(),
        });
    }

    Ok(CatalogConfig {
        url,
        timeout: Duration::from_secs(timeout),
        ca_cert: profile.ca_cert.clone(),
        search,
    })
}

fn validation_error(field: &str, err: &CoreError) -> ConfigError {
    let reason = match err {
        CoreError::ValidationFailed { message } | CoreError::Config { message } => message.clone(),
        other => other.to_string(),
    };
    ConfigError::Validation {
        field: field.into(),
        reason,
    }
}
