//! CLI configuration: thin wrapper around `larder_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--api-url, --zip, --timeout) on top of the active profile.

use larder_core::CatalogConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use larder_config::{
    Config, Profile, config_path, load_config, load_config_or_default, save_config,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.active_profile_name(global.profile.as_deref())
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Build a `CatalogConfig` from the config file, active profile, and CLI
/// overrides. Flags win over profile values.
pub fn resolve_catalog_config(global: &GlobalOpts) -> Result<CatalogConfig, CliError> {
    let cfg = load_config().map_err(CliError::from)?;
    let profile_name = active_profile_name(global, &cfg);

    let mut profile = cfg
        .profile(&profile_name)
        .map_err(|_| CliError::ProfileNotFound {
            name: profile_name.clone(),
            available: available_profiles(&cfg),
        })?;

    if let Some(ref url) = global.api_url {
        profile.api_url.clone_from(url);
    }
    if let Some(ref zip) = global.zip {
        profile.zip_code = Some(zip.clone());
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }

    tracing::debug!(profile = %profile_name, api_url = %profile.api_url, "resolved profile");
    Ok(larder_config::profile_to_catalog_config(
        &profile,
        cfg.defaults.timeout,
    )?)
}
