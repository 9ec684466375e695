//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and distinct exit codes.

use miette::Diagnostic;
use thiserror::Error;

use larder_config::ConfigError;
use larder_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the catalog at {url}")]
    #[diagnostic(
        code(larder::connection_failed),
        help(
            "Check that the catalog service is running and reachable.\n\
             Reason: {reason}\n\
             Override the URL with --api-url or LARDER_API_URL."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Catalog request timed out")]
    #[diagnostic(
        code(larder::timeout),
        help("Increase the timeout with --timeout or check the catalog service.")
    )]
    Timeout,

    // ── Catalog ──────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(larder::catalog_error))]
    Catalog { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("Location '{location_id}' not found near {zip_code}")]
    #[diagnostic(
        code(larder::location_not_found),
        help("Run: larder locations --zip {zip_code} to see available locations")
    )]
    LocationNotFound {
        location_id: String,
        zip_code: String,
    },

    #[error("No locations found near {zip_code}")]
    #[diagnostic(
        code(larder::no_locations),
        help("Try another zip code with --zip or set zip_code in your profile.")
    )]
    NoLocations { zip_code: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(larder::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(larder::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: larder config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(larder::config),
        help("Check the file printed by: larder config path")
    )]
    Config { message: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("'{command}' needs an interactive terminal")]
    #[diagnostic(
        code(larder::not_a_terminal),
        help("Use 'larder search <term>' for scripted access.")
    )]
    NotInteractive { command: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(larder::render))]
    Render { message: String },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::LocationNotFound { .. } | Self::NoLocations { .. } | Self::ProfileNotFound { .. } => {
                exit_code::NOT_FOUND
            }
            Self::Validation { .. } | Self::NotInteractive { .. } => exit_code::USAGE,
            Self::Catalog { .. } | Self::Config { .. } | Self::Io(_) | Self::Render { .. } => {
                exit_code::GENERAL
            }
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::Timeout => CliError::Timeout,
            err @ CoreError::Api { .. } => CliError::Catalog {
                message: err.user_message(),
            },
            CoreError::LocationNotFound { location_id } => CliError::LocationNotFound {
                location_id,
                zip_code: String::new(),
            },
            CoreError::ValidationFailed { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },
            CoreError::Config { message } => CliError::Config { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: String::new(),
            },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}
