// ── Core error types ──
//
// User-facing errors from larder-core. Consumers never see reqwest errors
// or JSON parse failures directly; `From<larder_api::Error>` translates
// them into the variants below.

use thiserror::Error;

/// Unified error type for the core crate.
///
/// Cloneable so the error store can hand the latest failure to any number
/// of observers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Transport errors (funnelled into the error store) ────────────
    #[error("Cannot reach catalog at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Catalog request timed out")]
    Timeout,

    #[error("Catalog error: {message}")]
    Api {
        /// Summary of the failure (status line or transport detail).
        message: String,
        /// The `message` field of a structured error body, if the service
        /// sent one.
        detail: Option<String>,
        status: Option<u16>,
    },

    // ── Caller errors ────────────────────────────────────────────────
    #[error("Location not found: {location_id}")]
    LocationNotFound { location_id: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Text for an error banner: the structured message from the catalog
    /// when there is one, otherwise the error's own description.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }

    /// Returns `true` for failures produced by a catalog round-trip.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. } | Self::Timeout | Self::Api { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<larder_api::Error> for CoreError {
    fn from(err: larder_api::Error) -> Self {
        match err {
            larder_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.origin().ascii_serialization())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        detail: None,
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            larder_api::Error::Api {
                status,
                reason,
                message,
                body: _,
            } => CoreError::Api {
                message: format!("HTTP {status} {reason}"),
                detail: message,
                status: Some(status),
            },
            larder_api::Error::Deserialization { message, body: _ } => CoreError::Api {
                message: format!("unreadable catalog response: {message}"),
                detail: None,
                status: None,
            },
            larder_api::Error::InvalidParameter { name, reason } => CoreError::Api {
                message: format!("invalid parameter '{name}': {reason}"),
                detail: None,
                status: None,
            },
            larder_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            larder_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
        }
    }
}
