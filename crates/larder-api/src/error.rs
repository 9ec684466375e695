use serde::Deserialize;
use thiserror::Error;

/// Top-level error type for the `larder-api` crate.
///
/// Covers every failure mode of a catalog round-trip: transport, non-2xx
/// responses, undecodable bodies, and arguments the service is known to
/// reject. `larder-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Catalog API ─────────────────────────────────────────────────
    /// Non-2xx response. `message` holds the structured explanation from
    /// the response body when the service sent one.
    #[error("Catalog API error (HTTP {status}): {reason}")]
    Api {
        status: u16,
        reason: String,
        message: Option<String>,
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Arguments ───────────────────────────────────────────────────
    /// A request parameter outside the range the catalog accepts.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Error bodies the catalog stack is known to produce.
///
/// The proxy answers `{ "error": true, "message": "..." }`; requests that
/// fall through to the upstream retailer API come back as
/// `{ "errors": { "reason": "..." } }` or an OAuth-style
/// `{ "error_description": "..." }`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<UpstreamErrors>,
    error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrors {
    reason: Option<String>,
}

impl Error {
    /// Build an `Api` error from a failed response's status and body.
    pub(crate) fn from_response(status: reqwest::StatusCode, body: String) -> Self {
        let reason = status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_owned();
        Self::Api {
            status: status.as_u16(),
            reason,
            message: structured_message(&body),
            body,
        }
    }

    /// The structured `message` carried by an API error body, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status for API and transport errors, when known.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

/// Pull a human-readable message out of an error body, if it has one.
fn structured_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or_else(|| parsed.errors.and_then(|e| e.reason))
        .or(parsed.error_description)
        .filter(|m| !m.trim().is_empty())
}
