// ── Runtime catalog configuration ──
//
// Describes which catalog to talk to and how to page through it. Never
// touches disk: the CLI resolves profiles and hands a `CatalogConfig` in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use larder_api::{TlsMode, TransportConfig};

use crate::error::CoreError;
use crate::pagination::PageLimits;

/// Zip code searched when none is configured.
pub const DEFAULT_ZIP_CODE: &str = "97224";

/// Locations requested per lookup.
pub const DEFAULT_MAX_LOCATIONS: u32 = 25;

/// Per-session search settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub zip_code: String,
    pub max_locations: u32,
    pub limits: PageLimits,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            zip_code: DEFAULT_ZIP_CODE.into(),
            max_locations: DEFAULT_MAX_LOCATIONS,
            limits: PageLimits::default(),
        }
    }
}

impl SearchConfig {
    /// Build and validate search settings.
    pub fn new(
        zip_code: impl Into<String>,
        max_locations: u32,
        page_limit: u32,
        max_results: u32,
    ) -> Result<Self, CoreError> {
        let zip_code = zip_code.into();
        larder_api::locations::validate_zip_code(&zip_code).map_err(|e| {
            CoreError::ValidationFailed {
                message: e.to_string(),
            }
        })?;
        if max_locations == 0 {
            return Err(CoreError::ValidationFailed {
                message: "max_locations must be at least 1".into(),
            });
        }
        Ok(Self {
            zip_code,
            max_locations,
            limits: PageLimits::new(page_limit, max_results)?,
        })
    }
}

/// Everything needed to build a catalog session.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog service, e.g. `http://localhost:8080`.
    pub url: Url,
    pub timeout: Duration,
    /// Extra root certificate for self-hosted deployments.
    pub ca_cert: Option<PathBuf>,
    pub search: SearchConfig,
}

impl CatalogConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: Duration::from_secs(30),
            ca_cert: None,
            search: SearchConfig::default(),
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = self
            .ca_cert
            .clone()
            .map_or(TlsMode::System, TlsMode::CustomCa);
        TransportConfig {
            tls,
            ..TransportConfig::default()
        }
        .with_timeout(self.timeout)
    }
}
