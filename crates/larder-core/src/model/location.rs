// ── Location domain type ──

use serde::{Deserialize, Serialize};

/// A store that can be searched. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub location_id: String,
    /// Display name, e.g. "Fred Meyer - Tigard".
    pub name: String,
    pub chain: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub county: Option<String>,
}

impl Location {
    /// Single-line street address, when the catalog supplied one.
    pub fn address_line(&self) -> Option<String> {
        let addr = self.address.as_ref()?;
        let parts: Vec<&str> = [
            addr.line1.as_deref(),
            addr.city.as_deref(),
            addr.state.as_deref(),
            addr.zip_code.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}
