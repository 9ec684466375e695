//! Location listing.

use tabled::Tabled;

use larder_core::{CatalogController, Location};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(super) struct LocationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "Address")]
    address: String,
}

impl From<&Location> for LocationRow {
    fn from(l: &Location) -> Self {
        Self {
            id: l.location_id.clone(),
            name: l.name.clone(),
            chain: l.chain.clone().unwrap_or_default(),
            address: l.address_line().unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(controller: &CatalogController, global: &GlobalOpts) -> Result<(), CliError> {
    util::check(controller, controller.load_locations().await)?;
    let snap = controller.store().locations.snapshot();
    if snap.is_empty() {
        if !global.quiet {
            eprintln!(
                "No locations found near {}",
                controller.search_config().zip_code
            );
        }
        return Ok(());
    }

    let out = output::render_list(
        &global.output,
        snap.as_slice(),
        |l| LocationRow::from(l),
        |l| l.location_id.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
