//! Shared helpers for command handlers.

use larder_core::{CatalogController, Location, Outcome};

use crate::error::CliError;

/// Turn a failed outcome into the error the controller recorded.
pub fn check(controller: &CatalogController, outcome: Outcome) -> Result<Outcome, CliError> {
    if outcome == Outcome::Failed {
        if let Some(err) = controller.store().error.current() {
            return Err(err.into());
        }
    }
    Ok(outcome)
}

/// Load locations near the configured zip code, failing when there are none.
pub async fn require_locations(controller: &CatalogController) -> Result<(), CliError> {
    check(controller, controller.load_locations().await)?;
    if controller.store().locations.is_empty() {
        return Err(CliError::NoLocations {
            zip_code: controller.search_config().zip_code.clone(),
        });
    }
    Ok(())
}

/// Select `location_id`, or the nearest location when none is given.
pub fn select_location(
    controller: &CatalogController,
    location_id: Option<&str>,
) -> Result<Location, CliError> {
    let zip_code = &controller.search_config().zip_code;
    let location = match location_id {
        Some(id) => controller.store().locations.find(id).ok_or_else(|| {
            CliError::LocationNotFound {
                location_id: id.into(),
                zip_code: zip_code.clone(),
            }
        })?,
        None => controller
            .store()
            .locations
            .snapshot()
            .first()
            .cloned()
            .ok_or_else(|| CliError::NoLocations {
                zip_code: zip_code.clone(),
            })?,
    };
    controller.select(location.clone());
    Ok(location)
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
