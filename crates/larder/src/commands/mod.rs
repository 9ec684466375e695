//! Command dispatch: bridges CLI args -> controller operations -> output.

pub mod browse;
pub mod config_cmd;
pub mod locations;
pub mod search;
pub mod util;

use larder_core::CatalogController;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a catalog-bound command to its handler.
pub async fn dispatch(
    cmd: Command,
    controller: &CatalogController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Locations => locations::handle(controller, global).await,
        Command::Search(args) => search::handle(controller, args, global).await,
        Command::Browse => browse::handle(controller, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
