//! Interactive browse session: pick a location, search, page through results.

use std::future::Future;
use std::io::{self, IsTerminal};
use std::time::Duration;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use larder_core::{CatalogController, Navigation, Outcome, SearchView};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::search;
use super::util::prompt_err;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Navigate(Navigation),
    NewSearch,
    ChangeLocation,
    Quit,
}

/// Run `fut` behind a stderr spinner.
async fn with_spinner<F: Future>(message: String, fut: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    let out = fut.await;
    spinner.finish_and_clear();
    out
}

fn show(view: &SearchView, color: bool) {
    let detail = search::page_detail(view, color);
    if !detail.is_empty() {
        println!("{detail}");
    }
    if let Some(message) = view.error_message() {
        eprintln!("{}", output::error_banner(&message, color));
    }
}

fn pick_location(controller: &CatalogController, theme: &ColorfulTheme) -> Result<(), CliError> {
    let locations = controller.store().locations.snapshot();
    let labels: Vec<String> = locations
        .iter()
        .map(|l| match l.address_line() {
            Some(addr) => format!("{} ({addr})", l.name),
            None => l.name.clone(),
        })
        .collect();
    let current = controller
        .store()
        .selected
        .location_id()
        .and_then(|id| locations.iter().position(|l| l.location_id == id))
        .unwrap_or(0);

    let choice = Select::with_theme(theme)
        .with_prompt("Location")
        .items(&labels)
        .default(current)
        .interact()
        .map_err(prompt_err)?;
    if let Some(location) = locations.get(choice) {
        controller.select(location.clone());
    }
    Ok(())
}

fn choose_action(view: &SearchView, theme: &ColorfulTheme) -> Result<Action, CliError> {
    let mut actions: Vec<(&str, Action)> = Vec::new();
    for (label, nav) in [
        ("Next page", Navigation::Next),
        ("Previous page", Navigation::Prev),
        ("First page", Navigation::First),
        ("Last page", Navigation::Last),
    ] {
        if view.can_navigate(nav) {
            actions.push((label, Action::Navigate(nav)));
        }
    }
    actions.push(("New search", Action::NewSearch));
    actions.push(("Change location", Action::ChangeLocation));
    actions.push(("Quit", Action::Quit));

    let prompt = match (view.range_label, view.product_page.as_ref()) {
        (Some(label), Some(page)) => format!("Page {} ({label})", page.page_number()),
        _ => "Next".into(),
    };
    let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();
    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    Ok(actions.get(choice).map_or(Action::Quit, |(_, action)| *action))
}

async fn load_locations(
    controller: &CatalogController,
    theme: &ColorfulTheme,
    color: bool,
) -> Result<bool, CliError> {
    let zip_code = controller.search_config().zip_code.clone();
    loop {
        let outcome = with_spinner(
            format!("Finding locations near {zip_code}"),
            controller.load_locations(),
        )
        .await;
        if outcome != Outcome::Failed {
            return Ok(true);
        }
        if let Some(message) = controller.view().error_message() {
            eprintln!("{}", output::error_banner(&message, color));
        }
        let retry = Confirm::with_theme(theme)
            .with_prompt("Retry?")
            .default(true)
            .interact()
            .map_err(prompt_err)?;
        if !retry {
            return Ok(false);
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(controller: &CatalogController, global: &GlobalOpts) -> Result<(), CliError> {
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        return Err(CliError::NotInteractive {
            command: "browse".into(),
        });
    }
    let color = output::should_color(&global.color);
    let theme = ColorfulTheme::default();

    if !load_locations(controller, &theme, color).await? {
        return Ok(());
    }
    if controller.store().locations.is_empty() {
        return Err(CliError::NoLocations {
            zip_code: controller.search_config().zip_code.clone(),
        });
    }
    pick_location(controller, &theme)?;

    let mut action = Action::NewSearch;
    loop {
        match action {
            Action::NewSearch => {
                let term: String = Input::with_theme(&theme)
                    .with_prompt("Search for")
                    .with_initial_text(controller.term())
                    .interact_text()
                    .map_err(prompt_err)?;
                with_spinner(format!("Searching for '{term}'"), controller.submit(term)).await;
            }
            Action::Navigate(nav) => {
                with_spinner(format!("Loading {nav} page"), controller.navigate(nav)).await;
            }
            Action::ChangeLocation => {
                pick_location(controller, &theme)?;
                if controller.term().trim().is_empty() {
                    action = Action::NewSearch;
                    continue;
                }
                with_spinner(
                    format!("Searching for '{}'", controller.term()),
                    controller.resubmit(),
                )
                .await;
            }
            Action::Quit => return Ok(()),
        }

        let view = controller.view();
        show(&view, color);
        action = choose_action(&view, &theme)?;
    }
}
