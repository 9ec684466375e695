//! Config subcommand handlers.

use std::fmt::Write as _;

use dialoguer::Input;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config as TOML-like text for `config show`.
fn format_config(cfg: &Config) -> String {
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "color = \"{}\"", cfg.defaults.color);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    for (name, p) in &cfg.profiles {
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "api_url = \"{}\"", p.api_url);
        if let Some(ref zip) = p.zip_code {
            let _ = writeln!(out, "zip_code = \"{zip}\"");
        }
        if let Some(n) = p.max_locations {
            let _ = writeln!(out, "max_locations = {n}");
        }
        if let Some(n) = p.page_size {
            let _ = writeln!(out, "page_size = {n}");
        }
        if let Some(n) = p.max_results {
            let _ = writeln!(out, "max_results = {n}");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out.trim_end().to_owned()
}

fn prompt_number(prompt: &str, default: u32) -> Result<u32, CliError> {
    Input::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .map_err(prompt_err)
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("larder configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let api_url: String = Input::new()
                .with_prompt("Catalog URL")
                .default(larder_config::DEFAULT_API_URL.into())
                .interact_text()
                .map_err(prompt_err)?;

            let zip_code: String = Input::new()
                .with_prompt("Zip code")
                .default(larder_core::config::DEFAULT_ZIP_CODE.into())
                .interact_text()
                .map_err(prompt_err)?;

            let max_locations = prompt_number(
                "Locations per lookup",
                larder_core::config::DEFAULT_MAX_LOCATIONS,
            )?;
            let page_size = prompt_number(
                "Results per page",
                larder_core::pagination::DEFAULT_PAGE_LIMIT,
            )?;
            let max_results = prompt_number(
                "Result ceiling",
                larder_core::pagination::DEFAULT_MAX_RESULTS,
            )?;

            let profile = Profile {
                api_url,
                zip_code: Some(zip_code),
                max_locations: Some(max_locations),
                page_size: Some(page_size),
                max_results: Some(max_results),
                ca_cert: None,
                timeout: None,
            };

            let mut cfg = config::load_config_or_default();
            larder_config::profile_to_catalog_config(&profile, cfg.defaults.timeout)?;
            cfg.profiles.insert(profile_name.clone(), profile);
            cfg.default_profile = Some(profile_name.clone());

            let path = config::save_config(&cfg)?;

            eprintln!("\nConfiguration written to {}", path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: larder locations");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(&global.output, &cfg, format_config, |c| {
                c.default_profile.clone().unwrap_or_default()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), false);
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: larder config init");
            } else {
                for name in cfg.profiles.keys() {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            cfg.set_default_profile(&name)
                .map_err(|_| CliError::ProfileNotFound {
                    name: name.clone(),
                    available: config::available_profiles(&cfg),
                })?;
            config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Default profile set to '{name}'");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_config_lists_profiles() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "home".into(),
            Profile {
                zip_code: Some("97224".into()),
                ..Profile::default()
            },
        );
        let text = format_config(&cfg);
        assert!(text.contains("[profiles.home]"));
        assert!(text.contains("api_url = \"http://localhost:8080\""));
        assert!(text.contains("zip_code = \"97224\""));
        assert!(!text.contains("page_size"));
    }
}
