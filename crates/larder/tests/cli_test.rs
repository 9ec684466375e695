//! Integration tests for the `larder` CLI binary.
//!
//! Argument parsing, help, completions, config handling, and the one-shot
//! commands against a wiremock catalog.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `larder` binary with env isolation.
///
/// Clears all `LARDER_*` env vars and points config directories at `home`
/// so tests never touch the user's real configuration.
fn larder_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("larder");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("LARDER_PROFILE")
        .env_remove("LARDER_API_URL")
        .env_remove("LARDER_ZIP")
        .env_remove("LARDER_OUTPUT")
        .env_remove("LARDER_TIMEOUT");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run the binary off the runtime so the mock server keeps serving.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

fn locations_body() -> Value {
    json!({
        "data": [
            {
                "locationId": "70100023",
                "chain": "FRED",
                "Name": "Fred Meyer - Tigard",
                "address": {
                    "addressLine1": "11565 SW Pacific Hwy",
                    "city": "Tigard",
                    "state": "OR",
                    "zipCode": "97223"
                }
            },
            { "locationId": "70100140", "chain": "FRED", "Name": "Fred Meyer - Tualatin" }
        ]
    })
}

fn products_body(start: u32, total: u32, ids: &[&str]) -> Value {
    let data: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "productId": id,
                "description": format!("Milk {id}"),
                "brand": "Kroger",
                "items": [{
                    "itemId": id,
                    "size": "1 gal",
                    "inventory": { "stockLevel": "HIGH" },
                    "price": { "regular": 3.49, "promo": 0 }
                }]
            })
        })
        .collect();
    json!({
        "data": data,
        "meta": { "pagination": { "start": start, "limit": 25, "total": total } }
    })
}

async fn mount_locations(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/locations"))
        .and(query_param("zipcode", "97224"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = larder_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    larder_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("locations")
            .and(predicate::str::contains("search"))
            .and(predicate::str::contains("browse")),
    );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    larder_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("larder"));
}

#[test]
fn test_invalid_subcommand() {
    let home = tempfile::tempdir().unwrap();
    larder_cmd(home.path())
        .arg("checkout")
        .assert()
        .failure()
        .code(2);
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions() {
    for shell in ["bash", "zsh", "fish"] {
        let home = tempfile::tempdir().unwrap();
        larder_cmd(home.path())
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("larder"));
    }
}

// ── Validation before any request ───────────────────────────────────

#[test]
fn test_blank_search_term_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    larder_cmd(home.path())
        .args(["--api-url", "http://127.0.0.1:9", "search", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("search term"));
}

#[test]
fn test_bad_zip_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    larder_cmd(home.path())
        .args(["--api-url", "http://127.0.0.1:9", "--zip", "972", "locations"])
        .assert()
        .code(2);
}

#[test]
fn test_page_zero_rejected_by_parser() {
    let home = tempfile::tempdir().unwrap();
    larder_cmd(home.path())
        .args(["search", "milk", "--page", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_profile() {
    let home = tempfile::tempdir().unwrap();
    larder_cmd(home.path())
        .args(["--profile", "work", "locations"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("work"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path() {
    let home = tempfile::tempdir().unwrap();
    larder_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_json_defaults() {
    let home = tempfile::tempdir().unwrap();
    let output = larder_cmd(home.path())
        .args(["config", "show", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let cfg: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(cfg["default_profile"], "default");
    assert_eq!(cfg["defaults"]["timeout"], 30);
}

#[test]
fn test_config_use_unknown_profile() {
    let home = tempfile::tempdir().unwrap();
    larder_cmd(home.path())
        .args(["config", "use", "nowhere"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("nowhere"));
}

// ── Catalog commands ────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_locations_plain() {
    let server = MockServer::start().await;
    mount_locations(&server, locations_body()).await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = larder_cmd(home.path());
    cmd.args(["--api-url", &server.uri(), "-o", "plain", "locations"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "70100023\n70100140"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_locations_table() {
    let server = MockServer::start().await;
    mount_locations(&server, locations_body()).await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = larder_cmd(home.path());
    cmd.args(["--api-url", &server.uri(), "locations"]);
    let output = run(cmd).await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(stdout.contains("Fred Meyer - Tigard"));
    assert!(stdout.contains("11565 SW Pacific Hwy"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_json_reports_range() {
    let server = MockServer::start().await;
    mount_locations(&server, locations_body()).await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("filterTerm", "milk"))
        .and(query_param("locationId", "70100023"))
        .and(query_param("filterOffset", "0"))
        .and(query_param("filterLimit", "25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(products_body(0, 60, &["0001", "0002"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = larder_cmd(home.path());
    cmd.args(["--api-url", &server.uri(), "-o", "json", "search", "milk"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["term"], "milk");
    assert_eq!(result["range"], "1 to 25 of 60");
    assert_eq!(result["location"]["location_id"], "70100023");
    assert_eq!(result["products"].as_array().unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_page_two_at_chosen_location() {
    let server = MockServer::start().await;
    mount_locations(&server, locations_body()).await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("locationId", "70100140"))
        .and(query_param("filterOffset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body(0, 60, &["0001"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("locationId", "70100140"))
        .and(query_param("filterOffset", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body(25, 60, &["0026"])))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = larder_cmd(home.path());
    cmd.args([
        "--api-url",
        &server.uri(),
        "search",
        "milk",
        "--location",
        "70100140",
        "--page",
        "2",
    ]);
    let output = run(cmd).await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(stdout.contains("0026"));
    assert!(stdout.contains("26 to 50 of 60"));
    assert!(stdout.contains("$3.49"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_unknown_location() {
    let server = MockServer::start().await;
    mount_locations(&server, locations_body()).await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = larder_cmd(home.path());
    cmd.args([
        "--api-url",
        &server.uri(),
        "search",
        "milk",
        "--location",
        "99999999",
    ]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("99999999"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_without_locations() {
    let server = MockServer::start().await;
    mount_locations(&server, json!({ "data": [] })).await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = larder_cmd(home.path());
    cmd.args(["--api-url", &server.uri(), "search", "milk"]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("97224"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_empty_result_is_not_an_error() {
    let server = MockServer::start().await;
    mount_locations(&server, locations_body()).await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body(0, 0, &[])))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = larder_cmd(home.path());
    cmd.args(["--api-url", &server.uri(), "search", "kumquat"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No products match 'kumquat'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_surfaces_catalog_message() {
    let server = MockServer::start().await;
    mount_locations(&server, locations_body()).await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": true,
            "message": "Field 'term' is too short"
        })))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = larder_cmd(home.path());
    cmd.args(["--api-url", &server.uri(), "search", "m"]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Field 'term' is too short"));
}

#[test]
fn test_browse_requires_terminal() {
    let home = tempfile::tempdir().unwrap();
    larder_cmd(home.path())
        .args(["--api-url", "http://127.0.0.1:9", "browse"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("interactive terminal"));
}
