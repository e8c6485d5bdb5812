use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ind_gdp.json");

fn get(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("india-gdp").unwrap();
    cmd.args(["get", "--input", FIXTURE]).args(args);
    cmd
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("india-gdp").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("india-gdp"));
}

#[test]
fn prints_headline_stats_for_last_five_years() {
    get(&["--range", "5y", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 observations"))
        .stdout(predicate::str::contains("Current GDP:   ₹266.24 Trillion"))
        .stdout(predicate::str::contains("Annual Growth: 5.86% ↑"))
        .stdout(predicate::str::contains("Global Rank:   5th (Global Economy)"));
}

#[test]
fn all_range_keeps_every_published_year() {
    get(&["--year", "2024", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14 observations"))
        .stdout(predicate::str::contains("2010"))
        .stdout(predicate::str::contains("$3549.9B"));
}

#[test]
fn empty_window_suppresses_stats() {
    get(&["--range", "10y", "--year", "2100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data in selected range"))
        .stdout(predicate::str::contains("Current GDP").not())
        .stdout(predicate::str::contains("Global Rank").not());
}

#[test]
fn json_report() {
    let out = get(&["--range", "10y", "--year", "2024", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["range"], "10y");
    assert_eq!(v["reference_year"], 2024);
    assert_eq!(v["observations"].as_array().unwrap().len(), 10);
    assert_eq!(v["observations"][0]["year"], 2023);
    assert_eq!(v["summary"]["growth_rate_percent"], 5.86);
    assert_eq!(v["summary"]["formatted_current"], "₹266.24 Trillion");
}

#[test]
fn invalid_range_is_rejected() {
    get(&["--range", "3y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range selector"));
}

#[test]
fn writes_svg_plot() {
    let dir = tempfile::tempdir().unwrap();
    let plot = dir.path().join("gdp.svg");
    get(&["--range", "5y", "--year", "2024", "--plot"])
        .arg(&plot)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote plot to"));
    let svg = std::fs::read_to_string(&plot).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn unreachable_api_fails_with_friendly_message() {
    let mut cmd = Command::cargo_bin("india-gdp").unwrap();
    cmd.args(["get", "--base-url", "http://127.0.0.1:9/v2"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch India's GDP data"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn fetch_online_last_ten_years() {
    let mut cmd = Command::cargo_bin("india-gdp").unwrap();
    cmd.args(["get", "--range", "10y", "--json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("formatted_current"));
}
