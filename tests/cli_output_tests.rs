//! CLI output integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn smartbet() -> Command {
    let mut cmd = cargo_bin_cmd!("smartbet");
    cmd.env_remove("ODDS_API_KEY").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    smartbet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("smartbet"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("sports"))
        .stdout(predicate::str::contains("explain"));
}

#[test]
fn test_version() {
    smartbet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("smartbet"));
}

#[test]
fn test_scan_help_lists_overrides() {
    smartbet()
        .args(["scan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--bankroll"))
        .stdout(predicate::str::contains("--min-profit"))
        .stdout(predicate::str::contains("--show-skips"))
        .stdout(predicate::str::contains("--no-csv"));
}

#[test]
fn test_sports_lists_catalog() {
    smartbet()
        .args(["sports", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("basketball_nba"))
        .stdout(predicate::str::contains("soccer_epl"))
        .stdout(predicate::str::contains("NCAAB"));
}

#[test]
fn test_sports_json() {
    smartbet()
        .args(["sports", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""command":"sports""#))
        .stdout(predicate::str::contains(r#""key":"mma_mixed_martial_arts""#));
}

#[test]
fn test_explain_shows_worked_example() {
    smartbet()
        .args(["explain", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.9524"))
        .stdout(predicate::str::contains("stake A 50.00"))
        .stdout(predicate::str::contains("profit 5.00"))
        .stdout(predicate::str::contains("47.62"));
}

#[test]
fn test_scan_without_api_key_reports_nothing_found() {
    let dir = tempfile::tempdir().unwrap();

    smartbet()
        .current_dir(dir.path())
        .args(["scan", "--no-csv", "--sport", "basketball_nba", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ODDS_API_KEY is not set"))
        .stdout(predicate::str::contains("No arbitrage opportunities found"));

    assert!(!dir.path().join("data").exists());
}

#[test]
fn test_scan_json_report() {
    let dir = tempfile::tempdir().unwrap();

    smartbet()
        .current_dir(dir.path())
        .args(["scan", "--json", "--no-csv", "--sport", "basketball_nba"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""command":"scan""#))
        .stdout(predicate::str::contains(r#""opportunities":[]"#));
}

#[test]
fn test_scan_rejects_non_positive_bankroll() {
    let dir = tempfile::tempdir().unwrap();

    smartbet()
        .current_dir(dir.path())
        .args(["scan", "--no-csv", "--bankroll=0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bankroll"));
}

#[test]
fn test_scan_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();

    smartbet()
        .current_dir(dir.path())
        .args(["scan", "-c", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_config_init_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("smartbet.toml");

    smartbet()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    smartbet()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    smartbet()
        .args(["config", "show", "--color", "never", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("h2h"))
        .stdout(predicate::str::contains("strict"));
}
