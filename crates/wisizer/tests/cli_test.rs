//! Integration tests for the `wisizer` CLI binary.
//!
//! Argument parsing, output formats, catalogue overrides, config handling
//! and the calculation journal, all against throwaway directories.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;

// ── Helpers ─────────────────────────────────────────────────────────

const ISOLATED_HOME: &str = "/tmp/wisizer-cli-test-nonexistent";

/// Build a [`Command`] for the `wisizer` binary with env isolation.
///
/// Clears all `WISIZER_*` env vars and points config and data directories
/// at a nonexistent path so tests never touch the user's real files.
fn wisizer_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("wisizer");
    cmd.env("HOME", ISOLATED_HOME)
        .env("XDG_CONFIG_HOME", ISOLATED_HOME)
        .env("XDG_DATA_HOME", ISOLATED_HOME)
        .env_remove("WISIZER_CONFIG")
        .env_remove("WISIZER_CATALOG")
        .env_remove("WISIZER_OUTPUT")
        .env_remove("WISIZER_JOURNAL__ENABLED")
        .env_remove("WISIZER_JOURNAL__PATH")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

const CUSTOM_CATALOG: &str = r#"
version = "cli-test"

[[scenarios]]
key = "warehouse"
name = "Warehouse"
description = "Racked storage"
coverage_area_per_ap_m2 = 500.0

[[access_points]]
generation = "wifi6"
model_id = "CUSTOM-AP"
wifi_standard = "802.11ax (Wi-Fi 6)"
spatial_streams = "2 x 2 : 2"
port_groups = [{ port_count = 1, speeds_gbps = [1.0] }]
poe_type = "PoE"
poe_draw_watts = 15.0
band_capacity_mbps = { "2.4ghz" = 573.5, "5ghz" = 1000.0 }
max_users = 100
sku = "CUSTOM-AP-HW"

[[switches]]
family = "Custom"
model_id = "CUSTOM-SW"
layer = "L2"
access_port_groups = [{ port_count = 8, speeds_gbps = [1.0] }]
poe_budget_watts = 120.0
poe_type = "PoE+"
switching_capacity_gbps = 20.0
sku = "CUSTOM-SW-HW"
"#;

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = wisizer_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    wisizer_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("access points")
            .and(predicate::str::contains("size"))
            .and(predicate::str::contains("switches"))
            .and(predicate::str::contains("catalog")),
    );
}

#[test]
fn test_version_flag() {
    wisizer_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wisizer"));
}

#[test]
fn test_completions_bash() {
    wisizer_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Sizing ──────────────────────────────────────────────────────────

#[test]
fn test_size_json_small_office() {
    let output = wisizer_cmd()
        .args(["size", "--users", "50", "--area", "100", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let json = stdout_json(&output);
    assert_eq!(json["demand"]["recommended_ap_count"], 3);
    assert_eq!(json["demand"]["selected_ap"]["base"]["model_id"], "MR36");
    assert_eq!(json["wire_speed_mbps"], 87);
    assert_eq!(json["switches"]["status"], "provisioned");
    assert_eq!(json["switches"]["switch"]["model_id"], "MS130-8P");
    assert_eq!(json["switches"]["switches_needed"], 1);
    assert_eq!(json["bill_of_materials"][0]["part_number"], "MR36-HW");
    assert_eq!(json["bill_of_materials"][0]["quantity"], 3);
    assert!(json.get("explanation").is_none());
}

#[test]
fn test_size_plain_lists_hardware() {
    wisizer_cmd()
        .args(["size", "-u", "50", "-a", "100", "-o", "plain"])
        .assert()
        .success()
        .stdout("MR36-HW\t3\nMS130-8P-HW\t1\n");
}

#[test]
fn test_size_table_mentions_survey_notice() {
    wisizer_cmd()
        .args(["size", "-u", "50", "-a", "100", "--color", "never"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Bill of materials")
                .and(predicate::str::contains("MS130-8P"))
                .and(predicate::str::contains("Preliminary estimate")),
        );
}

#[test]
fn test_size_without_switches() {
    let output = wisizer_cmd()
        .args(["size", "-u", "50", "-a", "100", "--no-switches", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["switches"]["status"], "not_requested");
    assert_eq!(json["bill_of_materials"].as_array().unwrap().len(), 2);
}

#[test]
fn test_size_explain_adds_explanation() {
    let output = wisizer_cmd()
        .args(["size", "-u", "50", "-a", "100", "--explain", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let explanation = stdout_json(&output)["explanation"]
        .as_str()
        .unwrap()
        .to_owned();
    assert!(explanation.contains("3 x MR36"), "{explanation}");
}

#[test]
fn test_unknown_scenario_falls_back_with_advisory() {
    let output = wisizer_cmd()
        .args(["size", "-u", "50", "-a", "100", "-s", "moon-base", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["advisories"][0]["kind"], "scenario_defaulted");
    assert_eq!(json["advisories"][0]["requested"], "moon-base");
}

#[test]
fn test_zero_area_is_usage_error() {
    let output = wisizer_cmd()
        .args(["size", "-u", "50", "-a", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("area_m2"));
}

#[test]
fn test_oversized_area_is_usage_error() {
    let output = wisizer_cmd()
        .args(["size", "-u", "50", "-a", "1e13"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("area_m2"));
}

#[test]
fn test_aps_plain() {
    wisizer_cmd()
        .args(["aps", "-u", "50", "-a", "100", "-o", "plain"])
        .assert()
        .success()
        .stdout("MR36\t3\n");
}

#[test]
fn test_switches_for_known_ap() {
    let output = wisizer_cmd()
        .args(["switches", "--ap-model", "MR44", "--ap-count", "10", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let json = stdout_json(&output);
    assert_eq!(json["status"], "provisioned");
    assert!(json["switches_needed"].as_u64().unwrap() >= 1);
}

#[test]
fn test_switches_unknown_ap_is_not_found() {
    let output = wisizer_cmd()
        .args(["switches", "-m", "MR99", "-n", "4"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

// ── Catalogue ───────────────────────────────────────────────────────

#[test]
fn test_catalog_scenarios_plain() {
    wisizer_cmd()
        .args(["catalog", "scenarios", "-o", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("open-office-minimal-walls"));
}

#[test]
fn test_catalog_unknown_ap_is_not_found() {
    let output = wisizer_cmd()
        .args(["catalog", "ap", "MR99"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("MR99"));
}

#[test]
fn test_catalog_switch_filter_by_family() {
    wisizer_cmd()
        .args(["catalog", "switches", "--family", "ms130", "-o", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MS130-8P").and(predicate::str::contains("C9300L").not()));
}

#[test]
fn test_custom_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_file(dir.path(), "catalog.toml", CUSTOM_CATALOG);

    let output = wisizer_cmd()
        .arg("--catalog")
        .arg(&catalog)
        .args(["size", "-u", "10", "-a", "400", "-s", "warehouse", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let json = stdout_json(&output);
    assert_eq!(json["catalog_version"], "cli-test");
    assert_eq!(json["demand"]["selected_ap"]["base"]["model_id"], "CUSTOM-AP");
    assert_eq!(json["switches"]["switch"]["model_id"], "CUSTOM-SW");
}

#[test]
fn test_exported_catalog_loads_back() {
    let exported = wisizer_cmd().args(["catalog", "export"]).output().unwrap();
    assert!(exported.status.success());

    let dir = tempfile::tempdir().unwrap();
    let catalog = write_file(
        dir.path(),
        "exported.toml",
        &String::from_utf8(exported.stdout).unwrap(),
    );

    wisizer_cmd()
        .arg("--catalog")
        .arg(&catalog)
        .args(["aps", "-u", "50", "-a", "100", "-o", "plain"])
        .assert()
        .success()
        .stdout("MR36\t3\n");
}

#[test]
fn test_bad_catalog_file_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_file(dir.path(), "broken.toml", "version = [");

    let output = wisizer_cmd()
        .arg("--catalog")
        .arg(&catalog)
        .args(["aps", "-u", "10", "-a", "100"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honours_flag() {
    wisizer_cmd()
        .args(["config", "path", "--config", "/tmp/wisizer-elsewhere.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wisizer-elsewhere.toml"));
}

#[test]
fn test_missing_explicit_config_exit_code() {
    let output = wisizer_cmd()
        .args(["--config", "/tmp/wisizer-cli-test-nonexistent/none.toml"])
        .args(["size", "-u", "10", "-a", "100"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(6));
}

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    wisizer_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    wisizer_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]").and(predicate::str::contains("[sizing]")));

    let again = wisizer_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .output()
        .unwrap();
    assert_eq!(again.status.code(), Some(6));
}

#[test]
fn test_config_defaults_apply_to_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "config.toml",
        "[defaults]\noutput = \"plain\"\n",
    );

    wisizer_cmd()
        .arg("--config")
        .arg(&path)
        .args(["aps", "-u", "50", "-a", "100"])
        .assert()
        .success()
        .stdout("MR36\t3\n");
}

// ── Journal ─────────────────────────────────────────────────────────

#[test]
fn test_journal_records_and_history_reads() {
    let dir = tempfile::tempdir().unwrap();
    let journal = dir.path().join("calculations.jsonl");

    for users in ["50", "80"] {
        wisizer_cmd()
            .env("WISIZER_JOURNAL__ENABLED", "true")
            .env("WISIZER_JOURNAL__PATH", &journal)
            .args(["size", "-u", users, "-a", "100", "-q"])
            .assert()
            .success();
    }
    wisizer_cmd()
        .env("WISIZER_JOURNAL__ENABLED", "true")
        .env("WISIZER_JOURNAL__PATH", &journal)
        .args(["size", "-u", "50", "-a", "100", "--no-journal", "-q"])
        .assert()
        .success();

    let output = wisizer_cmd()
        .env("WISIZER_JOURNAL__PATH", &journal)
        .args(["history", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let records = stdout_json(&output);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["ap_model"], "MR36");
    assert_eq!(records[0]["request"]["total_users"], 50);

    let limited = wisizer_cmd()
        .env("WISIZER_JOURNAL__PATH", &journal)
        .args(["history", "--limit", "1", "-o", "json"])
        .output()
        .unwrap();
    let limited = stdout_json(&limited);
    assert_eq!(limited.as_array().unwrap().len(), 1);
    assert_eq!(limited[0]["request"]["total_users"], 80);
}

#[test]
fn test_journal_disabled_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let journal = dir.path().join("calculations.jsonl");

    wisizer_cmd()
        .env("WISIZER_JOURNAL__PATH", &journal)
        .args(["size", "-u", "50", "-a", "100", "-q"])
        .assert()
        .success();
    assert!(!journal.exists());
}
