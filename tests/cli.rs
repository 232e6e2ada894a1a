//! Binary-level tests for the `seoaudit` command line.

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use common::fixture_path;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Command running in an empty directory so no `.seoaudit.toml` is discovered.
fn seoaudit(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("seoaudit");
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("SEOAUDIT_LOG")
        .env_remove("SEOAUDIT_PLAIN");
    cmd
}

fn fixture(name: &str) -> String {
    fixture_path(name).to_string_lossy().into_owned()
}

fn stdout_json(cmd: &mut Command) -> Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn test_audit_json_for_healthy_page() {
    let dir = TempDir::new().unwrap();
    let json = stdout_json(seoaudit(&dir).args([
        "audit",
        &fixture("healthy_page.json"),
        "--format",
        "json",
    ]));

    assert_eq!(json["score"], 100);
    assert_eq!(json["catalog_version"], "2024.2");
    assert_eq!(json["critical"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["actions"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_audit_plain_terminal_report() {
    let dir = TempDir::new().unwrap();
    let out = seoaudit(&dir)
        .args(["audit", &fixture("neglected_page.json"), "--plain"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("SEO AUDIT REPORT"));
    assert!(text.contains("Score: 13/100 (poor)"));
    assert!(text.contains("Missing meta description"));
    assert!(text.contains("No H1 tag found"));
    assert!(text.is_ascii(), "plain output must be ASCII");
}

#[test]
fn test_fail_under_sets_exit_code() {
    let dir = TempDir::new().unwrap();
    seoaudit(&dir)
        .args([
            "audit",
            &fixture("neglected_page.json"),
            "--format",
            "json",
            "--fail-under",
            "70",
        ])
        .assert()
        .code(2);

    seoaudit(&dir)
        .args([
            "audit",
            &fixture("healthy_page.json"),
            "--format",
            "json",
            "--fail-under",
            "70",
        ])
        .assert()
        .success();
}

#[test]
fn test_output_format_follows_file_extension() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("reports/audit.md");

    seoaudit(&dir)
        .args(["audit", &fixture("neglected_page.json"), "--output"])
        .arg(&report)
        .assert()
        .success();

    let markdown = fs::read_to_string(&report).unwrap();
    assert!(markdown.starts_with("# SEO Audit Report"));
    assert!(markdown.contains("Missing page title"));
}

#[test]
fn test_signals_file_feeds_backlinks() {
    let dir = TempDir::new().unwrap();
    let json = stdout_json(seoaudit(&dir).args([
        "audit",
        &fixture("healthy_page.json"),
        "--signals",
        &fixture("signals.json"),
        "--deep",
        "--format",
        "json",
    ]));

    let warnings: Vec<&str> = json["warning"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["rule_id"].as_str())
        .collect();
    assert_eq!(warnings, vec!["backlinks"]);
    assert_eq!(json["score"], 95);

    let notes: Vec<&str> = json["notes"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(notes.contains(&"Advanced checks omitted: Core Web Vitals signal unavailable (provider timed out)"));
}

#[test]
fn test_batch_reports_each_page() {
    let dir = TempDir::new().unwrap();
    let out = seoaudit(&dir)
        .args([
            "batch",
            &fixture("healthy_page.json"),
            &fixture("neglected_page.json"),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("100/100"));
    assert!(lines[1].starts_with(" 13/100  4 critical  1 warnings"));
}

#[test]
fn test_batch_fails_when_a_page_cannot_be_audited() {
    let dir = TempDir::new().unwrap();
    let assert = seoaudit(&dir)
        .args([
            "batch",
            "--json",
            &fixture("healthy_page.json"),
            &fixture("no_document.json"),
        ])
        .assert()
        .failure();

    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["result"]["score"], 100);
    assert_eq!(
        entries[1]["error"],
        "page facts for https://example.com/broken contain no document"
    );
}

#[test]
fn test_compare_reports_score_delta() {
    let dir = TempDir::new().unwrap();
    let json = stdout_json(seoaudit(&dir).args([
        "compare",
        &fixture("healthy_page.json"),
        &fixture("neglected_page.json"),
        "--format",
        "json",
    ]));

    assert_eq!(json["score_delta"], 87);
    assert_eq!(json["only_subject_fails"].as_array().map(Vec::len), Some(0));
    assert!(json["only_competitor_fails"]
        .as_array()
        .unwrap()
        .iter()
        .any(|id| id == "h1-missing"));
}

#[test]
fn test_rules_json_lists_catalog() {
    let dir = TempDir::new().unwrap();
    let json = stdout_json(seoaudit(&dir).args(["rules", "--json"]));
    let rules = json.as_array().unwrap();

    assert_eq!(rules.len(), 33);
    assert_eq!(rules[0]["id"], "title-missing");
    assert_eq!(rules[31]["id"], "competitor-keywords");
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    seoaudit(&dir).arg("init").assert().success();
    assert!(dir.path().join(".seoaudit.toml").exists());

    seoaudit(&dir).arg("init").assert().failure();
    seoaudit(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_config_file_thresholds_apply() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".seoaudit.toml"),
        "[thresholds]\nmax_load_time_ms = 1000\n",
    )
    .unwrap();

    let json = stdout_json(seoaudit(&dir).args([
        "audit",
        &fixture("healthy_page.json"),
        "--format",
        "json",
    ]));
    let warnings: Vec<&str> = json["warning"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["rule_id"].as_str())
        .collect();
    assert_eq!(warnings, vec!["page-load-time"]);
}

#[test]
fn test_missing_facts_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    seoaudit(&dir)
        .args(["audit", "does-not-exist.json"])
        .assert()
        .failure();
}
