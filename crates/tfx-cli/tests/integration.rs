//! Integration tests for tfx

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn tfx_cmd() -> Command {
    cargo_bin_cmd!("tfx")
}

/// Temp copy of the fixture records so update can rewrite them in place
struct Workspace {
    dir: TempDir,
    descriptor: PathBuf,
    manifest: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let descriptor = dir.path().join("ai-plugin.json");
        let manifest = dir.path().join("manifest.json");
        fs::copy(fixture_path("ai-plugin.json"), &descriptor).expect("copy descriptor fixture");
        fs::copy(fixture_path("manifest.json"), &manifest).expect("copy manifest fixture");
        Workspace {
            dir,
            descriptor,
            manifest,
        }
    }

    fn descriptor_json(&self) -> Value {
        let content = fs::read_to_string(&self.descriptor).expect("read descriptor");
        serde_json::from_str(&content).expect("parse descriptor")
    }

    fn write_descriptor(&self, value: &Value) {
        let content = serde_json::to_string_pretty(value).expect("serialize descriptor");
        fs::write(&self.descriptor, content).expect("write descriptor");
    }

    fn manifest_json(&self) -> Value {
        let content = fs::read_to_string(&self.manifest).expect("read manifest");
        serde_json::from_str(&content).expect("parse manifest")
    }
}

#[test]
fn test_version() {
    tfx_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tfx"));
}

#[test]
fn test_help() {
    tfx_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Teams app scaffolding from AI plugin descriptors",
        ));
}

#[test]
fn test_invalid_command() {
    tfx_cmd().arg("invalid").assert().failure();
}

#[test]
fn test_update_rewrites_manifest_in_place() {
    let env = Workspace::new();
    tfx_cmd()
        .arg("update")
        .arg(&env.descriptor)
        .arg(&env.manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let manifest = env.manifest_json();
    assert_eq!(
        manifest["name"]["short"],
        "Todo List-${{TEAMSFX_ENV}}"
    );
    assert_eq!(manifest["name"]["full"], "todo_list_manager");
    assert_eq!(manifest["description"]["short"], "Manage your todo list.");
    assert_eq!(
        manifest["developer"]["websiteUrl"],
        "https://example.com/legal"
    );
    assert_eq!(
        manifest["developer"]["privacyUrl"],
        "https://example.com/legal"
    );
    assert_eq!(
        manifest["developer"]["termsOfUseUrl"],
        "https://example.com/legal"
    );
}

#[test]
fn test_update_preserves_unmapped_manifest_keys() {
    let env = Workspace::new();
    tfx_cmd()
        .arg("update")
        .arg(&env.descriptor)
        .arg(&env.manifest)
        .assert()
        .success();

    let manifest = env.manifest_json();
    assert_eq!(manifest["manifestVersion"], "1.16");
    assert_eq!(manifest["icons"]["color"], "color.png");
    assert_eq!(manifest["developer"]["mpnId"], "123456");
    assert_eq!(manifest["developer"]["name"], "Contoso");
}

#[test]
fn test_update_quiet_suppresses_success_line() {
    let env = Workspace::new();
    tfx_cmd()
        .arg("update")
        .arg("--quiet")
        .arg(&env.descriptor)
        .arg(&env.manifest)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_update_warns_on_overlong_description() {
    let env = Workspace::new();
    let mut descriptor = env.descriptor_json();
    descriptor["description_for_human"] = Value::String("x".repeat(90));
    env.write_descriptor(&descriptor);

    tfx_cmd()
        .arg("update")
        .arg(&env.descriptor)
        .arg(&env.manifest)
        .assert()
        .success()
        .stderr(predicate::str::contains("description/short"));
}

#[test]
fn test_update_strict_fails_without_writing() {
    let env = Workspace::new();
    let mut descriptor = env.descriptor_json();
    descriptor["description_for_human"] = Value::String("x".repeat(90));
    env.write_descriptor(&descriptor);

    tfx_cmd()
        .arg("update")
        .arg("--strict")
        .arg(&env.descriptor)
        .arg(&env.manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("description/short"));

    // the manifest on disk is untouched
    let manifest = env.manifest_json();
    assert_eq!(manifest["name"]["short"], "scaffold");
}

#[test]
fn test_update_refuses_unsupported_auth() {
    let env = Workspace::new();
    let mut descriptor = env.descriptor_json();
    descriptor["auth"]["type"] = Value::String("oauth".to_string());
    env.write_descriptor(&descriptor);

    tfx_cmd()
        .arg("update")
        .arg(&env.descriptor)
        .arg(&env.manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("auth type 'oauth'"));
}

#[test]
fn test_update_missing_manifest_fails() {
    let env = Workspace::new();
    tfx_cmd()
        .arg("update")
        .arg(&env.descriptor)
        .arg(env.dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_validate_clean_records() {
    let env = Workspace::new();
    tfx_cmd()
        .arg("validate")
        .arg("--descriptor")
        .arg(&env.descriptor)
        .arg("--manifest")
        .arg(&env.manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("No violations found"));
}

#[test]
fn test_validate_reports_descriptor_violations() {
    let env = Workspace::new();
    let mut descriptor = env.descriptor_json();
    descriptor["auth"]["type"] = Value::String("user_http".to_string());
    descriptor["api"]["url"] = Value::String(String::new());
    env.write_descriptor(&descriptor);

    tfx_cmd()
        .arg("validate")
        .arg("--descriptor")
        .arg(&env.descriptor)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("missing api url")
                .and(predicate::str::contains("auth type 'user_http'"))
                .and(predicate::str::contains("2 violation(s)")),
        );
}

#[test]
fn test_validate_requires_a_record() {
    tfx_cmd().arg("validate").assert().failure();
}

#[test]
fn test_compare_orders_versions() {
    tfx_cmd()
        .args(["compare", "1.2.3", "1.2.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.3 < 1.2.4"));

    tfx_cmd()
        .args(["compare", "1.2.3", "1.2.3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.3 = 1.2.3"));

    tfx_cmd()
        .args(["compare", "1.2.3", "1.2.3-beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.3 > 1.2.3-beta"));
}

#[test]
fn test_compare_rejects_malformed_version() {
    tfx_cmd()
        .args(["compare", "1.2.3", "oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed version string 'oops'"));
}
