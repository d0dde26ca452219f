//! Integration tests for redeem-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `redeem` invocation isolated from the developer's config and env.
fn redeem(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("redeem").unwrap();
    cmd.current_dir(temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("xdg"))
        .env("HOME", temp.path())
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

const DATA: &str = r#"
[[courses]]
id = 10
category = "cooking"
cost = 20
title = "Knife Skills"

[[courses]]
id = 11
category = "cooking"
cost = 90

[[tokens]]
id = 100
user = 7
value = 50
categories = ["cooking"]

[[tokens]]
id = 101
user = 7
value = 95
courses = [11]
"#;

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eligible"))
        .stdout(predicate::str::contains("courses"))
        .stdout(predicate::str::contains("tokens"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_eligible_table_on_sample_data() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .args(["eligible", "--user", "1", "--course", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1"))
        .stdout(predicate::str::contains("#3"))
        .stdout(predicate::str::contains("#2").not());
}

#[test]
fn test_eligible_list_per_course() {
    let cases = [
        ("1", "1\n3\n"),
        ("2", "1\n3\n"),
        ("3", "3\n"),
        ("4", "3\n"),
        ("5", "3\n5\n"),
    ];
    for (course, expected) in cases {
        let temp = TempDir::new().unwrap();
        redeem(&temp)
            .args(["eligible", "-u", "1", "--course", course, "--format", "list"])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_eligible_json() {
    let temp = TempDir::new().unwrap();
    let out = redeem(&temp)
        .args(["--output-format", "json", "eligible", "-u", "1", "--course", "5"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let ids: Vec<u64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, [3, 5]);
}

#[test]
fn test_eligible_explain() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .args(["eligible", "-u", "1", "--course", "4", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("outside the token's scope"))
        .stdout(predicate::str::contains("below course cost 200"))
        .stdout(predicate::str::contains("1 of 5 tokens eligible"));
}

#[test]
fn test_unknown_user_has_nothing() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .args(["eligible", "-u", "42", "--course", "1", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_courses_by_category() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .args(["courses", "--category", "programming", "--format", "list"])
        .assert()
        .success()
        .stdout("1\n2\n");
}

#[test]
fn test_courses_table() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .arg("courses")
        .assert()
        .success()
        .stdout(predicate::str::contains("Courses:"))
        .stdout(predicate::str::contains("marketing"));
}

#[test]
fn test_tokens_lists_grant_order() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .args(["tokens", "--user", "1", "--format", "list"])
        .assert()
        .success()
        .stdout("1\n2\n3\n4\n5\n");
}

#[test]
fn test_data_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("shop.toml"), DATA).unwrap();

    redeem(&temp)
        .args(["--data", "shop.toml", "eligible", "-u", "7", "--course", "11"])
        .args(["--format", "list"])
        .assert()
        .success()
        .stdout("101\n");

    redeem(&temp)
        .args(["--data", "shop.toml", "eligible", "-u", "7", "--course", "10"])
        .args(["--format", "list"])
        .assert()
        .success()
        .stdout("100\n");
}

#[test]
fn test_data_directory_from_config() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data/shop.toml"), DATA).unwrap();
    fs::write(
        temp.path().join(".redeem.toml"),
        "[data]\npath = \"data\"\n[defaults]\nuser = 7\n",
    )
    .unwrap();

    redeem(&temp)
        .args(["tokens", "--format", "list"])
        .assert()
        .success()
        .stdout("100\n101\n");
}

#[test]
fn test_env_overrides_default_user() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .env("REDEEM_DEFAULTS__USER", "1")
        .args(["eligible", "--course", "3", "--format", "list"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_init_local_then_config_get() {
    let temp = TempDir::new().unwrap();

    redeem(&temp)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(temp.path().join(".redeem.toml").exists());

    redeem(&temp)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    redeem(&temp)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout("table\n");
}

#[test]
fn test_quiet_flag_keeps_result_rows() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .args(["-q", "eligible", "-u", "1", "--course", "3", "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#3"))
        .stdout(predicate::str::contains("#1").not())
        .stdout(predicate::str::contains("Tokens user").not());
}

#[test]
fn test_quiet_flag_hides_empty_result_notice() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .args(["-q", "eligible", "-u", "2", "--course", "1", "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_flag() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .args(["-v", "eligible", "-u", "1", "--course", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn test_shell_completions() {
    let temp = TempDir::new().unwrap();
    redeem(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("redeem"));
}
