use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const RULE_GROUP_ARN: &str =
    "arn:aws:wafv2:us-east-1:123456789012:regional/rulegroup/bot-control/0f2c9d1e";

fn wafsync(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wafsync").unwrap();
    // keep config files and credentials of the host out of the run
    cmd.current_dir(dir.path())
        .env_remove("WAFSYNC_REGION")
        .env_remove("WAFSYNC_SCOPE")
        .env_remove("WAFSYNC_MAX_CONCURRENCY")
        .env("AWS_ACCESS_KEY_ID", "test")
        .env("AWS_SECRET_ACCESS_KEY", "test")
        .env("AWS_EC2_METADATA_DISABLED", "true");
    cmd
}

#[test]
fn test_help_lists_flags() {
    let dir = TempDir::new().unwrap();
    wafsync(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("RULE_GROUP_ARN"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--scope"));
}

#[test]
fn test_empty_rule_group_arn_is_fatal() {
    let dir = TempDir::new().unwrap();
    wafsync(&dir)
        .args(["", "--region", "us-east-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_malformed_rule_group_arn_is_fatal() {
    let dir = TempDir::new().unwrap();
    wafsync(&dir)
        .args(["rg-1-arn", "--region", "us-east-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Malformed identifier"));
}

#[test]
fn test_unknown_scope_is_rejected() {
    let dir = TempDir::new().unwrap();
    wafsync(&dir)
        .args([RULE_GROUP_ARN, "--region", "us-east-1", "--scope", "planetary"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("planetary"));
}

#[test]
fn test_invalid_config_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[execution]\npage_size = 500\n").unwrap();

    wafsync(&dir)
        .args([RULE_GROUP_ARN, "--region", "us-east-1", "--config"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("page_size"));
}

#[test]
fn test_zero_concurrency_is_fatal() {
    let dir = TempDir::new().unwrap();
    wafsync(&dir)
        .args([RULE_GROUP_ARN, "--region", "us-east-1", "--concurrency", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_concurrency"));
}
