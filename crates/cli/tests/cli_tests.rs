use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("zenlog").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("A quiet journal"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("zenlog").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_write_help() {
    let mut cmd = Command::cargo_bin("zenlog").unwrap();
    cmd.args(["write", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--owner").and(predicate::str::contains("--no-wait")));
}

#[test]
fn test_serve_without_api_key_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("zenlog").unwrap();
    cmd.arg("serve")
        .env_remove("ZENLOG_API_KEY")
        .env_remove("OPENAI_API_KEY")
        .env("ZENLOG_DB_PATH", dir.path().join("journal.db"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("ZENLOG_API_KEY"));
}

#[test]
fn test_thoughts_requires_owner() {
    let mut cmd = Command::cargo_bin("zenlog").unwrap();
    cmd.arg("thoughts").assert().failure().stderr(predicate::str::contains("--owner"));
}
