//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn nzwalks(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("nzwalks").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env_remove("DATABASE_URL");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    nzwalks(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let home = tempfile::tempdir().unwrap();
    nzwalks(home.path())
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--in-memory"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_migrate_requires_database_url() {
    let home = tempfile::tempdir().unwrap();
    nzwalks(home.path())
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_rejects_bad_config() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("nzwalks.toml");
    std::fs::write(&config, "[server]\nbind = 42\n").unwrap();

    nzwalks(home.path())
        .arg("serve")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid TOML"));
}
