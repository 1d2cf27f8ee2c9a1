//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn inventory() -> Command {
    let mut cmd = Command::cargo_bin("inventory").unwrap();
    // Keep the developer's environment and .env out of the picture
    cmd.current_dir(std::env::temp_dir())
        .env_remove("DATABASE_URL")
        .env_remove("POSTGRESQL_URL")
        .env_remove("POSTGRES_URL");
    cmd
}

#[test]
fn test_help_lists_commands() {
    inventory()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_serve_help() {
    inventory()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--retry-attempts"));
}

#[test]
fn test_export_rooms_help() {
    inventory()
        .args(["export", "rooms", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum capacity"));
}

#[test]
fn test_init_db_without_database_url_fails() {
    inventory()
        .arg("init-db")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No database configured"));
}

#[test]
fn test_export_unreachable_database_fails() {
    inventory()
        .args([
            "export",
            "--database-url",
            "postgres://inventory@127.0.0.1:1/inventory",
            "--retry-attempts",
            "1",
            "rooms",
        ])
        .timeout(std::time::Duration::from_secs(60))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Database unavailable"));
}
