//! End-to-end CLI tests
//!
//! Each test runs the binary against an isolated data directory via
//! `GARAGE_CLI_DATA_DIR`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn garage(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("garage").unwrap();
    cmd.env("GARAGE_CLI_DATA_DIR", dir.path());
    cmd
}

#[test]
fn init_seeds_starter_data() {
    let dir = TempDir::new().unwrap();

    garage(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    garage(&dir)
        .args(["inventory", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Engine Oil 5W-40"))
        .stdout(predicate::str::contains("Brake Pads (Front)"));

    garage(&dir)
        .args(["customer", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rahul Sharma"));

    garage(&dir)
        .args(["mechanic", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Senior Mechanic"));
}

#[test]
fn record_service_deducts_stock_and_appends_history() {
    let dir = TempDir::new().unwrap();

    garage(&dir)
        .args([
            "inventory", "add", "Engine Oil 5W-40",
            "--supplier", "Castrol",
            "--price", "850",
            "--quantity", "5",
        ])
        .assert()
        .success();

    garage(&dir)
        .args([
            "customer", "register", "Priya Patel",
            "--phone", "9811112222",
            "--vehicle-number", "MH-12-CD-5678",
            "--model", "Maruti Swift",
        ])
        .assert()
        .success();

    garage(&dir)
        .args([
            "service", "record", "Priya Patel", "MH-12-CD-5678",
            "--mechanic", "Raju Kumar",
            "--charge", "2000",
            "--part", "Engine Oil 5W-40:2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded service"));

    // 5 - 2 = 3 in stock
    garage(&dir)
        .args(["inventory", "show", "Engine Oil 5W-40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("In Stock:   3"));

    garage(&dir)
        .args(["service", "history", "Priya Patel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("General Service"));
}

#[test]
fn record_service_fails_on_insufficient_stock() {
    let dir = TempDir::new().unwrap();

    garage(&dir)
        .args([
            "inventory", "add", "Brake Pads (Front)",
            "--supplier", "Bosch",
            "--price", "1200",
            "--quantity", "1",
        ])
        .assert()
        .success();

    garage(&dir)
        .args([
            "customer", "register", "Priya Patel",
            "--phone", "9811112222",
            "--vehicle-number", "MH-12-CD-5678",
            "--model", "Maruti Swift",
        ])
        .assert()
        .success();

    garage(&dir)
        .args([
            "service", "record", "Priya Patel", "MH-12-CD-5678",
            "--mechanic", "Raju Kumar",
            "--charge", "500",
            "--part", "Brake Pads (Front):2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient stock"));

    // Stock untouched after the failed job
    garage(&dir)
        .args(["inventory", "show", "Brake Pads (Front)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("In Stock:   1"));
}

#[test]
fn strict_flag_rejects_unknown_parts() {
    let dir = TempDir::new().unwrap();

    garage(&dir)
        .args([
            "customer", "register", "Priya Patel",
            "--phone", "9811112222",
            "--vehicle-number", "MH-12-CD-5678",
            "--model", "Maruti Swift",
        ])
        .assert()
        .success();

    garage(&dir)
        .args([
            "service", "record", "Priya Patel", "MH-12-CD-5678",
            "--mechanic", "Raju Kumar",
            "--charge", "500",
            "--part", "No Such Part:1",
            "--strict",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    // Without --strict the unknown line is skipped and the job succeeds
    garage(&dir)
        .args([
            "service", "record", "Priya Patel", "MH-12-CD-5678",
            "--mechanic", "Raju Kumar",
            "--charge", "500",
            "--part", "No Such Part:1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping unknown part"));
}

#[test]
fn financial_report_covers_recorded_service() {
    let dir = TempDir::new().unwrap();

    garage(&dir)
        .args([
            "customer", "register", "Priya Patel",
            "--phone", "9811112222",
            "--vehicle-number", "MH-12-CD-5678",
            "--model", "Maruti Swift",
        ])
        .assert()
        .success();

    garage(&dir)
        .args([
            "service", "record", "Priya Patel", "MH-12-CD-5678",
            "--mechanic", "Raju Kumar",
            "--charge", "2000",
            "--date", "2025-01-10",
        ])
        .assert()
        .success();

    // Labor only: 2000 + 18% GST = 2360
    garage(&dir)
        .args(["report", "financial", "2025-01-10", "2025-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Services Completed: 1"))
        .stdout(predicate::str::contains("2360.00"));
}

#[test]
fn user_create_and_login() {
    let dir = TempDir::new().unwrap();

    garage(&dir)
        .args([
            "user", "create", "admin",
            "--password", "admin123",
            "--role", "admin",
            "--name", "Admin User",
        ])
        .assert()
        .success();

    garage(&dir)
        .args(["user", "login", "admin", "--password", "admin123", "--role", "admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Admin User"));

    garage(&dir)
        .args(["user", "login", "admin", "--password", "wrong", "--role", "admin"])
        .assert()
        .failure();
}

#[test]
fn dashboard_runs_on_empty_data() {
    let dir = TempDir::new().unwrap();

    garage(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workshop Dashboard"));
}
