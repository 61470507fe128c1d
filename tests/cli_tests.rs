use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn billbook_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("billbook"))
}

fn write_bills(config_path: &std::path::Path, bills: &str) {
    fs::write(config_path.join("bills.toml"), bills).unwrap();
}

#[test]
fn test_help() {
    billbook_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Minimal CLI trade bill book with overdue interest tracking",
        ));
}

#[test]
fn test_version() {
    billbook_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("billbook"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized bill book"));

    assert!(config_path.join("config.toml").exists());
}

#[test]
fn test_init_fails_if_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    // First init should succeed
    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    // Second init should fail
    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_list_without_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_list_empty() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bills recorded yet."));
}

#[test]
fn test_add_and_list() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    billbook_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "add",
            "--bill-no",
            "101",
            "--party",
            "Sharma Traders",
            "--amount",
            "15000",
            "--date",
            "01/04/2024",
            "--credit-days",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded BILL-"));

    // An old unreceipted bill is long past its credit window
    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("101"))
        .stdout(predicate::str::contains("Sharma Traders"))
        .stdout(predicate::str::contains("OVERDUE"))
        .stdout(predicate::str::contains("PRINCIPAL"))
        .stdout(predicate::str::contains("(=) OUTSTANDING"))
        .stdout(predicate::str::contains("Rs.15,000"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    billbook_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "add",
            "--bill-no",
            "101",
            "--party",
            "Sharma Traders",
            "--amount",
            "15000",
            "--date",
            "soon",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_add_rejects_zero_amount() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    billbook_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "add",
            "--bill-no",
            "101",
            "--party",
            "Sharma Traders",
            "--amount",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Amount must be greater than zero",
        ));
}

#[test]
fn test_receipt_and_interest_flow() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    write_bills(
        &config_path,
        r#"[counter]
last_number = 1
last_year = 2026

[[bills]]
id = "BILL-2026-0001"
bill_no = "101"
party = "Gupta Textiles"
bill_date = "01/01/2024"
net_amount = 10000.0
credit_days = 30
interest_paid = "No"
interest_rate = 12.0
"#,
    );

    // Receipt well past the credit window: interest is due
    billbook_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "receipt",
            "1",
            "--amount",
            "5000",
            "--date",
            "15/06/2024",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Recorded Rs.5000.00 receipt for BILL-2026-0001 (status: INT. PENDING)",
        ))
        .stdout(predicate::str::contains("Interest due:"));

    billbook_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "mark-interest-paid",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: SETTLED"));

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SETTLED"));
}

#[test]
fn test_clear_receipt() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    write_bills(
        &config_path,
        r#"[counter]
last_number = 1
last_year = 2026

[[bills]]
id = "BILL-2026-0001"
bill_no = "101"
party = "Gupta Textiles"
bill_date = "01/01/2024"
net_amount = 10000.0
credit_days = 30
rec_date = "15/06/2024"
rec_amount = 10000.0
interest_paid = "Yes"
interest_rate = 12.0
"#,
    );

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "clear-receipt", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cleared receipt from BILL-2026-0001",
        ));

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "clear-receipt", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No receipt recorded"));
}

#[test]
fn test_status_filter() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    write_bills(
        &config_path,
        r#"[counter]
last_number = 2
last_year = 2026

[[bills]]
id = "BILL-2026-0001"
bill_no = "101"
party = "Gupta Textiles"
bill_date = "01/01/2024"
net_amount = 10000.0
credit_days = 30
rec_date = "15/06/2024"
rec_amount = 10000.0
interest_paid = "Yes"
interest_rate = 12.0

[[bills]]
id = "BILL-2026-0002"
bill_no = "102"
party = "Verma Steel"
bill_date = "05/01/2024"
net_amount = 20000.0
credit_days = 30
interest_paid = "No"
interest_rate = 12.0
"#,
    );

    billbook_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "list",
            "--status",
            "settled",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gupta Textiles"))
        .stdout(predicate::str::contains("Verma Steel").not());

    billbook_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "list",
            "--status",
            "overdue",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verma Steel"))
        .stdout(predicate::str::contains("Gupta Textiles").not());

    billbook_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "list",
            "--status",
            "bogus",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status filter"));
}

#[test]
fn test_allocate_across_bills() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    write_bills(
        &config_path,
        r#"[counter]
last_number = 2
last_year = 2026

[[bills]]
id = "BILL-2026-0001"
bill_no = "101"
party = "Gupta Textiles"
bill_date = "01/01/2024"
net_amount = 10000.0
credit_days = 30
interest_paid = "No"
interest_rate = 12.0

[[bills]]
id = "BILL-2026-0002"
bill_no = "102"
party = "Verma Steel"
bill_date = "05/01/2024"
net_amount = 20000.0
credit_days = 30
interest_paid = "No"
interest_rate = 12.0
"#,
    );

    // 15000 against 10000 + 20000 of principal splits 1:2
    billbook_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "allocate",
            "--amount",
            "15000",
            "--date",
            "15/06/2024",
            "1",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Allocated Rs.15000.00 across 2 bills:"))
        .stdout(predicate::str::contains("BILL-2026-0002  Rs.10,000.00"))
        .stdout(predicate::str::contains("BILL-2026-0001  Rs.5,000.00"));

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show", "102"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Receipt:"))
        .stdout(predicate::str::contains("15/06/2024"));
}

#[test]
fn test_show_resolves_by_bill_no_and_id() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    write_bills(
        &config_path,
        r#"[counter]
last_number = 1
last_year = 2026

[[bills]]
id = "BILL-2026-0001"
bill_no = "101"
party = "Gupta Textiles"
bill_date = "01/01/2024"
net_amount = 10000.0
credit_days = 30
interest_paid = "No"
interest_rate = 12.0
"#,
    );

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show", "101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BILL-2026-0001"))
        .stdout(predicate::str::contains("Interest days:"));

    billbook_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "show",
            "BILL-2026-0001",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gupta Textiles"));

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bill index"));

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show", "BILL-9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_summary() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    write_bills(
        &config_path,
        r#"[counter]
last_number = 2
last_year = 2026

[[bills]]
id = "BILL-2026-0001"
bill_no = "101"
party = "Gupta Textiles"
bill_date = "01/01/2024"
net_amount = 10000.0
credit_days = 30
rec_date = "15/06/2024"
rec_amount = 10000.0
interest_paid = "Yes"
interest_rate = 12.0

[[bills]]
id = "BILL-2026-0002"
bill_no = "102"
party = "Verma Steel"
bill_date = "05/01/2024"
net_amount = 20000.0
credit_days = 30
interest_paid = "No"
interest_rate = 12.0
"#,
    );

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bill Book Summary"))
        .stdout(predicate::str::contains("Overdue:         1"))
        .stdout(predicate::str::contains("Settled:         1"))
        .stdout(predicate::str::contains("Outstanding:       Rs.20,000.00"));
}

#[test]
fn test_scan_cheque_unconfigured() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("billbook-config");

    billbook_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    let image_path = temp_dir.path().join("cheque.png");
    fs::write(&image_path, b"not really an image").unwrap();

    // The template config ships with no endpoint set
    billbook_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "scan-cheque",
            image_path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cheque scan endpoint not configured",
        ));
}
