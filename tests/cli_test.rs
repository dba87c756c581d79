//! End-to-end tests running both binaries with piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_atm_balance_check_session() {
    let mut cmd = Command::cargo_bin("atm").unwrap();
    cmd.write_stdin("1234\n1\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance: $1000.00"))
        .stdout(predicate::str::contains(
            "Thank you for using the ATM. Goodbye!",
        ));
}

#[test]
fn test_atm_denies_wrong_pin_but_exits_cleanly() {
    let mut cmd = Command::cargo_bin("atm").unwrap();
    cmd.write_stdin("0000\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid PIN. Access denied."))
        .stdout(predicate::str::contains("ATM Menu:").not());
}

#[test]
fn test_atm_non_numeric_menu_input_is_fatal() {
    let mut cmd = Command::cargo_bin("atm").unwrap();
    cmd.write_stdin("1234\nbalance please\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_receipt_report_on_stdout() {
    let mut cmd = Command::cargo_bin("receipt").unwrap();
    cmd.write_stdin("Pen\n2.00\n3\nBook\n10.00\n1\ndone\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pen\t2.00\t3\t\t6.00"))
        .stdout(predicate::str::contains("Subtotal:\t\t\t\t16.00"))
        .stdout(predicate::str::contains("Tax:\t\t\t\t\t1.12"))
        .stdout(predicate::str::contains("Discount:\t\t\t\t-0.80"))
        .stdout(predicate::str::contains("Total:\t\t\t\t\t16.32"));
}

#[test]
fn test_receipt_saves_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("receipt.txt");

    let mut cmd = Command::cargo_bin("receipt").unwrap();
    cmd.write_stdin(format!("Pen\n2.00\n3\ndone\nyes\n{}\n", path.display()))
        .assert()
        .success();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("Receipt:\n"));
    assert!(saved.ends_with("Total:\t\t\t\t\t6.12\n"));
}

#[test]
fn test_receipt_non_numeric_price_is_fatal() {
    let mut cmd = Command::cargo_bin("receipt").unwrap();
    cmd.write_stdin("Pen\nfree\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
