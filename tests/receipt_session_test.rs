//! Scripted checkout sessions over in-memory streams.

use rust_decimal_macros::dec;
use std::io::Cursor;
use teller::{Checkout, Receipt};

/// Run a full checkout script with the default 7%/5% rates and return the
/// session plus its transcript.
fn run_checkout(script: &str) -> (Checkout, String) {
    let mut checkout = Checkout::new(Receipt::new(dec!(0.07), dec!(0.05)));
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    checkout.run(&mut input, &mut output).unwrap();
    (checkout, String::from_utf8(output).unwrap())
}

#[test]
fn test_pen_and_book_scenario() {
    // Items [("Pen", 2.00, 3), ("Book", 10.00, 1)] at 7% tax, 5% discount
    let (checkout, transcript) = run_checkout("Pen\n2.00\n3\nBook\n10.00\n1\ndone\nno\n");

    assert_eq!(checkout.receipt().subtotal().to_string(), "16.00");
    assert_eq!(checkout.receipt().tax().to_string(), "1.12");
    assert_eq!(checkout.receipt().discount().to_string(), "0.80");
    assert_eq!(checkout.receipt().total().to_string(), "16.32");

    assert!(transcript.contains("Enter price of Pen:"));
    assert!(transcript.contains("Enter quantity of Book:"));
    assert!(transcript.contains(
        "Receipt:\n\
         Item Name\tPrice\tQuantity\tTotal\n\
         Pen\t2.00\t3\t\t6.00\n\
         Book\t10.00\t1\t\t10.00\n\
         Subtotal:\t\t\t\t16.00\n\
         Tax:\t\t\t\t\t1.12\n\
         Discount:\t\t\t\t-0.80\n\
         Total:\t\t\t\t\t16.32\n"
    ));
}

#[test]
fn test_screen_and_file_reports_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("receipt.txt");
    let script = format!("Pen\n2.00\n3\ndone\nyes\n{}\n", path.display());

    let (checkout, transcript) = run_checkout(&script);

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved, checkout.receipt().render());
    assert!(transcript.contains(&saved));
}

#[test]
fn test_declining_save_writes_nothing() {
    let (_, transcript) = run_checkout("Pen\n2.00\n3\ndone\nno\n");

    assert!(!transcript.contains("Enter filename:"));
}

#[test]
fn test_sentinel_and_yes_are_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("receipt.txt");
    let script = format!("Pen\n2.00\n3\nDoNe\nYeS\n{}\n", path.display());

    run_checkout(&script);

    assert!(path.exists());
}

#[test]
fn test_failed_save_reports_and_completes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("receipt.txt");
    let script = format!("done\nyes\n{}\n", path.display());

    let (_, transcript) = run_checkout(&script);

    assert!(transcript.contains("Error writing to file:"));
    assert!(!path.exists());
}
