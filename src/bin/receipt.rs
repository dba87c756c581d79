//! Receipt builder CLI
//!
//! Collects line items from the console until "done", prints a
//! tab-aligned receipt with subtotal/tax/discount/total, and optionally
//! saves it to a file.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin receipt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use rust_decimal::Decimal;
use std::io;
use std::process;
use teller::{Checkout, Receipt, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // 7% tax rate, 5% discount rate
    let receipt = Receipt::new(Decimal::new(7, 2), Decimal::new(5, 2));
    let mut checkout = Checkout::new(receipt);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    checkout.run(&mut input, &mut output)
}
