//! ATM simulator CLI
//!
//! A single-account console ATM: one PIN attempt, then a numbered menu
//! for balance, deposit, withdraw, PIN change, and transaction history.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin atm
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::io;
use std::process;
use teller::{Account, Atm, Money, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let opening_balance: Money = "1000.00".parse()?;
    let account = Account::new("12345678", "1234", opening_balance);
    let mut atm = Atm::new(account);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    atm.run(&mut input, &mut output)
}
