//! # Teller
//!
//! Two small console banking demos sharing one library:
//!
//! - an **ATM simulator**: a single hardcoded account behind a one-shot
//!   PIN gate, driven by a numbered text menu (balance, deposit,
//!   withdraw, PIN change, history)
//! - a **receipt builder**: collects line items from the console,
//!   computes subtotal/tax/discount/total, prints a tab-aligned report,
//!   and optionally writes it to a file
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: monetary amounts carry exactly 2 decimal
//!   places via `rust_decimal`; rate application rounds half-to-even
//! - **Stream-generic sessions**: both interactive loops run over plain
//!   `BufRead`/`Write`, so whole sessions are testable in memory
//! - **Fatal malformed input**: non-numeric text where a number is
//!   expected aborts the session instead of re-prompting
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use teller::{Account, Atm, Money};
//!
//! let account = Account::new("12345678", "1234", "1000.00".parse::<Money>().unwrap());
//! let mut atm = Atm::new(account);
//!
//! let mut input = Cursor::new("1234\n1\n6\n");
//! let mut output = Vec::new();
//! atm.run(&mut input, &mut output).unwrap();
//!
//! let transcript = String::from_utf8(output).unwrap();
//! assert!(transcript.contains("Current Balance: $1000.00"));
//! ```

pub mod account;
pub mod atm;
pub mod checkout;
pub mod error;
pub mod money;
pub mod prompt;
pub mod receipt;

pub use account::{Account, Transaction, TxKind};
pub use atm::{Atm, MenuChoice};
pub use checkout::Checkout;
pub use error::{Result, TellerError};
pub use money::Money;
pub use receipt::{Item, Receipt};
