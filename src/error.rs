//! Error types shared by both console programs.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for teller operations.
pub type Result<T> = std::result::Result<T, TellerError>;

/// Errors that can occur while running a session.
///
/// The first three variants are validation rejections: the session drivers
/// catch them at the call site, print the human-readable message, and keep
/// looping. The remaining variants are faults that abort the session.
#[derive(Error, Debug)]
pub enum TellerError {
    /// Deposit or withdrawal amount outside the accepted range
    #[error("invalid amount: {0}")]
    InvalidAmount(Money),

    /// Withdrawal larger than the available balance
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { available: Money, requested: Money },

    /// PIN did not match the stored one
    #[error("invalid PIN")]
    InvalidPin,

    /// Non-numeric text where a number was expected; fatal by contract
    #[error("malformed {expected} input: `{input}`")]
    MalformedInput {
        expected: &'static str,
        input: String,
    },

    /// Input stream ended while a prompt was waiting for a line
    #[error("input ended unexpectedly")]
    InputClosed,

    /// Failed to read from or write to a console stream or file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A monetary literal failed to parse at startup
    #[error("invalid monetary value: {0}")]
    Amount(#[from] rust_decimal::Error),
}
