//! Bank account model and operations.
//!
//! A single account holds a balance and an append-only transaction history.

use crate::error::{Result, TellerError};
use crate::money::Money;
use log::debug;
use std::fmt;

/// The kind of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    /// Funds credited to the account.
    Deposit,

    /// Funds debited from the account.
    Withdrawal,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Deposit => write!(f, "Deposit"),
            TxKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// An immutable record of one successful deposit or withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    /// Whether funds were credited or debited.
    pub kind: TxKind,

    /// The positive amount moved.
    pub amount: Money,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transaction: {}, Amount: ${}", self.kind, self.amount)
    }
}

/// A single user's bank account.
///
/// # Invariants
///
/// - `balance` is only mutated through [`deposit`](Account::deposit) and
///   [`withdraw`](Account::withdraw); each appends exactly one transaction
///   on success and none on rejection
/// - `balance` never goes negative: withdrawals above the balance are
///   rejected
/// - the transaction history preserves insertion order
#[derive(Debug, Clone)]
pub struct Account {
    /// Immutable account identifier.
    number: String,

    /// Current PIN; compared by exact string equality.
    pin: String,

    /// Current balance, never negative.
    balance: Money,

    /// Append-only transaction log in insertion order.
    history: Vec<Transaction>,
}

impl Account {
    /// Creates an account with the given number, PIN, and opening balance.
    pub fn new(number: impl Into<String>, pin: impl Into<String>, opening_balance: Money) -> Self {
        Account {
            number: number.into(),
            pin: pin.into(),
            balance: opening_balance,
            history: Vec::new(),
        }
    }

    /// Returns the account identifier.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Returns the transaction history in insertion order.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Checks a candidate PIN against the stored one.
    ///
    /// Exact string equality; no lockout, no attempt counting.
    pub fn validate_pin(&self, candidate: &str) -> bool {
        self.pin == candidate
    }

    /// Deposits funds into the account.
    ///
    /// Accepts only strictly positive amounts; there is no upper bound.
    /// On success the balance increases by `amount` and one `Deposit`
    /// transaction is appended. Rejection leaves the account unchanged.
    pub fn deposit(&mut self, amount: Money) -> Result<()> {
        if !amount.is_positive() {
            debug!("rejected deposit of {}: non-positive amount", amount);
            return Err(TellerError::InvalidAmount(amount));
        }

        self.balance += amount;
        self.history.push(Transaction {
            kind: TxKind::Deposit,
            amount,
        });
        debug!("deposited {} into account {}", amount, self.number);
        Ok(())
    }

    /// Withdraws funds from the account.
    ///
    /// Accepts only `0 < amount <= balance`. On success the balance
    /// decreases by `amount` and one `Withdrawal` transaction is appended.
    /// Rejection leaves the account unchanged.
    pub fn withdraw(&mut self, amount: Money) -> Result<()> {
        if !amount.is_positive() {
            debug!("rejected withdrawal of {}: non-positive amount", amount);
            return Err(TellerError::InvalidAmount(amount));
        }

        if amount > self.balance {
            debug!(
                "rejected withdrawal of {}: only {} available",
                amount, self.balance
            );
            return Err(TellerError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;
        self.history.push(Transaction {
            kind: TxKind::Withdrawal,
            amount,
        });
        debug!("withdrew {} from account {}", amount, self.number);
        Ok(())
    }

    /// Replaces the PIN if `old_pin` matches the stored one.
    ///
    /// No format or strength constraint applies to `new_pin`. On failure
    /// the PIN is unchanged.
    pub fn change_pin(&mut self, old_pin: &str, new_pin: &str) -> Result<()> {
        if !self.validate_pin(old_pin) {
            debug!("rejected PIN change for account {}", self.number);
            return Err(TellerError::InvalidPin);
        }

        self.pin = new_pin.to_string();
        debug!("PIN changed for account {}", self.number);
        Ok(())
    }
}
