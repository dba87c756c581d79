//! Interactive ATM session driver.
//!
//! Gates access behind a single PIN attempt, then loops on a numbered text
//! menu, dispatching each selection to the bound [`Account`]. The driver is
//! generic over its input and output streams so tests can run entire
//! sessions against in-memory buffers.

use crate::account::Account;
use crate::error::{Result, TellerError};
use crate::money::Money;
use crate::prompt::{prompt_line, prompt_parse};
use log::{debug, warn};
use std::io::{BufRead, Write};

const MENU: &str = "\nATM Menu:\n\
                    1. Check Balance\n\
                    2. Deposit\n\
                    3. Withdraw\n\
                    4. Change PIN\n\
                    5. Transaction History\n\
                    6. Exit\n";

/// One validated menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckBalance,
    Deposit,
    Withdraw,
    ChangePin,
    History,
    Exit,
}

impl MenuChoice {
    /// Maps a menu number to a choice; out-of-range numbers are `None`
    /// and re-prompt rather than abort.
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(MenuChoice::CheckBalance),
            2 => Some(MenuChoice::Deposit),
            3 => Some(MenuChoice::Withdraw),
            4 => Some(MenuChoice::ChangePin),
            5 => Some(MenuChoice::History),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// The ATM session bound to one account.
pub struct Atm {
    account: Account,
}

impl Atm {
    /// Creates an ATM bound to the given account.
    pub fn new(account: Account) -> Self {
        Atm { account }
    }

    /// Returns the bound account.
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Runs the full session: one PIN attempt, then the menu loop.
    ///
    /// A wrong PIN prints the denial message and ends the session cleanly.
    /// Malformed numeric input is a fatal fault and propagates as an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let entered = prompt_line(input, output, "Enter your PIN: ")?;
        if !self.account.validate_pin(&entered) {
            warn!("PIN validation failed for account {}", self.account.number());
            writeln!(output, "Invalid PIN. Access denied.")?;
            return Ok(());
        }

        debug!("session opened for account {}", self.account.number());
        self.menu_loop(input, output)
    }

    /// The read-dispatch-repeat loop; returns when the user exits.
    fn menu_loop<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            output.write_all(MENU.as_bytes())?;
            let selection: i64 =
                prompt_parse(input, output, "Select an option: ", "menu choice")?;

            let choice = match MenuChoice::from_selection(selection) {
                Some(choice) => choice,
                None => {
                    debug!("invalid menu selection {}", selection);
                    writeln!(output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            match choice {
                MenuChoice::CheckBalance => {
                    writeln!(output, "Current Balance: ${}", self.account.balance())?;
                }
                MenuChoice::Deposit => self.handle_deposit(input, output)?,
                MenuChoice::Withdraw => self.handle_withdraw(input, output)?,
                MenuChoice::ChangePin => self.handle_change_pin(input, output)?,
                MenuChoice::History => self.handle_history(output)?,
                MenuChoice::Exit => {
                    debug!("session closed for account {}", self.account.number());
                    writeln!(output, "Thank you for using the ATM. Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    fn handle_deposit<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let amount: Money =
            prompt_parse(input, output, "Enter amount to deposit: ", "amount")?;

        match self.account.deposit(amount) {
            Ok(()) => writeln!(output, "Successfully deposited: ${}", amount)?,
            Err(TellerError::InvalidAmount(_)) => {
                writeln!(output, "Invalid deposit amount.")?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn handle_withdraw<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let amount: Money =
            prompt_parse(input, output, "Enter amount to withdraw: ", "amount")?;

        match self.account.withdraw(amount) {
            Ok(()) => writeln!(output, "Successfully withdrew: ${}", amount)?,
            Err(TellerError::InvalidAmount(_)) | Err(TellerError::InsufficientFunds { .. }) => {
                writeln!(output, "Insufficient funds or invalid amount.")?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn handle_change_pin<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        let current = prompt_line(input, output, "Enter current PIN: ")?;
        let new = prompt_line(input, output, "Enter new PIN: ")?;

        match self.account.change_pin(&current, &new) {
            Ok(()) => writeln!(output, "PIN successfully changed.")?,
            Err(TellerError::InvalidPin) => writeln!(output, "Invalid current PIN.")?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn handle_history<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.account.history().is_empty() {
            writeln!(output, "No transactions found.")?;
            return Ok(());
        }

        writeln!(output, "Transaction History:")?;
        for transaction in self.account.history() {
            writeln!(output, "{}", transaction)?;
        }
        Ok(())
    }
}
