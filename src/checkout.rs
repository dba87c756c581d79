//! Interactive receipt-builder session driver.
//!
//! Collects line items until the "done" sentinel, prints the report, and
//! optionally saves it to a file. Generic over its streams, like
//! [`Atm`](crate::atm::Atm).

use crate::error::Result;
use crate::money::Money;
use crate::prompt::{prompt_line, prompt_parse};
use crate::receipt::{Item, Receipt};
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Sentinel item name ending collection, matched case-insensitively.
const DONE: &str = "done";

/// The checkout session filling one receipt.
pub struct Checkout {
    receipt: Receipt,
}

impl Checkout {
    /// Creates a checkout session around an (usually empty) receipt.
    pub fn new(receipt: Receipt) -> Self {
        Checkout { receipt }
    }

    /// Returns the underlying receipt.
    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    /// Runs the full session: collect items, print the report, offer to
    /// save it.
    ///
    /// Malformed price or quantity input is a fatal fault and propagates
    /// as an error. A failed file save is reported on the output stream
    /// and does not abort the session.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        self.collect_items(input, output)?;

        self.receipt.write_report(output)?;

        let answer = prompt_line(
            input,
            output,
            "Do you want to save the receipt to a file? (yes/no)\n",
        )?;
        if answer.eq_ignore_ascii_case("yes") {
            let filename = prompt_line(input, output, "Enter filename:\n")?;
            if let Err(e) = self.receipt.save_to_file(&filename) {
                warn!("saving receipt to `{}` failed: {}", filename, e);
                writeln!(output, "Error writing to file: {}", e)?;
            }
        }

        Ok(())
    }

    /// Reads (name, price, quantity) triples until the sentinel.
    fn collect_items<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            let name = prompt_line(
                input,
                output,
                "Enter item name (or type 'done' to finish):\n",
            )?;
            if name.eq_ignore_ascii_case(DONE) {
                debug!("item collection finished with {} items", self.receipt.items().len());
                return Ok(());
            }

            let price: Money = prompt_parse(
                input,
                output,
                &format!("Enter price of {}:\n", name),
                "price",
            )?;
            let quantity: u32 = prompt_parse(
                input,
                output,
                &format!("Enter quantity of {}:\n", name),
                "quantity",
            )?;

            self.receipt.add_item(Item::new(name, price, quantity));
        }
    }
}
