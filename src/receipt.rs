//! Receipt model: ordered line items and derived totals.
//!
//! Totals are recomputed from the item list on every call, so they can
//! never go stale. One renderer produces the report for both the screen
//! and the saved file.

use crate::error::Result;
use crate::money::Money;
use log::debug;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One purchased line item. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display label; not required to be unique.
    name: String,

    /// Unit price, non-negative.
    price: Money,

    /// Unit count, may be zero.
    quantity: u32,
}

impl Item {
    /// Creates a line item.
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Item {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns the display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns the unit count.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `price * quantity`.
    pub fn total_price(&self) -> Money {
        self.price * self.quantity
    }
}

/// A receipt accumulating line items under fixed tax and discount rates.
///
/// Item insertion order is display order. Subtotal, tax, discount, and
/// total are pure functions of the current item list.
#[derive(Debug, Clone)]
pub struct Receipt {
    items: Vec<Item>,
    tax_rate: Decimal,
    discount_rate: Decimal,
}

impl Receipt {
    /// Creates an empty receipt with the given fractional rates.
    pub fn new(tax_rate: Decimal, discount_rate: Decimal) -> Self {
        Receipt {
            items: Vec::new(),
            tax_rate,
            discount_rate,
        }
    }

    /// Appends an item. No dedup, no merging of identical names.
    pub fn add_item(&mut self, item: Item) {
        debug!(
            "added item `{}`: {} x {}",
            item.name(),
            item.price(),
            item.quantity()
        );
        self.items.push(item);
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::ZERO, |sum, item| sum + item.total_price())
    }

    /// `subtotal * tax_rate`, rounded half-to-even at 2 decimals.
    pub fn tax(&self) -> Money {
        self.subtotal().apply_rate(self.tax_rate)
    }

    /// `subtotal * discount_rate`, rounded half-to-even at 2 decimals.
    pub fn discount(&self) -> Money {
        self.subtotal().apply_rate(self.discount_rate)
    }

    /// `subtotal + tax - discount`.
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax() - self.discount()
    }

    /// Writes the tab-aligned report to any writer.
    ///
    /// This is the single source of the receipt layout; the on-screen
    /// report and the saved file are byte-identical.
    pub fn write_report<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "Receipt:")?;
        writeln!(writer, "Item Name\tPrice\tQuantity\tTotal")?;
        for item in &self.items {
            writeln!(
                writer,
                "{}\t{}\t{}\t\t{}",
                item.name(),
                item.price(),
                item.quantity(),
                item.total_price()
            )?;
        }
        writeln!(writer, "Subtotal:\t\t\t\t{}", self.subtotal())?;
        writeln!(writer, "Tax:\t\t\t\t\t{}", self.tax())?;
        writeln!(writer, "Discount:\t\t\t\t-{}", self.discount())?;
        writeln!(writer, "Total:\t\t\t\t\t{}", self.total())?;
        Ok(())
    }

    /// Renders the report to a string.
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        self.write_report(&mut buffer)
            .expect("writing to an in-memory buffer cannot fail");
        String::from_utf8(buffer).expect("report is valid UTF-8")
    }

    /// Writes the report to a newly created (or truncated) file.
    ///
    /// The handle is closed when this returns, on success and failure
    /// alike. No atomic-rename guarantee; a failed write may leave a
    /// partial file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path.as_ref())?;
        self.write_report(&mut file)?;
        file.flush()?;
        debug!("receipt saved to {}", path.as_ref().display());
        Ok(())
    }
}
