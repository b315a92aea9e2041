//! Session ledger of billed line items.
//!
//! The ledger is an insertion-ordered list: display and print order is
//! the order items were added. Every mutating operation is atomic, so a
//! failed add leaves the ledger exactly as it was.

use crate::catalog::Catalog;
use crate::error::{BillingError, Result};
use crate::money::Money;
use log::debug;

/// One priced, quantified product entry in a bill.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Normalized product code, guaranteed present in the catalog at add time.
    pub code: String,

    /// Product name as listed in the catalog.
    pub name: String,

    /// Unit price at add time.
    pub price: Money,

    /// Billed quantity, always positive.
    pub quantity: u32,

    /// `price × quantity`, computed once at add time.
    pub line_total: Money,
}

/// The ordered in-session collection of line items.
///
/// Re-adding a product code appends a separate line rather than
/// accumulating into the existing one.
#[derive(Debug, Default)]
pub struct Ledger {
    items: Vec<LineItem>,
}

impl Ledger {
    /// Creates a new empty ledger.
    pub fn new() -> Self {
        Ledger { items: Vec::new() }
    }

    /// Validates and appends a line item.
    ///
    /// The code is normalized (trimmed, uppercased) before lookup. Fails
    /// with `UnknownProduct` if the code is not in the catalog and with
    /// `InvalidQuantity` if the quantity is not a positive integer; in
    /// both cases the ledger is unchanged.
    pub fn add(&mut self, code: &str, quantity: i64, catalog: &Catalog) -> Result<&LineItem> {
        let code = code.trim().to_uppercase();

        let product = catalog
            .get(&code)
            .ok_or_else(|| BillingError::UnknownProduct(code.clone()))?;

        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(BillingError::InvalidQuantity(quantity))?;

        let line_total = product.price * quantity;
        self.items.push(LineItem {
            code: product.code.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
            line_total,
        });

        debug!(
            "Added {} x {} ({}) for {}",
            quantity, code, product.name, line_total
        );

        // Safety: an item was just pushed above
        Ok(self.items.last().expect("ledger is non-empty after push"))
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items have been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the grand total: the sum of all line totals, zero when empty.
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.line_total).sum()
    }

    /// Removes all line items so a new billing session starts fresh.
    pub fn clear(&mut self) {
        debug!("Clearing ledger with {} items", self.items.len());
        self.items.clear();
    }
}
