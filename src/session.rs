//! Billing session: the boundary the interactive shell drives.
//!
//! A session owns the ledger for exactly one bill at a time and holds
//! the immutable catalog it validates against. No UI runtime leaks in
//! here; the shell is free to be stdin, a test harness, or anything
//! else that can call these methods.

use crate::catalog::Catalog;
use crate::error::{BillingError, Result};
use crate::ledger::{Ledger, LineItem};
use crate::money::Money;
use crate::render::{render, Bill};
use log::debug;

/// A single-user billing session over a fixed catalog.
///
/// Generating a bill clears the ledger, so the next items start a fresh
/// bill against the same catalog.
pub struct BillingSession {
    catalog: Catalog,
    ledger: Ledger,
}

impl BillingSession {
    /// Creates a session over an already-loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        BillingSession {
            catalog,
            ledger: Ledger::new(),
        }
    }

    /// Validates and appends one line item, returning the item added.
    pub fn add_line_item(&mut self, code: &str, quantity: i64) -> Result<LineItem> {
        let item = self.ledger.add(code, quantity, &self.catalog)?;
        Ok(item.clone())
    }

    /// Returns the current entries in insertion order.
    pub fn current_entries(&self) -> &[LineItem] {
        self.ledger.items()
    }

    /// Returns the running grand total.
    pub fn current_total(&self) -> Money {
        self.ledger.total()
    }

    /// Renders the current ledger into both bill formats and clears it.
    ///
    /// Fails with `EmptyLedger` when no items have been added, leaving
    /// the (empty) ledger as is.
    pub fn generate_bill(&mut self) -> Result<Bill> {
        if self.ledger.is_empty() {
            return Err(BillingError::EmptyLedger);
        }

        let bill = render(self.ledger.items(), self.ledger.total());
        debug!(
            "Generated bill with {} items totaling {}",
            self.ledger.len(),
            self.ledger.total()
        );
        self.ledger.clear();
        Ok(bill)
    }

    /// Discards all current entries without rendering.
    pub fn reset(&mut self) {
        self.ledger.clear();
    }

    /// Returns the catalog this session bills against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
