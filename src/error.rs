//! Error types for the billing engine.

use thiserror::Error;

/// Result type alias for billing operations
pub type Result<T> = std::result::Result<T, BillingError>;

/// Errors that can occur during a billing session.
#[derive(Error, Debug)]
pub enum BillingError {
    /// Failed to read the catalog or write a bill artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error while reading the catalog
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid catalog row (empty fields, bad price). Fatal at startup.
    #[error("Invalid catalog row {row}: {message}")]
    Catalog { row: usize, message: String },

    /// Product code not present in the catalog
    #[error("Unknown product code '{0}'")]
    UnknownProduct(String),

    /// Quantity was zero, negative, or out of range
    #[error("Invalid quantity {0}: must be a positive integer")]
    InvalidQuantity(i64),

    /// Attempted to generate a bill with no line items
    #[error("Cannot generate a bill: no items have been added")]
    EmptyLedger,

    /// Missing catalog file argument
    #[error("Missing catalog file argument. Usage: billing-engine <catalog.csv>")]
    MissingArgument,
}
