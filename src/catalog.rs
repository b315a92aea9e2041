//! Product catalog loading and lookup.
//!
//! The catalog is read once at startup from a CSV file and treated as
//! immutable for the rest of the process. Lookup is by normalized
//! (uppercase) product code.

use crate::error::{BillingError, Result};
use crate::money::Money;
use csv::{ReaderBuilder, Trim};
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Raw catalog row as read from CSV.
///
/// Price is parsed from a string field so malformed values can be
/// reported with their row number instead of failing deep inside serde.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    product_code: String,
    product_name: String,
    price: String,
}

impl ProductRecord {
    /// Validates the raw row and converts it into a `Product`.
    fn into_product(self, row: usize) -> Result<Product> {
        let code = self.product_code.trim().to_uppercase();
        if code.is_empty() {
            return Err(BillingError::Catalog {
                row,
                message: "empty product code".to_string(),
            });
        }

        let name = self.product_name.trim().to_string();
        if name.is_empty() {
            return Err(BillingError::Catalog {
                row,
                message: format!("empty product name for code '{}'", code),
            });
        }

        let price = Money::from_str(&self.price).map_err(|e| BillingError::Catalog {
            row,
            message: format!("non-numeric price '{}': {}", self.price.trim(), e),
        })?;
        if price.is_negative() {
            return Err(BillingError::Catalog {
                row,
                message: format!("negative price '{}' for code '{}'", price, code),
            });
        }

        Ok(Product { code, name, price })
    }
}

/// A single catalog entry. Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Normalized (uppercase) product code, unique within the catalog.
    pub code: String,

    /// Human-readable product name.
    pub name: String,

    /// Unit price, non-negative.
    pub price: Money,
}

/// The fixed code → product reference table.
///
/// Built once from a CSV file with header `product_code,product_name,price`.
/// Duplicate codes resolve last-write-wins; the earlier row is logged and
/// discarded.
#[derive(Debug, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    /// Loads the catalog from a CSV file on disk.
    ///
    /// Any I/O failure, CSV syntax error, or invalid row is fatal: the
    /// process cannot bill against a partial catalog.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads the catalog from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut products = HashMap::new();

        for (row_idx, result) in csv_reader.deserialize::<ProductRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row
            let product = result?.into_product(row_num)?;

            if let Some(previous) = products.insert(product.code.clone(), product) {
                warn!(
                    "Row {}: Duplicate product code '{}', keeping later row",
                    row_num, previous.code
                );
            }
        }

        Ok(Catalog { products })
    }

    /// Looks up a product by its normalized (uppercase) code.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// Returns the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
