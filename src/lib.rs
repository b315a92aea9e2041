//! # Billing Engine
//!
//! An interactive billing tool: products are looked up in a fixed
//! CSV catalog, accumulated into an ordered ledger, and rendered as a
//! bill in two formats (plain text and a paginated fixed-font document).
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: monetary values use `rust_decimal`, never floats
//! - **Immutable catalog**: loaded once, passed by reference, never reloaded
//! - **Atomic mutations**: a failed add leaves the ledger untouched
//! - **Deterministic rendering**: identical entries yield byte-identical bills
//!
//! ## Example
//!
//! ```
//! use billing_engine::{BillingSession, Catalog};
//! use std::io::Cursor;
//!
//! let csv = "product_code,product_name,price\nA1,Sparkler,10\n";
//! let catalog = Catalog::from_reader(Cursor::new(csv)).unwrap();
//!
//! let mut session = BillingSession::new(catalog);
//! session.add_line_item("A1", 3).unwrap();
//! let bill = session.generate_bill().unwrap();
//! assert!(bill.text.ends_with("TOTAL: 30\n"));
//! ```

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod render;
pub mod session;

pub use catalog::{Catalog, Product};
pub use error::{BillingError, Result};
pub use ledger::{Ledger, LineItem};
pub use money::Money;
pub use render::{render, Bill, BillArtifacts};
pub use session::BillingSession;
