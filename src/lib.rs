//! pennybook - In-memory ledger store and aggregation engine
//!
//! This library provides the core of a personal finance tracker: the store
//! holding transactions, categories, and budget caps, together with the
//! derived-view computations every display surface consumes. Presentation
//! concerns (rendering, routing, input validation, currency and date
//! formatting) live in collaborators that call into this core; they own no
//! state of their own.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budget caps)
//! - `store`: The in-memory store (ledger, budget table, catalog, seed data)
//! - `services`: Read-only aggregation over the store
//!
//! # Example
//!
//! ```rust
//! use pennybook::models::{Money, NewTransaction, TransactionKind};
//! use pennybook::services::SummaryService;
//! use pennybook::store::{SeedData, Store};
//!
//! # fn main() -> pennybook::Result<()> {
//! let store = Store::open(SeedData::builtin())?;
//!
//! store.ledger()?.add(NewTransaction::new(
//!     "Bus ticket",
//!     Money::from_cents(275),
//!     "transport",
//!     TransactionKind::Expense,
//! ))?;
//!
//! let summary = SummaryService::new(&store);
//! let balance = summary.net_balance()?;
//! # let _ = balance;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use error::{Error, Result};
pub use store::Store;
