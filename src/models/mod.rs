//! Core data models for pennybook
//!
//! This module contains the data structures that represent the tracker
//! domain: transactions, categories, and budget caps.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::Budget;
pub use category::Category;
pub use ids::{CategoryId, TransactionId};
pub use money::Money;
pub use transaction::{NewTransaction, Transaction, TransactionKind, TransactionPatch};
