//! Aggregation services for pennybook
//!
//! Pure read-only computations over the store: totals and balances, budget
//! utilization, recency views, and category breakdowns. Nothing here mutates
//! state, and every call recomputes from the current ledger/budget/catalog
//! contents, so a read immediately after a write observes it. Recompute-on-
//! read is fine at the small ledger sizes this core targets; a higher-
//! throughput port could maintain incremental indices instead.

pub mod budget;
pub mod summary;

pub use budget::{BudgetService, BudgetStatus};
pub use summary::{SummaryService, DEFAULT_RECENT_LIMIT};
