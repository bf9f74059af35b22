//! Budget utilization service
//!
//! Per-category spend, budget utilization, and the expense breakdown behind
//! category charts. A category's "spend" is only ever its expense side:
//! income recorded against a category contributes zero to these views.

use std::collections::HashMap;

use crate::error::Result;
use crate::models::{CategoryId, Money};
use crate::store::Store;

/// A category's spend measured against its cap
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    /// Expense total for the category
    pub total: Money,
    /// The cap from the budget table, zero when no cap is set
    pub budget: Money,
    /// `total / budget` as a percentage; zero when no positive cap exists
    pub percentage: f64,
}

/// Service for per-category budget views
pub struct BudgetService<'a> {
    store: &'a Store,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Sum of expense amounts recorded against `category_id`
    ///
    /// Income in the category contributes zero by design.
    pub fn category_total(&self, category_id: &CategoryId) -> Result<Money> {
        let transactions = self.store.ledger()?.list()?;
        Ok(transactions
            .iter()
            .filter(|t| t.category_id == *category_id && t.kind.is_expense())
            .map(|t| t.amount)
            .sum())
    }

    /// The category's spend measured against its cap
    ///
    /// The percentage is guarded to zero when no positive cap is set; there
    /// is no division-by-zero failure path.
    pub fn budget_status(&self, category_id: &CategoryId) -> Result<BudgetStatus> {
        let total = self.category_total(category_id)?;
        let budget = self
            .store
            .budgets()?
            .get(category_id)?
            .map(|b| b.amount)
            .unwrap_or(Money::zero());

        let percentage = if budget.is_positive() {
            (total.to_f64() / budget.to_f64()) * 100.0
        } else {
            0.0
        };

        Ok(BudgetStatus {
            total,
            budget,
            percentage,
        })
    }

    /// Expense totals grouped by category
    ///
    /// Covers every category with at least one expense transaction; income
    /// never appears. Dangling category references group like any other id.
    pub fn transactions_by_category(&self) -> Result<HashMap<CategoryId, Money>> {
        let transactions = self.store.ledger()?.list()?;

        let mut totals: HashMap<CategoryId, Money> = HashMap::new();
        for txn in transactions.iter().filter(|t| t.kind.is_expense()) {
            *totals.entry(txn.category_id.clone()).or_default() += txn.amount;
        }
        Ok(totals)
    }
}
