//! Budget table
//!
//! Maps each category to at most one spending cap. Writing an existing
//! category replaces its amount in place, preserving the row's position;
//! rows are never deleted through the public contract.

use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::models::{Budget, CategoryId, Money};

/// The mapping from category to its spending cap
pub struct BudgetTable {
    /// Row order is first-write order; upserts keep positions stable
    rows: RwLock<Vec<Budget>>,
}

impl BudgetTable {
    /// Create an empty budget table
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Replace the table contents with seeded rows
    pub(crate) fn seed(&self, budgets: Vec<Budget>) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| Error::Store(format!("Failed to acquire write lock: {}", e)))?;

        *rows = budgets;
        Ok(())
    }

    /// Set the cap for a category
    ///
    /// Replaces the amount in place when a row exists, otherwise appends a
    /// new row. Amount positivity is the caller's responsibility.
    pub fn upsert(&self, category_id: impl Into<CategoryId>, amount: Money) -> Result<()> {
        let category_id = category_id.into();

        let mut rows = self
            .rows
            .write()
            .map_err(|e| Error::Store(format!("Failed to acquire write lock: {}", e)))?;

        match rows.iter_mut().find(|b| b.category_id == category_id) {
            Some(row) => row.amount = amount,
            None => rows.push(Budget::new(category_id, amount)),
        }
        Ok(())
    }

    /// Get the cap row for a category, `None` when no cap is set
    pub fn get(&self, category_id: &CategoryId) -> Result<Option<Budget>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| Error::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(rows.iter().find(|b| b.category_id == *category_id).cloned())
    }

    /// Get a snapshot of all cap rows in table order
    pub fn all(&self) -> Result<Vec<Budget>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| Error::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(rows.clone())
    }

    /// Count cap rows
    pub fn count(&self) -> Result<usize> {
        let rows = self
            .rows
            .read()
            .map_err(|e| Error::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(rows.len())
    }
}

impl Default for BudgetTable {
    fn default() -> Self {
        Self::new()
    }
}
