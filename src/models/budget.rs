//! Budget cap model
//!
//! A budget row caps spending for one category. The budget table holds at
//! most one row per category; writing an existing category replaces its
//! amount in place.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// A per-category spending cap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// The category this cap applies to (unique key)
    pub category_id: CategoryId,

    /// Cap amount, strictly positive by caller contract
    pub amount: Money,
}

impl Budget {
    /// Create a budget row
    pub fn new(category_id: impl Into<CategoryId>, amount: Money) -> Self {
        Self {
            category_id: category_id.into(),
            amount,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category_id, self.amount)
    }
}
