//! Category catalog
//!
//! The static set of known categories, seeded once at store initialization
//! and never mutated afterwards. `all` returns the seed order, which is
//! stable and deterministic.

use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::models::{Category, CategoryId};

/// The immutable seeded set of categories
pub struct Catalog {
    categories: RwLock<Vec<Category>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            categories: RwLock::new(Vec::new()),
        }
    }

    /// Seed the catalog; the only write the catalog ever sees
    pub(crate) fn seed(&self, categories: Vec<Category>) -> Result<()> {
        let mut current = self
            .categories
            .write()
            .map_err(|e| Error::Store(format!("Failed to acquire write lock: {}", e)))?;

        *current = categories;
        Ok(())
    }

    /// Get a category by id, `None` for unknown ids
    ///
    /// Dangling transaction references land here as `None`; presentation
    /// surfaces render those as uncategorized.
    pub fn get(&self, id: &CategoryId) -> Result<Option<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|e| Error::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.iter().find(|c| c.id == *id).cloned())
    }

    /// Get the full seeded set in seed order
    pub fn all(&self) -> Result<Vec<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|e| Error::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.clone())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize> {
        let categories = self
            .categories
            .read()
            .map_err(|e| Error::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.len())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
