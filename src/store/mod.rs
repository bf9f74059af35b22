//! In-memory store for pennybook
//!
//! Provides the single store object that owns the ledger, budget table, and
//! category catalog. The store replaces the ambient global state of earlier
//! designs: consumers receive a `&Store` handle, and initialization-before-use
//! is a checked precondition rather than an implicit assumption. Every
//! component accessor fails fast with `Error::NotInitialized` until
//! `Store::init` has seeded the collections.

pub mod budgets;
pub mod catalog;
pub mod ledger;
pub mod seed;

pub use budgets::BudgetTable;
pub use catalog::Catalog;
pub use ledger::Ledger;
pub use seed::SeedData;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

/// Owner of all mutable tracker state for the process lifetime
///
/// The store's API surface is the sole legal mutation path for each
/// collection; no other component writes to them directly.
pub struct Store {
    ledger: Ledger,
    budgets: BudgetTable,
    catalog: Catalog,
    seeded: AtomicBool,
}

impl Store {
    /// Create an empty, uninitialized store
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
            budgets: BudgetTable::new(),
            catalog: Catalog::new(),
            seeded: AtomicBool::new(false),
        }
    }

    /// Seed the store exactly once
    ///
    /// Populates the catalog, budget table, and ledger from the given
    /// dataset. A second call fails with `Error::AlreadyInitialized`.
    pub fn init(&self, seed: SeedData) -> Result<()> {
        if self.seeded.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyInitialized);
        }

        self.catalog.seed(seed.categories)?;
        self.budgets.seed(seed.budgets)?;
        self.ledger.seed(seed.transactions)?;
        Ok(())
    }

    /// Convenience: create a store already seeded from `seed`
    pub fn open(seed: SeedData) -> Result<Self> {
        let store = Self::new();
        store.init(seed)?;
        Ok(store)
    }

    /// Check whether the store has been seeded
    pub fn is_initialized(&self) -> bool {
        self.seeded.load(Ordering::SeqCst)
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Access the transaction ledger
    pub fn ledger(&self) -> Result<&Ledger> {
        self.ensure_initialized()?;
        Ok(&self.ledger)
    }

    /// Access the budget table
    pub fn budgets(&self) -> Result<&BudgetTable> {
        self.ensure_initialized()?;
        Ok(&self.budgets)
    }

    /// Access the category catalog
    pub fn catalog(&self) -> Result<&Catalog> {
        self.ensure_initialized()?;
        Ok(&self.catalog)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;

    #[test]
    fn test_access_before_init_fails_fast() {
        let store = Store::new();
        assert!(!store.is_initialized());

        assert!(matches!(store.ledger(), Err(Error::NotInitialized)));
        assert!(matches!(store.budgets(), Err(Error::NotInitialized)));
        assert!(matches!(store.catalog(), Err(Error::NotInitialized)));
    }

    #[test]
    fn test_init_seeds_all_collections() {
        let store = Store::new();
        store.init(SeedData::builtin()).unwrap();

        assert!(store.is_initialized());
        assert_eq!(store.catalog().unwrap().count().unwrap(), 13);
        assert_eq!(store.budgets().unwrap().count().unwrap(), 10);
        assert_eq!(store.ledger().unwrap().count().unwrap(), 21);
    }

    #[test]
    fn test_double_init_is_rejected() {
        let store = Store::new();
        store.init(SeedData::empty()).unwrap();

        assert!(matches!(
            store.init(SeedData::builtin()),
            Err(Error::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_open_shortcut() {
        let store = Store::open(SeedData::catalog_only()).unwrap();
        assert!(store.is_initialized());
        assert_eq!(store.ledger().unwrap().count().unwrap(), 0);
        assert!(store
            .catalog()
            .unwrap()
            .get(&CategoryId::from("salary"))
            .unwrap()
            .is_some());
    }
}
