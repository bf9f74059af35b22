//! In-memory transaction ledger
//!
//! Holds the full set of recorded transactions in insertion order, newest
//! first. The ledger is the sole owner and mutator of transaction state:
//! inserts assign ids and timestamps, updates patch in place without
//! reordering, and removals of unknown ids are silent no-ops.

use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction, TransactionId, TransactionPatch};

/// The mutable collection of all recorded transactions
pub struct Ledger {
    /// Newest insertion first; aggregation relies on this order for
    /// stable tie-breaking in recency views
    entries: RwLock<Vec<Transaction>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Replace the ledger contents with seeded transactions
    ///
    /// Entries are kept in the order given; subsequent `add` calls land in
    /// front of them.
    pub(crate) fn seed(&self, transactions: Vec<Transaction>) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| Error::Store(format!("Failed to acquire write lock: {}", e)))?;

        *entries = transactions;
        Ok(())
    }

    /// Record a new transaction
    ///
    /// Assigns a fresh unique id and a now-timestamp, and inserts the entry
    /// as the logically most-recent item. Returns the created record; callers
    /// treating the mutation as fire-and-forget may ignore it.
    pub fn add(&self, input: NewTransaction) -> Result<Transaction> {
        let txn = Transaction::create(input);

        let mut entries = self
            .entries
            .write()
            .map_err(|e| Error::Store(format!("Failed to acquire write lock: {}", e)))?;

        entries.insert(0, txn.clone());
        Ok(txn)
    }

    /// Patch the transaction matching `id` in place
    ///
    /// Only the fields set on the patch change; position in the ledger is
    /// preserved. An unknown id is a silent no-op and returns `false`.
    pub fn update(&self, id: &TransactionId, patch: TransactionPatch) -> Result<bool> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| Error::Store(format!("Failed to acquire write lock: {}", e)))?;

        match entries.iter_mut().find(|t| t.id == *id) {
            Some(txn) => {
                txn.apply(patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the transaction matching `id`
    ///
    /// An unknown id is a silent no-op and returns `false`.
    pub fn remove(&self, id: &TransactionId) -> Result<bool> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| Error::Store(format!("Failed to acquire write lock: {}", e)))?;

        let before = entries.len();
        entries.retain(|t| t.id != *id);
        Ok(entries.len() < before)
    }

    /// Get a transaction by id
    pub fn get(&self, id: &TransactionId) -> Result<Option<Transaction>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| Error::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.iter().find(|t| t.id == *id).cloned())
    }

    /// Get a snapshot of the full ledger, newest insertion first
    ///
    /// The returned collection does not reflect later mutations.
    pub fn list(&self) -> Result<Vec<Transaction>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| Error::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.clone())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| Error::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.len())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
