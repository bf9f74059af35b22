//! Summary service
//!
//! Overall totals, net balance, and the recency-ordered transaction view
//! consumed by dashboard surfaces.

use crate::error::Result;
use crate::models::{Money, Transaction, TransactionKind};
use crate::store::Store;

/// How many transactions dashboard surfaces show by default
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Service for ledger-wide summaries
pub struct SummaryService<'a> {
    store: &'a Store,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Sum of all income amounts
    pub fn total_income(&self) -> Result<Money> {
        self.total_of(TransactionKind::Income)
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Result<Money> {
        self.total_of(TransactionKind::Expense)
    }

    /// Income minus expenses
    pub fn net_balance(&self) -> Result<Money> {
        Ok(self.total_income()? - self.total_expenses()?)
    }

    /// The most recent transactions, newest first, at most `limit` entries
    ///
    /// Sorted by date descending with a stable sort over the ledger
    /// snapshot, so equal timestamps keep insertion-recency order.
    pub fn recent_transactions(&self, limit: usize) -> Result<Vec<Transaction>> {
        let mut transactions = self.store.ledger()?.list()?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions.truncate(limit);
        Ok(transactions)
    }

    fn total_of(&self, kind: TransactionKind) -> Result<Money> {
        let transactions = self.store.ledger()?.list()?;
        Ok(transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{NewTransaction, TransactionPatch};
    use crate::store::SeedData;
    use chrono::{Duration, Utc};

    fn empty_store() -> Store {
        Store::open(SeedData::empty()).unwrap()
    }

    fn record(store: &Store, description: &str, cents: i64, kind: TransactionKind) -> Transaction {
        store
            .ledger()
            .unwrap()
            .add(NewTransaction::new(
                description,
                Money::from_cents(cents),
                "food",
                kind,
            ))
            .unwrap()
    }

    #[test]
    fn test_totals_split_by_kind() {
        let store = empty_store();
        record(&store, "Monthly Salary", 500000, TransactionKind::Income);
        record(&store, "Freelance Work", 65000, TransactionKind::Income);
        record(&store, "Grocery Shopping", 8575, TransactionKind::Expense);

        let summary = SummaryService::new(&store);
        assert_eq!(summary.total_income().unwrap().cents(), 565000);
        assert_eq!(summary.total_expenses().unwrap().cents(), 8575);
    }

    #[test]
    fn test_net_balance_identity() {
        let store = empty_store();
        record(&store, "Monthly Salary", 500000, TransactionKind::Income);
        record(&store, "Rent Payment", 120000, TransactionKind::Expense);
        record(&store, "Coffee Shop", 475, TransactionKind::Expense);

        let summary = SummaryService::new(&store);
        let income = summary.total_income().unwrap();
        let expenses = summary.total_expenses().unwrap();
        assert_eq!(summary.net_balance().unwrap(), income - expenses);
        assert_eq!(summary.net_balance().unwrap().cents(), 379525);
    }

    #[test]
    fn test_totals_on_empty_ledger_are_zero() {
        let store = empty_store();
        let summary = SummaryService::new(&store);

        assert!(summary.total_income().unwrap().is_zero());
        assert!(summary.total_expenses().unwrap().is_zero());
        assert!(summary.net_balance().unwrap().is_zero());
    }

    #[test]
    fn test_recent_transactions_orders_by_date_desc() {
        let store = empty_store();
        let base = Utc::now();

        // Five transactions with dates d1 < d2 < d3 < d4 < d5, inserted in
        // shuffled order
        for (day, description) in [
            (3, "d3"),
            (1, "d1"),
            (5, "d5"),
            (2, "d2"),
            (4, "d4"),
        ] {
            let txn = record(&store, description, 100 * day, TransactionKind::Expense);
            store
                .ledger()
                .unwrap()
                .update(
                    &txn.id,
                    TransactionPatch::new().date(base + Duration::days(day)),
                )
                .unwrap();
        }

        let summary = SummaryService::new(&store);
        let recent = summary.recent_transactions(3).unwrap();

        let names: Vec<&str> = recent.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, ["d5", "d4", "d3"]);
    }

    #[test]
    fn test_recent_transactions_ties_keep_insertion_recency() {
        let store = empty_store();
        let when = Utc::now();

        let first = record(&store, "first", 100, TransactionKind::Expense);
        let second = record(&store, "second", 200, TransactionKind::Expense);
        for id in [&first.id, &second.id] {
            store
                .ledger()
                .unwrap()
                .update(id, TransactionPatch::new().date(when))
                .unwrap();
        }

        let summary = SummaryService::new(&store);
        let recent = summary.recent_transactions(DEFAULT_RECENT_LIMIT).unwrap();

        // Equal dates: the most recently inserted entry stays in front
        assert_eq!(recent[0].description, "second");
        assert_eq!(recent[1].description, "first");
    }

    #[test]
    fn test_recent_transactions_limit_larger_than_ledger() {
        let store = empty_store();
        record(&store, "Pharmacy", 2245, TransactionKind::Expense);

        let summary = SummaryService::new(&store);
        assert_eq!(summary.recent_transactions(10).unwrap().len(), 1);
    }

    #[test]
    fn test_requires_initialized_store() {
        let store = Store::new();
        let summary = SummaryService::new(&store);
        assert!(matches!(summary.net_balance(), Err(Error::NotInitialized)));
    }
}
