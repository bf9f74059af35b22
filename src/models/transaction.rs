//! Transaction model
//!
//! Represents recorded income and expense entries. Transactions are owned
//! exclusively by the ledger; the ledger assigns the id and timestamp on
//! insert. The core stores what it is given: amount positivity and category
//! validity are the calling collaborator's responsibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A recorded income or expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the ledger
    pub id: TransactionId,

    /// When the transaction was recorded
    pub date: DateTime<Utc>,

    /// Free-form description ("Grocery Shopping")
    pub description: String,

    /// Amount, strictly positive by caller contract; the sign of the effect
    /// on the balance comes from `kind`
    pub amount: Money,

    /// The category this transaction is assigned to. Not checked against the
    /// catalog: a dangling reference is presented as uncategorized downstream.
    pub category_id: CategoryId,

    /// Income or expense
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a transaction from its input fields, assigning a fresh id and
    /// a now-timestamp
    pub fn create(input: NewTransaction) -> Self {
        Self {
            id: TransactionId::new(),
            date: Utc::now(),
            description: input.description,
            amount: input.amount,
            category_id: input.category_id,
            kind: input.kind,
        }
    }

    /// Apply a partial update, changing only the supplied fields
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.kind
        )
    }
}

/// Input for recording a new transaction
///
/// The ledger fills in the id and timestamp.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Money,
    pub category_id: CategoryId,
    pub kind: TransactionKind,
}

impl NewTransaction {
    /// Create a new transaction input
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category_id: impl Into<CategoryId>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category_id: category_id.into(),
            kind,
        }
    }
}

/// Partial field set for updating a transaction in place
///
/// Unset fields are left untouched; the id is never patchable.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category_id: Option<CategoryId>,
    pub kind: Option<TransactionKind>,
}

impl TransactionPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the amount
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the category
    pub fn category(mut self, category_id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Set the kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.category_id.is_none()
            && self.kind.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NewTransaction {
        NewTransaction::new(
            "Grocery Shopping",
            Money::from_cents(8575),
            "food",
            TransactionKind::Expense,
        )
    }

    #[test]
    fn test_create_assigns_id_and_date() {
        let before = Utc::now();
        let txn = Transaction::create(sample_input());

        assert!(!txn.id.as_uuid().is_nil());
        assert!(txn.date >= before);
        assert_eq!(txn.description, "Grocery Shopping");
        assert_eq!(txn.amount.cents(), 8575);
        assert_eq!(txn.category_id.as_str(), "food");
        assert_eq!(txn.kind, TransactionKind::Expense);
    }

    #[test]
    fn test_apply_patches_only_supplied_fields() {
        let mut txn = Transaction::create(sample_input());
        let original_id = txn.id;
        let original_date = txn.date;

        txn.apply(
            TransactionPatch::new()
                .amount(Money::from_cents(9000))
                .description("Weekly groceries"),
        );

        assert_eq!(txn.id, original_id);
        assert_eq!(txn.date, original_date);
        assert_eq!(txn.amount.cents(), 9000);
        assert_eq!(txn.description, "Weekly groceries");
        assert_eq!(txn.category_id.as_str(), "food");
        assert_eq!(txn.kind, TransactionKind::Expense);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut txn = Transaction::create(sample_input());
        let snapshot = txn.clone();

        assert!(TransactionPatch::new().is_empty());
        txn.apply(TransactionPatch::new());

        assert_eq!(txn.description, snapshot.description);
        assert_eq!(txn.amount, snapshot.amount);
        assert_eq!(txn.date, snapshot.date);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TransactionKind::Expense.is_expense());
        assert!(!TransactionKind::Expense.is_income());
        assert!(TransactionKind::Income.is_income());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"income\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::create(sample_input());
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();

        assert_eq!(txn.id, deserialized.id);
        assert_eq!(txn.amount, deserialized.amount);
        assert_eq!(txn.kind, deserialized.kind);
    }
}
