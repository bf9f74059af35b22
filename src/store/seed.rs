//! Built-in seed dataset
//!
//! The store is seeded once at process start from this fixed in-memory
//! dataset: the full category catalog, default caps for the spending
//! categories, and a month of sample transactions with dates relative to
//! now. Embedders that want a blank store seed from `SeedData::empty()`.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    Budget, Category, Money, Transaction, TransactionId, TransactionKind,
};

/// Everything the store needs to initialize
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub budgets: Vec<Budget>,
    pub transactions: Vec<Transaction>,
}

impl SeedData {
    /// An empty dataset: no categories, caps, or transactions
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fixed built-in dataset
    pub fn builtin() -> Self {
        Self {
            categories: builtin_categories(),
            budgets: builtin_budgets(),
            transactions: builtin_transactions(),
        }
    }

    /// A dataset with the built-in catalog but no caps or transactions
    pub fn catalog_only() -> Self {
        Self {
            categories: builtin_categories(),
            budgets: Vec::new(),
            transactions: Vec::new(),
        }
    }
}

fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new("food", "Food & Dining", "food", "utensils"),
        Category::new("transport", "Transportation", "transport", "car"),
        Category::new("housing", "Housing", "housing", "home"),
        Category::new("utilities", "Utilities", "utilities", "zap"),
        Category::new("entertainment", "Entertainment", "entertainment", "film"),
        Category::new("shopping", "Shopping", "expense", "shopping-bag"),
        Category::new("health", "Health & Fitness", "investment", "activity"),
        Category::new("personal", "Personal Care", "savings", "user"),
        Category::new("education", "Education", "primary", "book-open"),
        Category::new("gifts", "Gifts & Donations", "income", "gift"),
        Category::new("salary", "Salary", "income", "dollar-sign"),
        Category::new("investments", "Investments", "investment", "trending-up"),
        Category::new("other_income", "Other Income", "income", "plus-circle"),
    ]
}

fn builtin_budgets() -> Vec<Budget> {
    vec![
        Budget::new("food", Money::from_cents(50000)),
        Budget::new("transport", Money::from_cents(30000)),
        Budget::new("housing", Money::from_cents(120000)),
        Budget::new("utilities", Money::from_cents(20000)),
        Budget::new("entertainment", Money::from_cents(15000)),
        Budget::new("shopping", Money::from_cents(20000)),
        Budget::new("health", Money::from_cents(10000)),
        Budget::new("personal", Money::from_cents(5000)),
        Budget::new("education", Money::from_cents(10000)),
        Budget::new("gifts", Money::from_cents(5000)),
    ]
}

fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

fn sample(
    days: i64,
    description: &str,
    cents: i64,
    category: &str,
    kind: TransactionKind,
) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        date: days_ago(days),
        description: description.to_string(),
        amount: Money::from_cents(cents),
        category_id: category.into(),
        kind,
    }
}

fn builtin_transactions() -> Vec<Transaction> {
    use TransactionKind::{Expense, Income};

    vec![
        // Income
        sample(29, "Monthly Salary", 500000, "salary", Income),
        sample(22, "Freelance Work", 65000, "other_income", Income),
        sample(15, "Dividend Payment", 12000, "investments", Income),
        // Expenses
        sample(28, "Rent Payment", 120000, "housing", Expense),
        sample(27, "Grocery Shopping", 8575, "food", Expense),
        sample(26, "Electric Bill", 6542, "utilities", Expense),
        sample(23, "Gas Station", 4550, "transport", Expense),
        sample(21, "Movies Night", 3299, "entertainment", Expense),
        sample(20, "New Shoes", 7999, "shopping", Expense),
        sample(18, "Gym Membership", 5000, "health", Expense),
        sample(16, "Hair Cut", 3500, "personal", Expense),
        sample(14, "Online Course", 7999, "education", Expense),
        sample(12, "Birthday Gift", 5000, "gifts", Expense),
        sample(10, "Restaurant Dinner", 6850, "food", Expense),
        sample(8, "Subway Pass", 3000, "transport", Expense),
        sample(7, "Water Bill", 3250, "utilities", Expense),
        sample(5, "Coffee Shop", 475, "food", Expense),
        sample(3, "Spotify Subscription", 999, "entertainment", Expense),
        sample(2, "Pharmacy", 2245, "health", Expense),
        sample(1, "Phone Bill", 4500, "utilities", Expense),
        sample(0, "Fast Food", 1299, "food", Expense),
    ]
}
