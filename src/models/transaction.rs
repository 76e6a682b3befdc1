//! Transaction model
//!
//! Represents income and expense entries for the finance tracker.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    #[default]
    Expense,
}

impl TransactionKind {
    /// Parse a kind from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "in" | "i" => Some(Self::Income),
            "expense" | "out" | "e" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Predefined spending categories offered by the finance tracker.
/// A transaction may still carry any free-form category string.
pub const PREDEFINED_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Housing",
    "Utilities",
    "Entertainment",
    "Health",
    "Shopping",
    "Salary",
    "Investment",
    "Other",
];

/// Category recorded when the user supplies none
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single income or expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Amount, always positive; the kind carries the sign
    pub amount: Money,

    /// Spending category
    #[serde(default)]
    pub category: String,

    /// Transaction date
    pub date: NaiveDate,

    /// What this transaction was for
    #[serde(default)]
    pub description: String,

    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction dated today
    pub fn new(kind: TransactionKind, amount: Money, description: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category: UNCATEGORIZED.to_string(),
            date: Utc::now().date_naive(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Signed amount: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}
