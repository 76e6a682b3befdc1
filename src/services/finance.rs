//! Finance tracker service
//!
//! Business logic for income/expense entries: validation, filtered
//! listing, and per-period summaries.

use chrono::{Datelike, NaiveDate, Utc};

use crate::error::{ToolboxError, ToolboxResult};
use crate::models::{Money, Transaction, TransactionKind, UNCATEGORIZED};
use crate::storage::Storage;

/// Time window for listings and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// No date filtering
    #[default]
    All,
    /// A single calendar month
    Month { year: i32, month: u32 },
    /// A whole calendar year
    Year { year: i32 },
}

impl Period {
    /// The current calendar month
    pub fn this_month() -> Self {
        let today = Utc::now().date_naive();
        Self::Month {
            year: today.year(),
            month: today.month(),
        }
    }

    fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Self::All => true,
            Self::Month { year, month } => date.year() == year && date.month() == month,
            Self::Year { year } => date.year() == year,
        }
    }
}

/// Totals over a period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinanceSummary {
    pub income: Money,
    pub expense: Money,
    /// income - expense
    pub balance: Money,
    /// Number of transactions in the period
    pub count: usize,
}

/// Input for recording a transaction
#[derive(Debug, Clone)]
pub struct AddTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub description: String,
    /// Defaults to "Uncategorized" when absent
    pub category: Option<String>,
    /// Defaults to today when absent
    pub date: Option<NaiveDate>,
}

/// Service for the finance tracker
pub struct FinanceService<'a> {
    storage: &'a Storage,
}

impl<'a> FinanceService<'a> {
    /// Create a new finance service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction
    pub fn add(&self, input: AddTransactionInput) -> ToolboxResult<Transaction> {
        if !input.amount.is_positive() {
            return Err(ToolboxError::Validation(
                "transaction amount must be positive".into(),
            ));
        }
        if input.description.trim().is_empty() {
            return Err(ToolboxError::Validation(
                "transaction description cannot be empty".into(),
            ));
        }

        let mut txn = Transaction::new(input.kind, input.amount, input.description.trim());
        txn.category = input
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        if let Some(date) = input.date {
            txn.date = date;
        }

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;
        Ok(txn)
    }

    /// List transactions in a period, newest first
    pub fn list(&self, period: Period, limit: Option<usize>) -> ToolboxResult<Vec<Transaction>> {
        let mut transactions: Vec<_> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| period.contains(t.date))
            .collect();

        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    /// Find a transaction by ID prefix
    pub fn find(&self, identifier: &str) -> ToolboxResult<Option<Transaction>> {
        Ok(self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .find(|t| t.id.matches(identifier)))
    }

    /// Delete a transaction
    pub fn delete(&self, identifier: &str) -> ToolboxResult<Transaction> {
        let txn = self
            .find(identifier)?
            .ok_or_else(|| ToolboxError::transaction_not_found(identifier))?;

        self.storage.transactions.remove(txn.id)?;
        self.storage.transactions.save()?;
        Ok(txn)
    }

    /// Total income, expense, and balance over a period
    pub fn summary(&self, period: Period) -> ToolboxResult<FinanceSummary> {
        let transactions = self.list(period, None)?;

        let income: Money = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let expense: Money = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum();

        Ok(FinanceSummary {
            income,
            expense,
            balance: income - expense,
            count: transactions.len(),
        })
    }
}
