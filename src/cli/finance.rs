//! Finance tracker CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_summary, format_transaction_register};
use crate::error::{ToolboxError, ToolboxResult};
use crate::models::{Money, TransactionKind, PREDEFINED_CATEGORIES};
use crate::services::{AddTransactionInput, FinanceService, Period};
use crate::storage::Storage;

/// Finance tracker subcommands
#[derive(Subcommand)]
pub enum FinanceCommands {
    /// Record an income or expense
    Add {
        /// Transaction kind: income or expense
        kind: String,
        /// Amount, e.g. 12.50
        amount: String,
        /// What the money was for
        description: String,
        /// Category label
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Restrict to a month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Restrict to a year
        #[arg(short, long, conflicts_with = "month")]
        year: Option<i32>,
        /// Maximum number of rows
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    /// Delete a transaction by ID prefix
    Delete {
        /// Transaction ID prefix
        transaction: String,
    },
    /// Income, expense, and balance totals
    Summary {
        /// Summarize a month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Summarize a whole year
        #[arg(short, long, conflicts_with = "month")]
        year: Option<i32>,
        /// Summarize everything on record
        #[arg(short, long, conflicts_with_all = ["month", "year"])]
        all: bool,
    },
    /// List the predefined categories
    Categories,
}

fn parse_month(s: &str) -> ToolboxResult<Period> {
    let parsed = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| ToolboxError::InvalidInput(format!("invalid month '{}', expected YYYY-MM", s)))?;
    use chrono::Datelike;
    Ok(Period::Month {
        year: parsed.year(),
        month: parsed.month(),
    })
}

fn parse_date(s: &str) -> ToolboxResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ToolboxError::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD", s)))
}

fn period_label(period: Period) -> String {
    match period {
        Period::All => "all time".to_string(),
        Period::Month { year, month } => format!("{}-{:02}", year, month),
        Period::Year { year } => year.to_string(),
    }
}

/// Handle a finance command
pub fn handle_finance_command(
    storage: &Storage,
    settings: &Settings,
    cmd: FinanceCommands,
) -> ToolboxResult<()> {
    let service = FinanceService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        FinanceCommands::Add { kind, amount, description, category, date } => {
            let kind = TransactionKind::parse(&kind).ok_or_else(|| {
                ToolboxError::InvalidInput(format!(
                    "unknown kind '{}', expected income or expense",
                    kind
                ))
            })?;
            let amount = Money::parse(&amount)
                .map_err(|e| ToolboxError::InvalidInput(e.to_string()))?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let txn = service.add(AddTransactionInput {
                kind,
                amount,
                description,
                category,
                date,
            })?;
            println!(
                "Recorded {} of {} ({})",
                txn.kind,
                txn.amount.format_with_symbol(symbol),
                txn.id
            );
        }

        FinanceCommands::List { month, year, limit } => {
            let period = match (month, year) {
                (Some(m), _) => parse_month(&m)?,
                (None, Some(y)) => Period::Year { year: y },
                (None, None) => Period::All,
            };
            let transactions = service.list(period, Some(limit))?;
            print!("{}", format_transaction_register(&transactions, symbol));
        }

        FinanceCommands::Delete { transaction } => {
            let deleted = service.delete(&transaction)?;
            println!(
                "Deleted {} of {} ({})",
                deleted.kind,
                deleted.amount.format_with_symbol(symbol),
                deleted.id
            );
        }

        FinanceCommands::Summary { month, year, all } => {
            let period = if all {
                Period::All
            } else {
                match (month, year) {
                    (Some(m), _) => parse_month(&m)?,
                    (None, Some(y)) => Period::Year { year: y },
                    (None, None) => Period::this_month(),
                }
            };
            let summary = service.summary(period)?;
            print!("{}", format_summary(&summary, &period_label(period), symbol));
        }

        FinanceCommands::Categories => {
            for category in PREDEFINED_CATEGORIES {
                println!("{}", category);
            }
        }
    }

    Ok(())
}
