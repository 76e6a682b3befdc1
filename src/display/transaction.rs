//! Transaction display formatting
//!
//! Register views and period summaries for the finance tracker.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Transaction, TransactionKind};
use crate::services::FinanceSummary;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format a list of transactions as a register table
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| TransactionRow {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.to_string(),
            amount: match txn.kind {
                TransactionKind::Income => format!("+{}", txn.amount.format_with_symbol(symbol)),
                TransactionKind::Expense => format!("-{}", txn.amount.format_with_symbol(symbol)),
            },
            category: txn.category.clone(),
            description: txn.description.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format a period summary
pub fn format_summary(summary: &FinanceSummary, label: &str, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Summary for {}\n", label));
    output.push_str(&format!(
        "  Income:   {}\n",
        summary.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Expense:  {}\n",
        summary.expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Balance:  {}\n",
        summary.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Entries:  {}\n", summary.count));
    output
}
