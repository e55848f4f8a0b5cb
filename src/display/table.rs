//! Table views of expenses and history

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::format_percentage;
use crate::models::{Expense, HistoryEntry};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Month")]
    period: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Surplus")]
    surplus: String,
    #[tabled(rename = "Savings rate")]
    savings_rate: String,
}

/// Format expenses as a table, in stored order
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        category: e.category.clone(),
        amount: e.amount.format_with_symbol(symbol),
    });

    Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::single(1), Alignment::right())
        .to_string()
}

/// Format history entries as a table, in the order given
pub fn format_history_table(entries: &[HistoryEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No months recorded yet.".to_string();
    }

    let rows = entries.iter().map(|h| HistoryRow {
        period: h.period.to_string(),
        income: h.income.format_with_symbol(symbol),
        expenses: h.expenses.format_with_symbol(symbol),
        surplus: h.surplus.format_with_symbol(symbol),
        savings_rate: format_percentage(h.effective_savings_rate()),
    });

    Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right())
        .to_string()
}
