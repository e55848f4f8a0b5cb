//! Budget CLI commands
//!
//! Implements CLI commands for the monthly net income and the list of fixed
//! expenses.

use clap::Subcommand;

use super::parse_amount;
use crate::analysis::BudgetMetrics;
use crate::config::settings::Settings;
use crate::display::format_expense_table;
use crate::error::FinplanResult;
use crate::services::BudgetService;
use crate::storage::RecordStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly net income
    Set {
        /// Amount (e.g., "3000" or "3000.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the monthly net income
    Show,
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a fixed monthly expense
    Add {
        /// Category name (e.g., "Rent")
        category: String,
        /// Monthly amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Remove an expense by category
    #[command(alias = "rm")]
    Remove {
        /// Category name (case-insensitive)
        category: String,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Remove all expenses
    Clear,
}

/// Handle an income command
pub fn handle_income_command<S: RecordStore>(
    store: &S,
    settings: &Settings,
    cmd: IncomeCommands,
) -> FinplanResult<()> {
    let service = BudgetService::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            let budget = service.set_net_income(amount)?;
            println!(
                "Net income set to {}",
                budget.net_income.format_with_symbol(symbol)
            );
        }
        IncomeCommands::Show => {
            let budget = service.load();
            println!(
                "Net income: {}",
                budget.net_income.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

/// Handle an expense command
pub fn handle_expense_command<S: RecordStore>(
    store: &S,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinplanResult<()> {
    let service = BudgetService::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add { category, amount } => {
            let amount = parse_amount(&amount)?;
            if service.add_expense(&category, amount)? {
                println!(
                    "Added expense '{}': {}",
                    category.trim(),
                    amount.format_with_symbol(symbol)
                );
            } else {
                println!("Ignored: an expense needs a category and an amount above zero.");
            }
        }
        ExpenseCommands::Remove { category } => {
            let removed = service.remove_expense(&category)?;
            println!(
                "Removed expense '{}' ({})",
                removed.category,
                removed.amount.format_with_symbol(symbol)
            );
        }
        ExpenseCommands::List => {
            let budget = service.load();
            println!("{}", format_expense_table(&budget.expenses, symbol));
            if !budget.expenses.is_empty() {
                let metrics = BudgetMetrics::compute_with_cap(
                    &budget,
                    settings.scoring.investable_ratio_cap,
                );
                println!(
                    "Total: {}",
                    metrics.total_expenses.format_with_symbol(symbol)
                );
            }
        }
        ExpenseCommands::Clear => {
            let count = service.clear_expenses()?;
            println!("Removed {} expense(s).", count);
        }
    }

    Ok(())
}
