//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod history;
pub mod invest;

pub use budget::{handle_expense_command, handle_income_command, ExpenseCommands, IncomeCommands};
pub use history::{handle_history_command, HistoryCommands};
pub use invest::{handle_invest_command, InvestArgs};

use crate::error::{FinplanError, FinplanResult};
use crate::models::Money;

/// Parse a user-entered amount
pub(crate) fn parse_amount(input: &str) -> FinplanResult<Money> {
    Money::parse(input).map_err(|e| FinplanError::Validation(format!("Invalid amount: {}", e)))
}
