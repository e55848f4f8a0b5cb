//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display:
//! tables for expenses and history, plus the bar and percentage helpers used
//! by the reports.

pub mod report;
pub mod table;

pub use report::{format_bar, format_money_colored, format_percentage, separator, truncate};
pub use table::{format_expense_table, format_history_table};
