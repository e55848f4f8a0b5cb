//! Core data models for finplan
//!
//! This module contains the data structures of the planning domain: money
//! amounts, months, the budget, history snapshots and investment plans.

pub mod budget;
pub mod history;
pub mod investment;
pub mod money;
pub mod period;

pub use budget::{Budget, BudgetValidationError, Expense};
pub use history::HistoryEntry;
pub use investment::{InvestmentPlan, PlanValidationError};
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError};
