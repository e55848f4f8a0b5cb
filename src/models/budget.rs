//! Budget model
//!
//! A budget is the monthly net income plus the list of fixed expenses. It is
//! the only user-entered state besides the history; every metric shown on the
//! dashboard is derived from it on demand.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetValidationError {
    #[error("Net income cannot be negative")]
    NegativeIncome,
}

/// A fixed monthly expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Category label, e.g. "Rent"
    #[serde(rename = "Kategorie", default)]
    pub category: String,

    /// Monthly amount
    #[serde(rename = "Betrag", default)]
    pub amount: Money,
}

impl Expense {
    /// Create a new expense
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// Whether this expense counts towards the total
    ///
    /// Rows with a blank category or a zero/negative amount are placeholders
    /// left over from editing and are silently ignored.
    pub fn is_effective(&self) -> bool {
        !self.category.trim().is_empty() && self.amount.is_positive()
    }

    /// Case-insensitive category match
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.trim().eq_ignore_ascii_case(category.trim())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}

/// Net income and fixed expenses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Monthly net income
    #[serde(rename = "netto", default)]
    pub net_income: Money,

    /// Fixed expenses in display order
    #[serde(rename = "kosten", default)]
    pub expenses: Vec<Expense>,
}

impl Budget {
    /// Create a budget with the given income and no expenses
    pub fn with_income(net_income: Money) -> Self {
        Self {
            net_income,
            expenses: Vec::new(),
        }
    }

    /// Set the net income
    pub fn set_net_income(&mut self, amount: Money) -> Result<(), BudgetValidationError> {
        if amount.is_negative() {
            return Err(BudgetValidationError::NegativeIncome);
        }
        self.net_income = amount;
        Ok(())
    }

    /// Append an expense
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Remove the first expense matching the category
    pub fn remove_expense(&mut self, category: &str) -> Option<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.matches_category(category))?;
        Some(self.expenses.remove(index))
    }

    /// Remove all expenses
    pub fn clear_expenses(&mut self) {
        self.expenses.clear();
    }

    /// Expenses that count towards the total
    pub fn effective_expenses(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter().filter(|e| e.is_effective())
    }

    /// Drop placeholder rows (blank category or non-positive amount)
    ///
    /// Returns the number of rows removed.
    pub fn prune_ineffective(&mut self) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(Expense::is_effective);
        before - self.expenses.len()
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.net_income.is_negative() {
            return Err(BudgetValidationError::NegativeIncome);
        }
        Ok(())
    }
}
