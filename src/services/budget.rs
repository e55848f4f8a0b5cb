//! Budget service
//!
//! Provides business logic for the budget: income and expense edits, and the
//! derived metrics and health score of the current state.

use tracing::{debug, warn};

use crate::analysis::{BudgetMetrics, HealthScore, ScoringPolicy};
use crate::error::{FinplanError, FinplanResult};
use crate::models::{Budget, Expense, Money};
use crate::storage::{RecordStore, Resource};

/// Service for budget management
pub struct BudgetService<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> BudgetService<'a, S> {
    /// Create a new budget service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load the current budget
    ///
    /// A stored budget that fails validation is treated like a corrupt one.
    pub fn load(&self) -> Budget {
        let budget = self.store.load(Resource::Budget, Budget::default());
        match budget.validate() {
            Ok(()) => budget,
            Err(e) => {
                warn!(error = %e, "stored budget is invalid, using default");
                Budget::default()
            }
        }
    }

    /// Save a budget, dropping placeholder expense rows first
    pub fn save(&self, mut budget: Budget) -> FinplanResult<Budget> {
        let pruned = budget.prune_ineffective();
        if pruned > 0 {
            debug!(pruned, "dropped ineffective expense rows");
        }
        self.store.save(Resource::Budget, &budget)?;
        Ok(budget)
    }

    /// Set the monthly net income
    pub fn set_net_income(&self, amount: Money) -> FinplanResult<Budget> {
        let mut budget = self.load();
        budget
            .set_net_income(amount)
            .map_err(|e| FinplanError::Validation(e.to_string()))?;
        self.save(budget)
    }

    /// Add a fixed expense
    ///
    /// Returns `false` if the expense has a blank category or a non-positive
    /// amount; such rows are discarded rather than stored.
    pub fn add_expense(&self, category: &str, amount: Money) -> FinplanResult<bool> {
        let expense = Expense::new(category.trim(), amount);
        if !expense.is_effective() {
            debug!(category, %amount, "ignoring ineffective expense");
            return Ok(false);
        }

        let mut budget = self.load();
        budget.add_expense(expense);
        self.save(budget)?;
        Ok(true)
    }

    /// Remove the first expense with the given category
    pub fn remove_expense(&self, category: &str) -> FinplanResult<Expense> {
        let mut budget = self.load();
        let removed = budget
            .remove_expense(category)
            .ok_or_else(|| FinplanError::expense_not_found(category))?;
        self.save(budget)?;
        Ok(removed)
    }

    /// Remove all expenses, keeping the income
    pub fn clear_expenses(&self) -> FinplanResult<usize> {
        let mut budget = self.load();
        let count = budget.expenses.len();
        budget.clear_expenses();
        self.save(budget)?;
        Ok(count)
    }

    /// Metrics of the current budget
    pub fn metrics(&self, policy: &ScoringPolicy) -> BudgetMetrics {
        BudgetMetrics::compute_with_cap(&self.load(), policy.investable_ratio_cap)
    }

    /// Health score of the current budget
    pub fn health(&self, policy: &ScoringPolicy) -> HealthScore {
        policy.assess(&self.metrics(policy))
    }
}
