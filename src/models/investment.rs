//! Investment plan model
//!
//! Plans are never persisted; they are assembled per request from command
//! arguments and the configured defaults.

use super::money::Money;
use crate::analysis::budget::BudgetMetrics;
use crate::config::settings::InvestmentDefaults;

/// Validation errors for investment plans
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanValidationError {
    #[error("Monthly contribution cannot be negative")]
    NegativeContribution,
    #[error("Annual return rate must be between 0 and {}%, got {0}", MAX_ANNUAL_RETURN_RATE)]
    InvalidReturnRate(f64),
    #[error("Duration must be between {} and {} years, got {0}", MIN_DURATION_YEARS, MAX_DURATION_YEARS)]
    InvalidDuration(u32),
}

/// Highest accepted annual return in percent
pub const MAX_ANNUAL_RETURN_RATE: f64 = 20.0;
/// Shortest accepted horizon in years
pub const MIN_DURATION_YEARS: u32 = 1;
/// Longest accepted horizon in years
pub const MAX_DURATION_YEARS: u32 = 50;

/// Inputs for a compound-growth projection
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentPlan {
    /// Amount invested at the end of every month
    pub monthly_contribution: Money,
    /// Nominal annual return in percent, e.g. 6.0
    pub annual_return_rate: f64,
    /// Investment horizon in years
    pub duration_years: u32,
    /// Target amount for the goal estimate
    pub goal_amount: Money,
}

impl InvestmentPlan {
    /// Plan seeded from the current budget: a share of the surplus is
    /// invested, never less than zero.
    pub fn suggested(metrics: &BudgetMetrics, defaults: &InvestmentDefaults) -> Self {
        let contribution =
            Money::from_amount(metrics.surplus.as_f64() * defaults.contribution_share).non_negative();

        Self {
            monthly_contribution: contribution,
            annual_return_rate: defaults.annual_return_rate,
            duration_years: defaults.duration_years,
            goal_amount: defaults.goal_amount,
        }
    }

    /// Number of monthly periods
    pub fn periods(&self) -> u32 {
        self.duration_years.saturating_mul(12)
    }

    /// Validate the plan
    pub fn validate(&self) -> Result<(), PlanValidationError> {
        if self.monthly_contribution.is_negative() {
            return Err(PlanValidationError::NegativeContribution);
        }
        if !(0.0..=MAX_ANNUAL_RETURN_RATE).contains(&self.annual_return_rate) {
            return Err(PlanValidationError::InvalidReturnRate(
                self.annual_return_rate,
            ));
        }
        if !(MIN_DURATION_YEARS..=MAX_DURATION_YEARS).contains(&self.duration_years) {
            return Err(PlanValidationError::InvalidDuration(self.duration_years));
        }
        Ok(())
    }
}
