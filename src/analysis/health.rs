//! Financial health score
//!
//! A heuristic 0-100 score built from three saturating components: savings
//! rate, fixed-cost ratio and investable ratio. The weights and breakpoints
//! are policy, kept in [`ScoringPolicy`] so they can be tuned from settings
//! without touching the scoring structure.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::budget::{BudgetMetrics, INVESTABLE_RATIO_CAP};

/// Savings rate at which the savings component saturates
pub const SAVINGS_RATE_TARGET: f64 = 0.20;
/// Fixed-cost ratio at which the fixed-cost component drops to zero
pub const FIXED_COST_CEILING: f64 = 0.70;
/// Investable ratio at which the investment component saturates
pub const INVESTABLE_RATIO_TARGET: f64 = 0.10;

pub const SAVINGS_WEIGHT: u32 = 40;
pub const FIXED_COST_WEIGHT: u32 = 30;
pub const INVESTMENT_WEIGHT: u32 = 30;

/// Lowest score rated "Good"
pub const GOOD_THRESHOLD: u8 = 80;
/// Lowest score rated "Moderate"
pub const MODERATE_THRESHOLD: u8 = 50;

/// Weights and breakpoints of the health score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub savings_rate_target: f64,
    pub fixed_cost_ceiling: f64,
    pub investable_ratio_target: f64,
    pub investable_ratio_cap: f64,
    pub savings_weight: u32,
    pub fixed_cost_weight: u32,
    pub investment_weight: u32,
    pub good_threshold: u8,
    pub moderate_threshold: u8,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            savings_rate_target: SAVINGS_RATE_TARGET,
            fixed_cost_ceiling: FIXED_COST_CEILING,
            investable_ratio_target: INVESTABLE_RATIO_TARGET,
            investable_ratio_cap: INVESTABLE_RATIO_CAP,
            savings_weight: SAVINGS_WEIGHT,
            fixed_cost_weight: FIXED_COST_WEIGHT,
            investment_weight: INVESTMENT_WEIGHT,
            good_threshold: GOOD_THRESHOLD,
            moderate_threshold: MODERATE_THRESHOLD,
        }
    }
}

/// Reasons a scoring policy is rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("score weights must sum to 100, got {0}")]
    WeightSum(u32),
    #[error("{name} must be a positive number, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("good threshold ({good}) must be above moderate threshold ({moderate})")]
    Thresholds { good: u8, moderate: u8 },
}

impl ScoringPolicy {
    /// Check that the policy keeps the score within 0..=100
    pub fn validate(&self) -> Result<(), PolicyError> {
        let weights = self
            .savings_weight
            .saturating_add(self.fixed_cost_weight)
            .saturating_add(self.investment_weight);
        if weights != 100 {
            return Err(PolicyError::WeightSum(weights));
        }

        for (name, value) in [
            ("savings_rate_target", self.savings_rate_target),
            ("fixed_cost_ceiling", self.fixed_cost_ceiling),
            ("investable_ratio_target", self.investable_ratio_target),
            ("investable_ratio_cap", self.investable_ratio_cap),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PolicyError::NonPositive { name, value });
            }
        }

        if self.good_threshold <= self.moderate_threshold || self.good_threshold > 100 {
            return Err(PolicyError::Thresholds {
                good: self.good_threshold,
                moderate: self.moderate_threshold,
            });
        }

        Ok(())
    }

    /// Composite score in 0..=100
    ///
    /// Each component saturates independently; the sum is rounded half to
    /// even.
    pub fn score(&self, savings_rate: f64, fixed_cost_ratio: f64, investable_ratio: f64) -> u8 {
        let savings = saturate(savings_rate / self.savings_rate_target) * self.savings_weight as f64;
        let fixed_cost = saturate((self.fixed_cost_ceiling - fixed_cost_ratio) / self.fixed_cost_ceiling)
            * self.fixed_cost_weight as f64;
        let investment = saturate(investable_ratio / self.investable_ratio_target)
            * self.investment_weight as f64;

        (savings + fixed_cost + investment).round_ties_even().clamp(0.0, 100.0) as u8
    }

    /// Tier label for a score
    pub fn tier(&self, score: u8) -> HealthTier {
        if score >= self.good_threshold {
            HealthTier::Good
        } else if score >= self.moderate_threshold {
            HealthTier::Moderate
        } else {
            HealthTier::Critical
        }
    }

    /// Score and tier for a set of metrics
    pub fn assess(&self, metrics: &BudgetMetrics) -> HealthScore {
        let value = self.score(
            metrics.savings_rate,
            metrics.fixed_cost_ratio,
            metrics.investable_ratio,
        );
        HealthScore {
            value,
            tier: self.tier(value),
        }
    }
}

/// Clamp to 0..=1, mapping NaN to 0
fn saturate(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Score with the default policy
pub fn score(savings_rate: f64, fixed_cost_ratio: f64, investable_ratio: f64) -> u8 {
    ScoringPolicy::default().score(savings_rate, fixed_cost_ratio, investable_ratio)
}

/// Three-level rating of a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthTier {
    Critical,
    Moderate,
    Good,
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Critical => "Critical",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
        };
        f.pad(label)
    }
}

/// A computed health score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthScore {
    pub value: u8,
    pub tier: HealthTier,
}

impl fmt::Display for HealthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100 ({})", self.value, self.tier)
    }
}
