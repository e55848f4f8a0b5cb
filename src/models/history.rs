//! Monthly history snapshot model
//!
//! A history entry freezes the budget metrics of one month when the user
//! closes that month. The history file is a plain JSON array of entries.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::period::Period;
use crate::analysis::budget::{savings_rate, BudgetMetrics};

/// Snapshot of the budget metrics for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The month this snapshot belongs to (unique key)
    #[serde(rename = "datum")]
    pub period: Period,

    /// Net income at the time of the snapshot
    #[serde(rename = "einkommen", default)]
    pub income: Money,

    /// Total fixed expenses
    #[serde(rename = "kosten", default)]
    pub expenses: Money,

    /// Income minus expenses
    #[serde(rename = "uebrig", default)]
    pub surplus: Money,

    /// Savings rate; absent in snapshots written by older versions
    #[serde(rename = "sparquote", default, skip_serializing_if = "Option::is_none")]
    pub savings_rate: Option<f64>,
}

impl HistoryEntry {
    /// Build a snapshot from freshly computed metrics
    pub fn snapshot(period: Period, metrics: &BudgetMetrics) -> Self {
        Self {
            period,
            income: metrics.net_income,
            expenses: metrics.total_expenses,
            surplus: metrics.surplus,
            savings_rate: Some(metrics.savings_rate),
        }
    }

    /// The stored savings rate, or one derived from income and surplus
    pub fn effective_savings_rate(&self) -> f64 {
        self.savings_rate
            .filter(|rate| rate.is_finite())
            .unwrap_or_else(|| savings_rate(self.surplus, self.income))
    }
}
