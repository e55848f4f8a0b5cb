//! Trend Report
//!
//! Month-over-month surplus changes and the rolling savings rate over the
//! recorded history.

use crate::analysis::ledger::{self, RollingAverage, SurplusTrend};
use crate::analysis::{Insight, Trend, TrendDirection};
use crate::display::{format_history_table, format_percentage};
use crate::models::HistoryEntry;
use crate::services::HistoryService;
use crate::storage::RecordStore;

/// Trend Report
#[derive(Debug, Clone)]
pub struct TrendReport {
    /// Snapshots in chronological order
    pub entries: Vec<HistoryEntry>,
    pub trend: Trend,
}

impl TrendReport {
    /// Generate the report from the stored history
    pub fn generate<S: RecordStore>(store: &S) -> Self {
        Self::from_history(&HistoryService::new(store).load())
    }

    /// Generate the report from snapshots in any order
    pub fn from_history(history: &[HistoryEntry]) -> Self {
        Self {
            entries: ledger::sorted(history),
            trend: ledger::trend(history),
        }
    }

    /// One-line summary of the latest surplus change, if there is one
    pub fn surplus_message(&self, symbol: &str) -> Option<String> {
        let SurplusTrend { deltas, direction } = self.trend.surplus.ready()?;
        let last = deltas.last()?;
        let verb = match direction {
            TrendDirection::Rising => "rose",
            TrendDirection::Falling => "fell",
        };
        Some(format!(
            "Surplus {} by {} since last month.",
            verb,
            last.delta.abs().format_with_symbol(symbol)
        ))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("History\n");
        output.push_str(&format_history_table(&self.entries, symbol));
        output.push_str("\n\n");

        match &self.trend.surplus {
            Insight::Ready(surplus) => {
                output.push_str(&format!("Surplus trend: {}\n", surplus.direction));
                for delta in &surplus.deltas {
                    let sign = if delta.delta.is_negative() { "-" } else { "+" };
                    output.push_str(&format!(
                        "  {}  {}{}\n",
                        delta.period,
                        sign,
                        delta.delta.abs().format_with_symbol(symbol)
                    ));
                }
                if let Some(message) = self.surplus_message(symbol) {
                    output.push_str(&message);
                    output.push('\n');
                }
            }
            Insight::InsufficientData { required, available } => {
                output.push_str(&insufficient("Surplus trend", *required, *available));
            }
        }

        output.push('\n');
        match &self.trend.savings_rate {
            Insight::Ready(averages) => {
                output.push_str("Savings rate, 3-month average\n");
                for RollingAverage { period, average } in averages {
                    output.push_str(&format!("  {}  {}\n", period, format_percentage(*average)));
                }
            }
            Insight::InsufficientData { required, available } => {
                output.push_str(&insufficient("Savings rate average", *required, *available));
            }
        }

        output
    }
}

fn insufficient(what: &str, required: usize, available: usize) -> String {
    format!(
        "{}: not enough data (needs {} months, have {})\n",
        what, required, available
    )
}
