//! Dashboard Report
//!
//! The current budget at a glance: income, expenses, surplus, the ratios
//! behind the health score, the score itself and where the money goes.

use crate::analysis::{expense_breakdown, BudgetMetrics, BudgetSituation, CategoryShare, HealthScore};
use crate::config::Settings;
use crate::display::{format_bar, format_money_colored, format_percentage, separator, truncate};
use crate::services::BudgetService;
use crate::storage::RecordStore;

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

/// Dashboard Report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub metrics: BudgetMetrics,
    pub health: HealthScore,
    pub situation: BudgetSituation,
    /// Expense share per category, largest first
    pub breakdown: Vec<CategoryShare>,
}

impl DashboardReport {
    /// Generate the dashboard for the stored budget
    pub fn generate<S: RecordStore>(store: &S, settings: &Settings) -> Self {
        let service = BudgetService::new(store);
        let budget = service.load();
        let metrics = BudgetMetrics::compute_with_cap(&budget, settings.scoring.investable_ratio_cap);

        let mut breakdown = expense_breakdown(&budget);
        breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self {
            health: settings.scoring.assess(&metrics),
            situation: metrics.situation(),
            metrics,
            breakdown,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let m = &self.metrics;
        let mut output = String::new();

        output.push_str("Financial Dashboard\n");
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');

        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Net income:",
            m.net_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Fixed expenses:",
            m.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Surplus:",
            format_money_colored(m.surplus, symbol)
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Savings rate:",
            format_percentage(m.savings_rate)
        ));
        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Fixed-cost ratio:",
            format_percentage(m.fixed_cost_ratio)
        ));
        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Investable ratio:",
            format_percentage(m.investable_ratio)
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        output.push_str(&format!("Health score: {}\n", self.health));
        output.push_str(&format!(
            "[{}]\n",
            format_bar(f64::from(self.health.value), 100.0, WIDTH - 2)
        ));
        output.push_str(self.situation.message());
        output.push('\n');

        if !self.breakdown.is_empty() {
            output.push('\n');
            output.push_str("Where the money goes\n");
            output.push_str(&separator(WIDTH));
            output.push('\n');

            for share in &self.breakdown {
                output.push_str(&format!(
                    "{:<16} {:>12} {} {:>6}\n",
                    truncate(&share.category, 16),
                    share.amount.format_with_symbol(symbol),
                    format_bar(share.share, 1.0, BAR_WIDTH),
                    format_percentage(share.share)
                ));
            }
        }

        output
    }
}
