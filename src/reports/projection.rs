//! Investment Projection Report
//!
//! Future value of a monthly savings plan, its growth curve and how long it
//! takes to reach the savings goal.

use crate::analysis::projection::{self, GrowthPoint, GrowthTimeline};
use crate::analysis::{GoalEstimate, Projection, ProjectionError};
use crate::display::separator;
use crate::error::{FinplanError, FinplanResult};
use crate::models::InvestmentPlan;

const WIDTH: usize = 60;

/// Granularity of the growth table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// One point at the end of each full year
    #[default]
    Yearly,
    /// One point per month
    Monthly,
}

/// Investment Projection Report
#[derive(Debug, Clone)]
pub struct ProjectionReport {
    pub plan: InvestmentPlan,
    pub projection: Projection,
    pub points: Vec<GrowthPoint>,
    pub goal: Result<GoalEstimate, ProjectionError>,
}

impl ProjectionReport {
    /// Generate the report for a plan
    pub fn generate(plan: InvestmentPlan, granularity: Granularity) -> FinplanResult<Self> {
        plan.validate()
            .map_err(|e| FinplanError::Validation(e.to_string()))?;

        let timeline = GrowthTimeline::for_plan(&plan);
        let points = match granularity {
            Granularity::Yearly => timeline.yearly().collect(),
            Granularity::Monthly => timeline.iter().collect(),
        };

        Ok(Self {
            projection: projection::project(&plan),
            goal: projection::solve_plan_goal(&plan),
            plan,
            points,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let p = &self.projection;
        let mut output = String::new();

        output.push_str("Investment Projection\n");
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{} per month at {:.2}% for {} years ({} months)\n",
            self.plan.monthly_contribution.format_with_symbol(symbol),
            self.plan.annual_return_rate,
            self.plan.duration_years,
            p.periods
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Future value:",
            p.future_value.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Total contributed:",
            p.total_contributed.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<22}{:>16}\n",
            "Gain:",
            p.gain.format_with_symbol(symbol)
        ));

        if !self.points.is_empty() {
            output.push('\n');
            output.push_str(&format!("{:>8}  {:>16}\n", "Month", "Value"));
            output.push_str(&separator(28));
            output.push('\n');
            for point in &self.points {
                output.push_str(&format!(
                    "{:>8}  {:>16}\n",
                    point.month,
                    point.value.format_with_symbol(symbol)
                ));
            }
        }

        output.push('\n');
        let goal = self.plan.goal_amount.format_with_symbol(symbol);
        match &self.goal {
            Ok(estimate) => output.push_str(&format!(
                "Goal of {} reached after {:.1} years ({:.0} months).\n",
                goal,
                estimate.years(),
                estimate.months.ceil()
            )),
            Err(e) => output.push_str(&format!("Goal of {}: {}\n", goal, e)),
        }

        output
    }
}
