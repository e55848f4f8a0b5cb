//! Investment CLI command
//!
//! Projects a monthly savings plan. Anything not given on the command line
//! comes from the suggested plan: a share of the current surplus plus the
//! configured rate, horizon and goal.

use clap::Args;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::error::FinplanResult;
use crate::models::InvestmentPlan;
use crate::reports::{Granularity, ProjectionReport};
use crate::services::BudgetService;
use crate::storage::RecordStore;

/// Arguments of the invest command
#[derive(Args, Debug, Default)]
pub struct InvestArgs {
    /// Monthly contribution (defaults to a share of the surplus)
    #[arg(short, long, allow_hyphen_values = true)]
    pub monthly: Option<String>,

    /// Expected annual return in percent
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Investment horizon in years
    #[arg(short, long)]
    pub years: Option<u32>,

    /// Savings goal
    #[arg(short, long)]
    pub goal: Option<String>,

    /// Show every month instead of one point per year
    #[arg(long)]
    pub monthly_points: bool,
}

impl InvestArgs {
    /// Apply the overrides on top of the suggested plan
    pub fn into_plan(self, suggested: InvestmentPlan) -> FinplanResult<InvestmentPlan> {
        let mut plan = suggested;
        if let Some(monthly) = self.monthly.as_deref() {
            plan.monthly_contribution = parse_amount(monthly)?;
        }
        if let Some(rate) = self.rate {
            plan.annual_return_rate = rate;
        }
        if let Some(years) = self.years {
            plan.duration_years = years;
        }
        if let Some(goal) = self.goal.as_deref() {
            plan.goal_amount = parse_amount(goal)?;
        }
        Ok(plan)
    }
}

/// Handle the invest command
pub fn handle_invest_command<S: RecordStore>(
    store: &S,
    settings: &Settings,
    args: InvestArgs,
) -> FinplanResult<()> {
    let metrics = BudgetService::new(store).metrics(&settings.scoring);
    let suggested = InvestmentPlan::suggested(&metrics, &settings.investment);

    let granularity = if args.monthly_points {
        Granularity::Monthly
    } else {
        Granularity::Yearly
    };
    let plan = args.into_plan(suggested)?;

    let report = ProjectionReport::generate(plan, granularity)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));

    Ok(())
}
