//! Investment projector
//!
//! Compound growth of a constant monthly contribution (an ordinary annuity:
//! contributions land at the end of each month) and the inverse problem of
//! how long it takes to reach a target amount.

use std::iter::FusedIterator;

use crate::models::{InvestmentPlan, Money};

/// Failures of the goal solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    #[error("cannot solve: provide a positive contribution and return rate")]
    CannotSolve,
    #[error("goal unreachable under the given parameters")]
    GoalUnreachable,
}

/// Convert a nominal annual rate in percent to a monthly rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Future value after `periods` monthly contributions
///
/// A zero rate is its own branch: the value is exactly contribution x periods,
/// computed in cents so no floating drift creeps in.
pub fn future_value(contribution: Money, monthly_rate: f64, periods: u32) -> Money {
    if monthly_rate == 0.0 {
        return contribution * i64::from(periods);
    }
    let growth = ((1.0 + monthly_rate).powf(f64::from(periods)) - 1.0) / monthly_rate;
    Money::from_amount(contribution.as_f64() * growth)
}

/// Outcome of a projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub monthly_rate: f64,
    pub periods: u32,
    pub future_value: Money,
    pub total_contributed: Money,
    pub gain: Money,
}

/// Project a plan to the end of its horizon
pub fn project(plan: &InvestmentPlan) -> Projection {
    let rate = monthly_rate(plan.annual_return_rate);
    let periods = plan.periods();
    let future_value = future_value(plan.monthly_contribution, rate, periods);
    let total_contributed = plan.monthly_contribution * i64::from(periods);

    Projection {
        monthly_rate: rate,
        periods,
        future_value,
        total_contributed,
        gain: future_value - total_contributed,
    }
}

/// Value of the investment after a given month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPoint {
    /// 1-based month index
    pub month: u32,
    pub value: Money,
}

/// Month-by-month growth curve of a plan
///
/// Cheap to hold: points are computed on demand, and every call to
/// [`GrowthTimeline::iter`] starts again from month 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthTimeline {
    contribution: Money,
    monthly_rate: f64,
    periods: u32,
}

impl GrowthTimeline {
    pub fn new(contribution: Money, monthly_rate: f64, periods: u32) -> Self {
        Self {
            contribution,
            monthly_rate,
            periods,
        }
    }

    pub fn for_plan(plan: &InvestmentPlan) -> Self {
        Self::new(
            plan.monthly_contribution,
            monthly_rate(plan.annual_return_rate),
            plan.periods(),
        )
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.periods as usize
    }

    pub fn is_empty(&self) -> bool {
        self.periods == 0
    }

    /// Points for months 1..=periods
    pub fn iter(&self) -> GrowthPoints {
        GrowthPoints {
            timeline: *self,
            next_month: 1,
        }
    }

    /// Points at the end of each full year
    pub fn yearly(&self) -> impl Iterator<Item = GrowthPoint> {
        self.iter().skip(11).step_by(12)
    }
}

impl IntoIterator for &GrowthTimeline {
    type Item = GrowthPoint;
    type IntoIter = GrowthPoints;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`GrowthTimeline`]
#[derive(Debug, Clone)]
pub struct GrowthPoints {
    timeline: GrowthTimeline,
    next_month: u64,
}

impl Iterator for GrowthPoints {
    type Item = GrowthPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_month > u64::from(self.timeline.periods) {
            return None;
        }
        let month = self.next_month as u32;
        self.next_month += 1;

        Some(GrowthPoint {
            month,
            value: future_value(self.timeline.contribution, self.timeline.monthly_rate, month),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u64::from(self.timeline.periods) + 1).saturating_sub(self.next_month) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GrowthPoints {}

impl FusedIterator for GrowthPoints {}

/// Time needed to reach a goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalEstimate {
    pub months: f64,
}

impl GoalEstimate {
    pub fn years(&self) -> f64 {
        self.months / 12.0
    }
}

/// Solve the annuity equation for the number of months to reach `goal`
///
/// `months = ln(1 + goal * r / m) / ln(1 + r)`; needs a positive contribution
/// and a positive rate.
pub fn solve_goal(
    goal: Money,
    contribution: Money,
    monthly_rate: f64,
) -> Result<GoalEstimate, ProjectionError> {
    if !contribution.is_positive() || !monthly_rate.is_finite() || monthly_rate <= 0.0 {
        return Err(ProjectionError::CannotSolve);
    }

    let argument = 1.0 + goal.as_f64() * monthly_rate / contribution.as_f64();
    if argument <= 0.0 || !argument.is_finite() {
        return Err(ProjectionError::GoalUnreachable);
    }

    let months = argument.ln() / (1.0 + monthly_rate).ln();
    if !months.is_finite() {
        return Err(ProjectionError::GoalUnreachable);
    }

    Ok(GoalEstimate { months })
}

/// Goal estimate for a plan
pub fn solve_plan_goal(plan: &InvestmentPlan) -> Result<GoalEstimate, ProjectionError> {
    solve_goal(
        plan.goal_amount,
        plan.monthly_contribution,
        monthly_rate(plan.annual_return_rate),
    )
}
