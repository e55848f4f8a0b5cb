//! Financial computations
//!
//! Pure functions over the models: budget ratios, the health score, compound
//! growth projections and history trends. None of these touch storage.

pub mod budget;
pub mod health;
pub mod ledger;
pub mod projection;

pub use budget::{expense_breakdown, BudgetMetrics, BudgetSituation, CategoryShare};
pub use health::{HealthScore, HealthTier, ScoringPolicy};
pub use ledger::{Insight, Trend, TrendDirection};
pub use projection::{GoalEstimate, GrowthTimeline, Projection, ProjectionError};
