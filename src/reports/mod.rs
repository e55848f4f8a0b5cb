//! Reports module for finplan
//!
//! Provides the terminal reports: the budget dashboard, history trends and
//! investment projections.

pub mod dashboard;
pub mod projection;
pub mod trend;

pub use dashboard::DashboardReport;
pub use projection::{Granularity, ProjectionReport};
pub use trend::TrendReport;
