//! Export module for finplan
//!
//! CSV export of the monthly history for external charting.

pub mod csv;

pub use self::csv::{export_history_csv, HISTORY_HEADERS};
