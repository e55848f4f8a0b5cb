//! CSV export of the history
//!
//! One row per month in chronological order, amounts in currency units with
//! two decimals, for charting in a spreadsheet.

use std::io::Write;

use crate::analysis::ledger;
use crate::error::FinplanResult;
use crate::models::HistoryEntry;

/// Column headers of the history export
pub const HISTORY_HEADERS: [&str; 5] = ["period", "income", "expenses", "surplus", "savings_rate"];

/// Write the history as CSV, sorted by period
///
/// Returns the number of data rows written.
pub fn export_history_csv<W: Write>(history: &[HistoryEntry], writer: W) -> FinplanResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HISTORY_HEADERS)?;

    let entries = ledger::sorted(history);
    for entry in &entries {
        csv_writer.write_record([
            entry.period.to_string(),
            format!("{:.2}", entry.income.as_f64()),
            format!("{:.2}", entry.expenses.as_f64()),
            format!("{:.2}", entry.surplus.as_f64()),
            format!("{:.4}", entry.effective_savings_rate()),
        ])?;
    }

    csv_writer.flush()?;
    Ok(entries.len())
}
