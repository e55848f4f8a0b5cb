//! History service
//!
//! Closing a month snapshots the current budget metrics into the history,
//! replacing any earlier snapshot of the same month.

use std::io::Write;

use tracing::{debug, info};

use crate::analysis::{ledger, BudgetMetrics, Trend};
use crate::error::FinplanResult;
use crate::export::export_history_csv;
use crate::models::{Budget, HistoryEntry, Period};
use crate::storage::{RecordStore, Resource};

/// Service for the monthly history
pub struct HistoryService<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> HistoryService<'a, S> {
    /// Create a new history service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Snapshots in storage order
    pub fn load(&self) -> Vec<HistoryEntry> {
        self.store.load(Resource::History, Vec::new())
    }

    /// Snapshots in chronological order
    pub fn list(&self) -> Vec<HistoryEntry> {
        ledger::sorted(&self.load())
    }

    /// Snapshot of one month, if recorded
    pub fn get(&self, period: Period) -> Option<HistoryEntry> {
        self.load().into_iter().find(|h| h.period == period)
    }

    /// Record the budget's metrics for `period`
    ///
    /// An existing snapshot for the same month is replaced.
    pub fn close_month(
        &self,
        period: Period,
        budget: &Budget,
        investable_cap: f64,
    ) -> FinplanResult<HistoryEntry> {
        let metrics = BudgetMetrics::compute_with_cap(budget, investable_cap);
        let entry = HistoryEntry::snapshot(period, &metrics);

        let history = self.load();
        let replaced = history.iter().any(|h| h.period == period);
        let updated = ledger::upsert(&history, entry.clone());
        self.store.save(Resource::History, &updated)?;

        if replaced {
            info!(%period, "replaced existing snapshot");
        } else {
            debug!(%period, entries = updated.len(), "recorded snapshot");
        }
        Ok(entry)
    }

    /// Trends over the recorded months
    pub fn trend(&self) -> Trend {
        ledger::trend(&self.load())
    }

    /// Write the history as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> FinplanResult<usize> {
        export_history_csv(&self.load(), writer)
    }
}
