//! History ledger
//!
//! Keyed-by-month snapshot list with replace-on-save semantics, plus trend
//! derivation over the chronologically sorted snapshots.

use std::fmt;

use crate::models::{HistoryEntry, Money, Period};

/// Entries needed before a month-over-month surplus delta exists
pub const MIN_ENTRIES_FOR_DELTA: usize = 2;
/// Width of the rolling savings-rate window
pub const ROLLING_WINDOW: usize = 3;

/// Insert `entry`, replacing any snapshot for the same period
///
/// The replacement is appended at the end; the result is not re-sorted.
pub fn upsert(history: &[HistoryEntry], entry: HistoryEntry) -> Vec<HistoryEntry> {
    let mut updated: Vec<HistoryEntry> = history
        .iter()
        .filter(|h| h.period != entry.period)
        .cloned()
        .collect();
    updated.push(entry);
    updated
}

/// Sort snapshots chronologically
pub fn sort_by_period(history: &mut [HistoryEntry]) {
    history.sort_by_key(|h| h.period);
}

/// Chronologically sorted copy
pub fn sorted(history: &[HistoryEntry]) -> Vec<HistoryEntry> {
    let mut entries = history.to_vec();
    sort_by_period(&mut entries);
    entries
}

/// Either a derived value or the reason it cannot be derived yet
#[derive(Debug, Clone, PartialEq)]
pub enum Insight<T> {
    InsufficientData { required: usize, available: usize },
    Ready(T),
}

impl<T> Insight<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::InsufficientData { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Direction of the latest month-over-month surplus change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Rising,
    Falling,
}

impl TrendDirection {
    /// Only a strictly positive delta counts as rising
    pub fn of(delta: Money) -> Self {
        if delta.is_positive() {
            Self::Rising
        } else {
            Self::Falling
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
        })
    }
}

/// Surplus change from the previous snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodDelta {
    pub period: Period,
    pub delta: Money,
}

/// Month-over-month surplus changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurplusTrend {
    /// One delta per entry after the first
    pub deltas: Vec<PeriodDelta>,
    pub direction: TrendDirection,
}

impl SurplusTrend {
    pub fn last(&self) -> Option<&PeriodDelta> {
        self.deltas.last()
    }
}

/// Average savings rate over the window ending at `period`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingAverage {
    pub period: Period,
    pub average: f64,
}

/// Trends over the history
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    pub surplus: Insight<SurplusTrend>,
    pub savings_rate: Insight<Vec<RollingAverage>>,
}

/// Derive trends from the history
///
/// The entries are sorted by period first, so callers may pass the history
/// in storage order.
pub fn trend(history: &[HistoryEntry]) -> Trend {
    let entries = sorted(history);

    Trend {
        surplus: surplus_trend(&entries),
        savings_rate: rolling_savings_rate(&entries),
    }
}

fn surplus_trend(entries: &[HistoryEntry]) -> Insight<SurplusTrend> {
    if entries.len() < MIN_ENTRIES_FOR_DELTA {
        return Insight::InsufficientData {
            required: MIN_ENTRIES_FOR_DELTA,
            available: entries.len(),
        };
    }

    let deltas: Vec<PeriodDelta> = entries
        .windows(2)
        .map(|pair| PeriodDelta {
            period: pair[1].period,
            delta: pair[1].surplus - pair[0].surplus,
        })
        .collect();

    let direction = deltas
        .last()
        .map(|d| TrendDirection::of(d.delta))
        .unwrap_or(TrendDirection::Falling);

    Insight::Ready(SurplusTrend { deltas, direction })
}

fn rolling_savings_rate(entries: &[HistoryEntry]) -> Insight<Vec<RollingAverage>> {
    if entries.len() < ROLLING_WINDOW {
        return Insight::InsufficientData {
            required: ROLLING_WINDOW,
            available: entries.len(),
        };
    }

    let averages = entries
        .windows(ROLLING_WINDOW)
        .map(|window| {
            let sum: f64 = window.iter().map(HistoryEntry::effective_savings_rate).sum();
            RollingAverage {
                period: window[ROLLING_WINDOW - 1].period,
                average: sum / ROLLING_WINDOW as f64,
            }
        })
        .collect();

    Insight::Ready(averages)
}
