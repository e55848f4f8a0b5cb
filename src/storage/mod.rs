//! Storage layer for finplan
//!
//! Every persisted record lives in a named [`Resource`]. Services talk to a
//! [`RecordStore`] and never see a path: the JSON file store maps resources
//! to files under the data directory, the memory store keeps them in a map.
//!
//! Loading never fails. A missing or corrupt resource yields the caller's
//! default (the reason is logged). Saving fails loudly.

pub mod file_io;
pub mod memory;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

pub use file_io::{read_json, write_json_atomic, LoadError};
pub use memory::MemoryStore;

use crate::config::paths::FinplanPaths;
use crate::error::FinplanResult;

/// A logical persisted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Net income and fixed expenses
    Budget,
    /// Monthly snapshots
    History,
}

impl Resource {
    /// File name of the resource inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Budget => "budget.json",
            Self::History => "history.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Budget => "budget",
            Self::History => "history",
        })
    }
}

/// Load/save of whole records by resource
pub trait RecordStore {
    /// Load a record, substituting `default` if the resource is missing or
    /// cannot be decoded
    fn load<T: DeserializeOwned>(&self, resource: Resource, default: T) -> T;

    /// Replace the resource with `record`
    fn save<T: Serialize>(&self, resource: Resource, record: &T) -> FinplanResult<()>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn load<T: DeserializeOwned>(&self, resource: Resource, default: T) -> T {
        (**self).load(resource, default)
    }

    fn save<T: Serialize>(&self, resource: Resource, record: &T) -> FinplanResult<()> {
        (**self).save(resource, record)
    }
}

/// Log a load fallback and hand back the default
pub(crate) fn fall_back<T>(resource: Resource, error: LoadError, default: T) -> T {
    match error {
        LoadError::Missing => debug!(%resource, "resource missing, using default"),
        other => warn!(%resource, error = %other, "resource unusable, using default"),
    }
    default
}

/// JSON files under the data directory, one per resource
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the configured data directory
    pub fn new(paths: &FinplanPaths) -> Self {
        Self::at(paths.data_dir())
    }

    /// Create a store rooted at an explicit directory
    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory holding the resources
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Location of a resource
    pub fn path_of(&self, resource: Resource) -> PathBuf {
        self.data_dir.join(resource.file_name())
    }
}

impl RecordStore for JsonFileStore {
    fn load<T: DeserializeOwned>(&self, resource: Resource, default: T) -> T {
        let path = self.path_of(resource);
        match read_json(&path) {
            Ok(record) => {
                debug!(%resource, path = %path.display(), "loaded resource");
                record
            }
            Err(e) => fall_back(resource, e, default),
        }
    }

    fn save<T: Serialize>(&self, resource: Resource, record: &T) -> FinplanResult<()> {
        let path = self.path_of(resource);
        write_json_atomic(&path, record)?;
        debug!(%resource, path = %path.display(), "saved resource");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::MAX_AMOUNT_UNITS;
    use crate::models::{Budget, Expense, HistoryEntry, Money};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonFileStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinplanPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, JsonFileStore::new(&paths))
    }

    fn sample_budget() -> Budget {
        let mut budget = Budget::with_income(Money::from_units(3000));
        budget.add_expense(Expense::new("Rent", Money::from_units(1000)));
        budget
    }

    #[test]
    fn test_resource_locations() {
        let (temp_dir, store) = create_test_store();
        assert_eq!(
            store.path_of(Resource::Budget),
            temp_dir.path().join("data").join("budget.json")
        );
        assert_eq!(
            store.path_of(Resource::History),
            temp_dir.path().join("data").join("history.json")
        );
    }

    #[test_log::test]
    fn test_missing_resource_returns_default() {
        let (_temp_dir, store) = create_test_store();

        let budget = store.load(Resource::Budget, sample_budget());
        assert_eq!(budget, sample_budget());

        let history: Vec<HistoryEntry> = store.load(Resource::History, Vec::new());
        assert!(history.is_empty());
    }

    #[test_log::test]
    fn test_corrupt_resource_returns_default() {
        let (_temp_dir, store) = create_test_store();
        let path = store.path_of(Resource::Budget);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ \"netto\": ").unwrap();

        let budget = store.load(Resource::Budget, Budget::default());
        assert_eq!(budget, Budget::default());

        // the corrupt file is left alone until the next save
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ \"netto\": ");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_temp_dir, store) = create_test_store();

        store.save(Resource::Budget, &sample_budget()).unwrap();
        let loaded = store.load(Resource::Budget, Budget::default());
        assert_eq!(loaded, sample_budget());
    }

    #[test]
    fn test_resave_leaves_content_unchanged() {
        let (_temp_dir, store) = create_test_store();
        let path = store.path_of(Resource::Budget);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{"netto": 3000, "kosten": [{"Kategorie": "Rent", "Betrag": 1000.5}]}"#,
        )
        .unwrap();

        let before: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let budget = store.load(Resource::Budget, Budget::default());
        store.save(Resource::Budget, &budget).unwrap();
        let after: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(
            serde_json::from_value::<Budget>(before).unwrap(),
            serde_json::from_value::<Budget>(after).unwrap()
        );
    }

    #[test]
    fn test_history_resave_keeps_legacy_entries() {
        let (_temp_dir, store) = create_test_store();
        let path = store.path_of(Resource::History);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"[
                {"datum": "2025-02", "einkommen": 3000, "kosten": 1400, "uebrig": 1600, "sparquote": 0.5333},
                {"datum": "2025-01", "einkommen": 2800.5, "kosten": 1400, "uebrig": 1400.5}
            ]"#,
        )
        .unwrap();

        let before: Vec<HistoryEntry> = store.load(Resource::History, Vec::new());
        assert_eq!(before.len(), 2);
        store.save(Resource::History, &before).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let after: Vec<HistoryEntry> = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(before, after);

        // storage order is kept and the legacy entry stays without a rate
        assert_eq!(raw[0]["datum"], "2025-02");
        assert_eq!(raw[0]["sparquote"], 0.5333);
        assert!(raw[1].get("sparquote").is_none());
        assert_eq!(raw[1]["einkommen"], 2800.5);
    }

    #[test_log::test]
    fn test_oversized_amount_is_treated_as_corrupt() {
        let raw = r#"{"netto": 1000, "kosten": [
            {"Kategorie": "A", "Betrag": 6e16},
            {"Kategorie": "B", "Betrag": 6e16}
        ]}"#;

        let (_temp_dir, store) = create_test_store();
        let path = store.path_of(Resource::Budget);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, raw).unwrap();
        let budget = store.load(Resource::Budget, Budget::default());
        assert_eq!(budget, Budget::default());

        let memory = MemoryStore::new().with_raw(Resource::Budget, raw);
        let budget = memory.load(Resource::Budget, Budget::default());
        assert_eq!(budget, Budget::default());
        let metrics = crate::analysis::BudgetMetrics::compute(&budget);
        assert!(metrics.total_expenses.is_zero());
    }

    #[test]
    fn test_largest_stored_amounts_sum_without_overflow() {
        let mut budget = Budget::with_income(Money::from_units(1000));
        for name in ["A", "B", "C"] {
            budget.add_expense(Expense::new(name, Money::from_units(MAX_AMOUNT_UNITS)));
        }
        let store = MemoryStore::new();
        store.save(Resource::Budget, &budget).unwrap();

        let loaded = store.load(Resource::Budget, Budget::default());
        assert_eq!(loaded, budget);
        let metrics = crate::analysis::BudgetMetrics::compute(&loaded);
        assert_eq!(metrics.total_expenses, Money::from_units(3 * MAX_AMOUNT_UNITS));
        assert!(metrics.surplus.is_negative());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let store = JsonFileStore::at(blocker.join("data"));

        let result = store.save(Resource::History, &Vec::<HistoryEntry>::new());
        assert!(matches!(result, Err(crate::error::FinplanError::Storage(_))));
    }

    #[test]
    fn test_store_by_reference() {
        let (_temp_dir, store) = create_test_store();
        let by_ref = &store;

        by_ref.save(Resource::Budget, &sample_budget()).unwrap();
        assert_eq!(by_ref.load(Resource::Budget, Budget::default()), sample_budget());
    }
}
