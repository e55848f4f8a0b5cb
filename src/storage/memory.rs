//! In-memory record store
//!
//! Holds each resource as its serialized JSON text so loads go through the
//! same decode path (and the same fallback rules) as the file store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::{fall_back, LoadError, RecordStore, Resource};
use crate::error::{FinplanError, FinplanResult};

/// Record store backed by a map of JSON documents
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<HashMap<Resource, String>>,
    read_only: Cell<bool>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a resource with raw text, valid JSON or not
    pub fn with_raw(self, resource: Resource, raw: impl Into<String>) -> Self {
        self.documents.borrow_mut().insert(resource, raw.into());
        self
    }

    /// Make every subsequent save fail
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Raw text currently held for a resource
    pub fn raw(&self, resource: Resource) -> Option<String> {
        self.documents.borrow().get(&resource).cloned()
    }
}

impl RecordStore for MemoryStore {
    fn load<T: DeserializeOwned>(&self, resource: Resource, default: T) -> T {
        let documents = self.documents.borrow();
        let Some(raw) = documents.get(&resource) else {
            return fall_back(resource, LoadError::Missing, default);
        };
        match serde_json::from_str(raw) {
            Ok(record) => record,
            Err(e) => fall_back(resource, LoadError::Corrupt(e), default),
        }
    }

    fn save<T: Serialize>(&self, resource: Resource, record: &T) -> FinplanResult<()> {
        if self.read_only.get() {
            return Err(FinplanError::Storage(format!(
                "Store is read-only, cannot save {}",
                resource
            )));
        }
        let raw = serde_json::to_string_pretty(record)
            .map_err(|e| FinplanError::Storage(format!("Failed to serialize data: {}", e)))?;
        debug!(%resource, bytes = raw.len(), "stored resource in memory");
        self.documents.borrow_mut().insert(resource, raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money};

    #[test]
    fn test_empty_store_gives_default() {
        let store = MemoryStore::new();
        let budget = store.load(Resource::Budget, Budget::default());
        assert_eq!(budget, Budget::default());
        assert!(store.raw(Resource::Budget).is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let budget = Budget::with_income(Money::from_units(2500));

        store.save(Resource::Budget, &budget).unwrap();
        assert_eq!(store.load(Resource::Budget, Budget::default()), budget);
        assert!(store.raw(Resource::History).is_none());
    }

    #[test_log::test]
    fn test_corrupt_raw_gives_default() {
        let store = MemoryStore::new().with_raw(Resource::Budget, "[not a budget");
        assert_eq!(store.load(Resource::Budget, Budget::default()), Budget::default());
    }

    #[test]
    fn test_read_only_save_fails_and_keeps_content() {
        let store = MemoryStore::new();
        store
            .save(Resource::Budget, &Budget::with_income(Money::from_units(1)))
            .unwrap();
        let before = store.raw(Resource::Budget);

        store.set_read_only(true);
        let result = store.save(Resource::Budget, &Budget::default());

        assert!(matches!(result, Err(FinplanError::Storage(_))));
        assert_eq!(store.raw(Resource::Budget), before);
    }
}
