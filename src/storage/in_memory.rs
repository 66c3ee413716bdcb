//! In-memory storage implementation.
//!
//! A thread-safe implementation of [`StorageProvider`] backed by nested
//! `HashMap`s behind a tokio `RwLock`. Suitable for tests, development and
//! embedding where persistence across restarts is not required.
//!
//! # Performance Characteristics
//!
//! * PUT/GET/DELETE/EXISTS: O(1) average case
//! * LIST with pagination: O(n log n) in the size of the collection (ids are sorted)
//! * FIND_BY_ATTRIBUTE and COUNT: O(n)
//!
//! # Example Usage
//!
//! ```rust
//! use recycling_collection::storage::{InMemoryStorage, StorageProvider, StorageKey};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//!
//! let key = StorageKey::new("subscribers", "s-1");
//! storage
//!     .put(key.clone(), json!({"id": "s-1", "email": "ana@example.com"}))
//!     .await?;
//!
//! let prefix = StorageKey::prefix("subscribers");
//! let found = storage.find_by_attribute(prefix, "email", "ana@example.com").await?;
//! assert_eq!(found.len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::storage::{StorageError, StorageKey, StoragePrefix, StorageProvider};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory storage: `collection` → `id` → `record`.
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    data: Arc<RwLock<HashMap<String, HashMap<String, Value>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get storage statistics for debugging and monitoring.
    pub async fn stats(&self) -> InMemoryStorageStats {
        let data_guard = self.data.read().await;
        InMemoryStorageStats {
            collection_count: data_guard.values().filter(|c| !c.is_empty()).count(),
            total_records: data_guard.values().map(HashMap::len).sum(),
        }
    }

    /// Clear all data (useful for testing).
    pub async fn clear(&self) {
        let mut data_guard = self.data.write().await;
        data_guard.clear();
    }

    /// Names of the collections holding at least one record, sorted.
    pub async fn list_collections(&self) -> Vec<String> {
        let data_guard = self.data.read().await;
        let mut collections: Vec<String> = data_guard
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        collections.sort();
        collections
    }

    /// Extract a nested attribute value from a record using dot notation.
    fn extract_attribute_value(data: &Value, attribute_path: &str) -> Option<String> {
        let mut current = data;

        for part in attribute_path.split('.') {
            current = match part.parse::<usize>() {
                Ok(index) => current.get(index)?,
                Err(_) => current.get(part)?,
            };
        }

        match current {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageProvider for InMemoryStorage {
    type Error = StorageError;

    async fn put(&self, key: StorageKey, data: Value) -> Result<Value, Self::Error> {
        if !data.is_object() {
            return Err(StorageError::invalid_data_with_cause(
                format!("Record {} must be a JSON object", key),
                "expected object",
            ));
        }

        let mut data_guard = self.data.write().await;
        data_guard
            .entry(key.collection().to_string())
            .or_default()
            .insert(key.id().to_string(), data.clone());

        Ok(data)
    }

    async fn get(&self, key: StorageKey) -> Result<Option<Value>, Self::Error> {
        let data_guard = self.data.read().await;

        let result = data_guard
            .get(key.collection())
            .and_then(|records| records.get(key.id()))
            .cloned();

        Ok(result)
    }

    async fn delete(&self, key: StorageKey) -> Result<bool, Self::Error> {
        let mut data_guard = self.data.write().await;

        let existed = data_guard
            .get_mut(key.collection())
            .map(|records| records.remove(key.id()).is_some())
            .unwrap_or(false);

        Ok(existed)
    }

    async fn list(
        &self,
        prefix: StoragePrefix,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<(StorageKey, Value)>, Self::Error> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let data_guard = self.data.read().await;

        let records = match data_guard.get(prefix.collection()) {
            Some(records) => records,
            None => return Ok(Vec::new()),
        };

        let mut ids: Vec<_> = records.keys().collect();
        ids.sort();

        let results = ids
            .into_iter()
            .skip(offset)
            .take(limit)
            .filter_map(|id| {
                records
                    .get(id)
                    .map(|data| (StorageKey::new(prefix.collection(), id), data.clone()))
            })
            .collect();

        Ok(results)
    }

    async fn find_by_attribute(
        &self,
        prefix: StoragePrefix,
        attribute: &str,
        value: &str,
    ) -> Result<Vec<(StorageKey, Value)>, Self::Error> {
        let data_guard = self.data.read().await;

        let records = match data_guard.get(prefix.collection()) {
            Some(records) => records,
            None => return Ok(Vec::new()),
        };

        let mut results: Vec<(StorageKey, Value)> = records
            .iter()
            .filter(|(_, record)| {
                Self::extract_attribute_value(record, attribute).as_deref() == Some(value)
            })
            .map(|(id, record)| (StorageKey::new(prefix.collection(), id), record.clone()))
            .collect();

        results.sort_by(|a, b| a.0.id().cmp(b.0.id()));

        Ok(results)
    }

    async fn exists(&self, key: StorageKey) -> Result<bool, Self::Error> {
        let data_guard = self.data.read().await;

        Ok(data_guard
            .get(key.collection())
            .is_some_and(|records| records.contains_key(key.id())))
    }

    async fn count(&self, prefix: StoragePrefix) -> Result<usize, Self::Error> {
        let data_guard = self.data.read().await;

        Ok(data_guard
            .get(prefix.collection())
            .map(HashMap::len)
            .unwrap_or(0))
    }
}

/// Statistics about the current state of in-memory storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryStorageStats {
    /// Number of collections with at least one record
    pub collection_count: usize,
    /// Total number of records across all collections
    pub total_records: usize,
}
