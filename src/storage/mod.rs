//! Storage abstraction layer for collection-service records.
//!
//! This module separates data persistence from domain rules. The
//! `StorageProvider` trait defines pure data storage operations on JSON
//! records grouped by collection, so backends can be swapped without touching
//! the value objects or the use-cases.
//!
//! # Architecture
//!
//! The storage layer is responsible for:
//! - Pure PUT/GET/DELETE operations on JSON records
//! - Grouping records by collection (`neighborhoods`, `routes`, ...)
//! - Basic querying by column value
//!
//! The storage layer is NOT responsible for:
//! - Validating records (value objects do that when a record is read back)
//! - Uniqueness rules such as one subscriber per email
//! - Generating identifiers or timestamps
//!
//! At the storage level CREATE and UPDATE are the same operation: a record is
//! put at a key. Whether a put creates or replaces is decided by the caller.
//!
//! # Example Usage
//!
//! ```rust
//! use recycling_collection::storage::{StorageProvider, StorageKey, InMemoryStorage};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//!
//! let key = StorageKey::new("routes", "r-1");
//! let record = json!({
//!     "id": "r-1",
//!     "name": "Rota Centro",
//!     "collectionDays": "monday,thursday"
//! });
//! storage.put(key.clone(), record).await?;
//!
//! let retrieved = storage.get(key.clone()).await?;
//! assert!(retrieved.is_some());
//!
//! let was_deleted = storage.delete(key).await?;
//! assert!(was_deleted);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::StorageError;
pub use in_memory::{InMemoryStorage, InMemoryStorageStats};

use serde_json::Value;
use std::fmt;
use std::future::Future;

/// Key of a single record: `collection` → `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    collection: String,
    id: String,
}

impl StorageKey {
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Prefix selecting every record of a collection.
    pub fn prefix(collection: impl Into<String>) -> StoragePrefix {
        StoragePrefix {
            collection: collection.into(),
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// A prefix for querying all records of one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePrefix {
    collection: String,
}

impl StoragePrefix {
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

impl fmt::Display for StoragePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.collection)
    }
}

/// Core trait for storage providers that handle pure data persistence.
///
/// # Design Principles
///
/// - **PUT/GET/DELETE Model**: simple, fundamental operations
/// - **PUT Returns Data**: the stored record is returned so callers need no extra GET
/// - **DELETE Returns Boolean**: indicates whether the record existed
/// - **Async First**: all operations return `Send` futures
pub trait StorageProvider: Send + Sync {
    /// The error type returned by storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store `data` at `key`, replacing any existing record, and return what was stored.
    fn put(
        &self,
        key: StorageKey,
        data: Value,
    ) -> impl Future<Output = Result<Value, Self::Error>> + Send;

    /// `Some(record)` if the key exists.
    fn get(
        &self,
        key: StorageKey,
    ) -> impl Future<Output = Result<Option<Value>, Self::Error>> + Send;

    /// `true` if a record was removed, `false` if it didn't exist.
    fn delete(&self, key: StorageKey) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// List records of a collection with pagination.
    ///
    /// # Behavior
    /// - Results are ordered by record id
    /// - If `offset` exceeds the total count, an empty vector is returned
    /// - If `limit` is 0, an empty vector is returned
    fn list(
        &self,
        prefix: StoragePrefix,
        offset: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<(StorageKey, Value)>, Self::Error>> + Send;

    /// Find records whose `attribute` equals `value`.
    ///
    /// # Behavior
    /// - Exact string match; numbers and booleans are compared by their string form
    /// - Nested attributes use dot notation (`address.street`)
    /// - Results are ordered by record id and not paginated
    fn find_by_attribute(
        &self,
        prefix: StoragePrefix,
        attribute: &str,
        value: &str,
    ) -> impl Future<Output = Result<Vec<(StorageKey, Value)>, Self::Error>> + Send;

    fn exists(&self, key: StorageKey) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Number of records in a collection.
    fn count(
        &self,
        prefix: StoragePrefix,
    ) -> impl Future<Output = Result<usize, Self::Error>> + Send;
}
