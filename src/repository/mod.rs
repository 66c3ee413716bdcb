//! Repository layer mapping aggregates onto a pluggable [`StorageProvider`].
//!
//! Each aggregate implements [`Persistable`], naming its collection and its
//! flat record type. [`Repository`] serializes records to JSON for the storage
//! backend and rebuilds aggregates through their value objects on read.
//!
//! # Example Usage
//!
//! ```rust
//! use recycling_collection::domain::Neighborhood;
//! use recycling_collection::domain::value_objects::EntityName;
//! use recycling_collection::repository::Repository;
//! use recycling_collection::storage::InMemoryStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = Repository::new(InMemoryStorage::new());
//!
//! let centro = Neighborhood::new(EntityName::new("Centro")?);
//! repository.save(&centro).await?;
//!
//! let loaded: Neighborhood = repository.get(&centro.id).await?;
//! assert_eq!(loaded, centro);
//! # Ok(())
//! # }
//! ```

pub mod records;

pub use records::{
    AddressColumns, AdministratorRecord, EcopointRecord, NeighborhoodRecord,
    ProblemReportRecord, RouteRecord, SubscriberRecord,
};

use crate::error::{RecyclingError, RecyclingResult};
use crate::storage::{StorageError, StorageKey, StorageProvider};
use log::{debug, trace, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// An aggregate that can be stored as a flat record.
pub trait Persistable: Sized + Send + Sync {
    /// Storage collection holding this aggregate.
    const COLLECTION: &'static str;
    /// Name used in not-found errors.
    const ENTITY: &'static str;

    type Record: Serialize + DeserializeOwned;

    fn id(&self) -> &str;

    fn to_record(&self) -> Self::Record;

    /// Rebuild the aggregate, re-validating every value object.
    fn from_record(record: Self::Record) -> RecyclingResult<Self>;
}

/// Typed access to aggregates over any storage backend.
#[derive(Debug, Clone)]
pub struct Repository<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> Repository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn storage_error(operation: &str, error: S::Error) -> RecyclingError {
        RecyclingError::Storage(StorageError::internal_with_source(
            format!("Storage error during {}", operation),
            Box::new(error),
        ))
    }

    fn decode<E: Persistable>(key: &StorageKey, data: Value) -> RecyclingResult<E> {
        let record: E::Record = serde_json::from_value(data).map_err(|e| {
            RecyclingError::Storage(StorageError::data_corruption(
                E::COLLECTION,
                key.id(),
                e.to_string(),
            ))
        })?;
        E::from_record(record)
    }

    /// Insert or replace an aggregate.
    pub async fn save<E: Persistable>(&self, entity: &E) -> RecyclingResult<()> {
        let key = StorageKey::new(E::COLLECTION, entity.id());
        let data = serde_json::to_value(entity.to_record())?;
        trace!("Saving {}: {}", key, data);

        self.storage
            .put(key, data)
            .await
            .map_err(|e| Self::storage_error("save", e))?;
        Ok(())
    }

    pub async fn find<E: Persistable>(&self, id: &str) -> RecyclingResult<Option<E>> {
        let key = StorageKey::new(E::COLLECTION, id);
        debug!("Loading {}", key);

        let data = self
            .storage
            .get(key.clone())
            .await
            .map_err(|e| Self::storage_error("get", e))?;

        match data {
            Some(data) => Self::decode(&key, data).map(Some),
            None => {
                debug!("{} not found", key);
                Ok(None)
            }
        }
    }

    /// Like [`Repository::find`], failing with `NotFound` when absent.
    pub async fn get<E: Persistable>(&self, id: &str) -> RecyclingResult<E> {
        self.find(id)
            .await?
            .ok_or_else(|| RecyclingError::not_found(E::ENTITY, id))
    }

    pub async fn exists<E: Persistable>(&self, id: &str) -> RecyclingResult<bool> {
        self.storage
            .exists(StorageKey::new(E::COLLECTION, id))
            .await
            .map_err(|e| Self::storage_error("exists", e))
    }

    /// A page of aggregates ordered by id.
    pub async fn list<E: Persistable>(
        &self,
        offset: usize,
        limit: usize,
    ) -> RecyclingResult<Vec<E>> {
        let rows = self
            .storage
            .list(StorageKey::prefix(E::COLLECTION), offset, limit)
            .await
            .map_err(|e| Self::storage_error("list", e))?;

        rows.into_iter()
            .map(|(key, data)| Self::decode(&key, data))
            .collect()
    }

    /// Every aggregate of a collection, ordered by id.
    pub async fn list_all<E: Persistable>(&self) -> RecyclingResult<Vec<E>> {
        let total = self.count::<E>().await?;
        self.list(0, total).await
    }

    /// Aggregates whose persisted `column` equals `value`.
    pub async fn find_by<E: Persistable>(
        &self,
        column: &str,
        value: &str,
    ) -> RecyclingResult<Vec<E>> {
        let rows = self
            .storage
            .find_by_attribute(StorageKey::prefix(E::COLLECTION), column, value)
            .await
            .map_err(|e| Self::storage_error("find", e))?;

        rows.into_iter()
            .map(|(key, data)| Self::decode(&key, data))
            .collect()
    }

    /// `true` if the aggregate existed.
    pub async fn delete<E: Persistable>(&self, id: &str) -> RecyclingResult<bool> {
        let key = StorageKey::new(E::COLLECTION, id);
        let existed = self
            .storage
            .delete(key.clone())
            .await
            .map_err(|e| Self::storage_error("delete", e))?;

        if !existed {
            warn!("Attempted to delete missing record {}", key);
        }
        Ok(existed)
    }

    pub async fn count<E: Persistable>(&self) -> RecyclingResult<usize> {
        self.storage
            .count(StorageKey::prefix(E::COLLECTION))
            .await
            .map_err(|e| Self::storage_error("count", e))
    }
}
