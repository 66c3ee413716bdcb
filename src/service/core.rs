//! Core service structure and shared use-case helpers.
//!
//! This module contains the [`RecyclingService`] definition and its
//! constructors. The use-cases for each aggregate live in sibling modules and
//! extend the same `impl` block.

use super::dto::{Page, PageOutput};
use crate::config::ServiceConfig;
use crate::domain::value_objects::Email;
use crate::error::{RecyclingError, RecyclingResult};
use crate::repository::{Persistable, Repository};
use crate::storage::StorageProvider;
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Use-case orchestration for the collection service.
///
/// Every operation builds value objects from a DTO, persists the resulting
/// aggregate through the [`Repository`] and maps it back to an output DTO.
///
/// # Type Parameters
///
/// * `S` - The storage backend implementing [`StorageProvider`]
///
/// # Examples
///
/// ```rust
/// use recycling_collection::service::{CreateRouteInput, RecyclingService};
/// use recycling_collection::storage::InMemoryStorage;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = RecyclingService::new(InMemoryStorage::new())?;
///
/// let route = service
///     .create_route(CreateRouteInput {
///         name: "Rota Centro".to_string(),
///         collection_days: vec!["friday".to_string(), "monday".to_string()],
///         start_time: "08:00".to_string(),
///         end_time: "12:00".to_string(),
///         collection_type: "Seletiva".to_string(),
///         active: None,
///     })
///     .await?;
/// assert_eq!(route.collection_days, ["monday", "friday"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecyclingService<S: StorageProvider> {
    pub(super) repository: Repository<S>,
    pub(super) config: ServiceConfig,
    pub(super) locks: Arc<WriteLocks>,
}

/// Mutexes held across the read and the save of check-then-write use-cases.
///
/// They serialize callers sharing one service (clones included). Separate
/// service instances over the same storage are not coordinated.
#[derive(Debug, Default)]
pub(super) struct WriteLocks {
    /// Protocol allocation, so concurrent filings get distinct numbers.
    pub(super) protocol: Mutex<()>,
    /// Administrator email registration.
    pub(super) administrator_email: Mutex<()>,
    /// Subscriber email registration and subscriber updates.
    pub(super) subscriber_email: Mutex<()>,
    /// Status and attachment changes on problem reports.
    pub(super) problem_report: Mutex<()>,
}

impl<S: StorageProvider> RecyclingService<S> {
    /// Creates a service with the default [`ServiceConfig`].
    pub fn new(storage: S) -> RecyclingResult<Self> {
        Self::with_config(storage, ServiceConfig::default())
    }

    /// Creates a service with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RecyclingError::Configuration`] if the configuration fails
    /// [`ServiceConfig::validate`].
    pub fn with_config(storage: S, config: ServiceConfig) -> RecyclingResult<Self> {
        config.validate()?;
        Ok(Self {
            repository: Repository::new(storage),
            config,
            locks: Arc::new(WriteLocks::default()),
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn repository(&self) -> &Repository<S> {
        &self.repository
    }

    /// Offset and limit for a page request, clamped to the configured maximum.
    pub(super) fn resolve_page(&self, page: Page) -> (usize, usize) {
        let limit = page
            .limit
            .unwrap_or(self.config.default_page_size)
            .min(self.config.max_page_size);
        (page.offset, limit)
    }

    /// Load one page of an aggregate and map it to its output DTO.
    pub(super) async fn list_page<E, O>(&self, page: Page) -> RecyclingResult<PageOutput<O>>
    where
        E: Persistable,
        O: for<'a> From<&'a E>,
    {
        let (offset, limit) = self.resolve_page(page);
        debug!(
            "Listing {} (offset: {}, limit: {})",
            E::COLLECTION,
            offset,
            limit
        );

        let items = self.repository.list::<E>(offset, limit).await?;
        let total = self.repository.count::<E>().await?;

        Ok(PageOutput {
            items: items.iter().map(O::from).collect(),
            total,
            offset,
            limit,
        })
    }

    /// Fail with a conflict if another aggregate already uses `email`.
    ///
    /// Callers hold the matching [`WriteLocks`] email mutex until they save.
    pub(super) async fn ensure_email_available<E: Persistable>(
        &self,
        email: &Email,
        exclude_id: Option<&str>,
    ) -> RecyclingResult<()> {
        let matches = self
            .repository
            .find_by::<E>("email", email.as_str())
            .await?;

        if matches.iter().any(|entity| Some(entity.id()) != exclude_id) {
            return Err(RecyclingError::conflict(format!(
                "{} with email '{}' already exists",
                E::ENTITY,
                email
            )));
        }
        Ok(())
    }

    /// Delete an aggregate, failing with not-found if it was absent.
    pub(super) async fn delete_existing<E: Persistable>(&self, id: &str) -> RecyclingResult<()> {
        info!("Deleting {} '{}'", E::ENTITY, id);
        if self.repository.delete::<E>(id).await? {
            Ok(())
        } else {
            Err(RecyclingError::not_found(E::ENTITY, id))
        }
    }

    /// Fail with not-found unless a referenced aggregate exists.
    pub(super) async fn ensure_exists<E: Persistable>(&self, id: &str) -> RecyclingResult<()> {
        if self.repository.exists::<E>(id).await? {
            Ok(())
        } else {
            Err(RecyclingError::not_found(E::ENTITY, id))
        }
    }
}
