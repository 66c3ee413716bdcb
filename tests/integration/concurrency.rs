//! Check-then-write use-cases under concurrent callers.
//!
//! The backend here delays every read and write so that two tasks reliably
//! interleave between the uniqueness or workflow check and the save.

use crate::common::{self, fixtures};
use recycling_collection::domain::{Administrator, Subscriber};
use recycling_collection::service::CreateAdministratorInput;
use recycling_collection::storage::{StorageKey, StoragePrefix};
use recycling_collection::{
    InMemoryStorage, RecyclingError, RecyclingService, StorageError, StorageProvider,
};
use serde_json::Value;
use std::time::Duration;

/// [`InMemoryStorage`] with a fixed delay before every operation.
#[derive(Debug, Clone, Default)]
struct SlowStorage {
    inner: InMemoryStorage,
}

impl SlowStorage {
    const DELAY: Duration = Duration::from_millis(5);

    async fn pause() {
        tokio::time::sleep(Self::DELAY).await;
    }
}

impl StorageProvider for SlowStorage {
    type Error = StorageError;

    async fn put(&self, key: StorageKey, data: Value) -> Result<Value, Self::Error> {
        Self::pause().await;
        self.inner.put(key, data).await
    }

    async fn get(&self, key: StorageKey) -> Result<Option<Value>, Self::Error> {
        Self::pause().await;
        self.inner.get(key).await
    }

    async fn delete(&self, key: StorageKey) -> Result<bool, Self::Error> {
        Self::pause().await;
        self.inner.delete(key).await
    }

    async fn list(
        &self,
        prefix: StoragePrefix,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<(StorageKey, Value)>, Self::Error> {
        Self::pause().await;
        self.inner.list(prefix, offset, limit).await
    }

    async fn find_by_attribute(
        &self,
        prefix: StoragePrefix,
        attribute: &str,
        value: &str,
    ) -> Result<Vec<(StorageKey, Value)>, Self::Error> {
        Self::pause().await;
        self.inner.find_by_attribute(prefix, attribute, value).await
    }

    async fn exists(&self, key: StorageKey) -> Result<bool, Self::Error> {
        Self::pause().await;
        self.inner.exists(key).await
    }

    async fn count(&self, prefix: StoragePrefix) -> Result<usize, Self::Error> {
        Self::pause().await;
        self.inner.count(prefix).await
    }
}

fn slow_service() -> RecyclingService<SlowStorage> {
    common::init_logging();
    RecyclingService::new(SlowStorage::default()).unwrap()
}

fn assert_single_success<T: std::fmt::Debug>(
    results: [Result<T, RecyclingError>; 2],
) -> RecyclingError {
    let (successes, failures): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);
    assert_eq!(successes.len(), 1, "exactly one call should succeed");
    failures.into_iter().next().unwrap().unwrap_err()
}

#[tokio::test]
async fn test_concurrent_subscribers_with_same_email() {
    let service = slow_service();

    let (first, second) = tokio::join!(
        service.create_subscriber(fixtures::subscriber_input("ana@example.com")),
        service.create_subscriber(fixtures::subscriber_input("Ana@Example.com")),
    );

    let error = assert_single_success([first, second]);
    assert!(matches!(error, RecyclingError::Conflict { .. }));

    let stored: Vec<Subscriber> = service
        .repository()
        .find_by("email", "ana@example.com")
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_concurrent_administrators_with_same_email() {
    let service = slow_service();
    let input = || CreateAdministratorInput {
        name: "Maria Souza".to_string(),
        email: "maria@prefeitura.gov.br".to_string(),
    };

    // Cloned services share the same locks
    let other = service.clone();
    let (first, second) = tokio::join!(
        service.create_administrator(input()),
        other.create_administrator(input()),
    );

    let error = assert_single_success([first, second]);
    assert!(matches!(error, RecyclingError::Conflict { .. }));
    assert_eq!(service.repository().count::<Administrator>().await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_terminal_status_changes() {
    let service = slow_service();
    let report = service
        .file_problem_report(fixtures::problem_report_input(&[]))
        .await
        .unwrap();
    service
        .update_problem_status(&report.id, "IN_ANALYSIS")
        .await
        .unwrap();

    let (resolved, rejected) = tokio::join!(
        service.update_problem_status(&report.id, "RESOLVED"),
        service.update_problem_status(&report.id, "REJECTED"),
    );

    let winner = if resolved.is_ok() { "RESOLVED" } else { "REJECTED" };
    let error = assert_single_success([resolved, rejected]);
    assert!(matches!(error, RecyclingError::InvalidStatusTransition { .. }));

    let stored = service.get_problem_report(&report.id).await.unwrap();
    assert_eq!(stored.status, winner);
}

#[tokio::test]
async fn test_concurrent_attachment_additions_are_kept() {
    let service = slow_service();
    let report = service
        .file_problem_report(fixtures::problem_report_input(&["https://img.example.com/a.jpg"]))
        .await
        .unwrap();

    let (first, second) = tokio::join!(
        service.add_problem_attachments(&report.id, vec!["https://img.example.com/b.jpg".into()]),
        service.add_problem_attachments(&report.id, vec!["https://img.example.com/c.jpg".into()]),
    );
    first.unwrap();
    second.unwrap();

    let stored = service.get_problem_report(&report.id).await.unwrap();
    assert_eq!(stored.attachments.len(), 3);
    assert!(stored.attachments.contains(&"https://img.example.com/b.jpg".to_string()));
    assert!(stored.attachments.contains(&"https://img.example.com/c.jpg".to_string()));
}
