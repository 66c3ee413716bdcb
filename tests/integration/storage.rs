//! InMemoryStorage Integration Tests
//!
//! Checks the `StorageProvider` contract the repository layer relies on:
//! ordering, pagination, attribute lookup and concurrent access.

use crate::common;
use recycling_collection::storage::{InMemoryStorage, StorageError, StorageKey, StorageProvider};
use serde_json::json;

async fn seeded() -> InMemoryStorage {
    let storage = InMemoryStorage::new();
    for (id, neighborhood) in [("c", "n-1"), ("a", "n-2"), ("b", "n-1")] {
        storage
            .put(
                StorageKey::new("subscribers", id),
                json!({"id": id, "neighborhoodId": neighborhood, "address": {"street": "Rua A"}}),
            )
            .await
            .unwrap();
    }
    storage
        .put(StorageKey::new("routes", "r"), json!({"id": "r", "active": true}))
        .await
        .unwrap();
    storage
}

#[tokio::test]
async fn test_list_is_ordered_and_paginated() {
    common::init_logging();
    let storage = seeded().await;
    let prefix = || StorageKey::prefix("subscribers");

    let all = storage.list(prefix(), 0, 10).await.unwrap();
    let ids: Vec<&str> = all.iter().map(|(key, _)| key.id()).collect();
    assert_eq!(ids, ["a", "b", "c"]);

    let page = storage.list(prefix(), 1, 1).await.unwrap();
    assert_eq!(page[0].0.id(), "b");

    assert!(storage.list(prefix(), 5, 10).await.unwrap().is_empty());
    assert!(storage.list(prefix(), 0, 0).await.unwrap().is_empty());
    assert!(storage.list(StorageKey::prefix("none"), 0, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_by_attribute() {
    let storage = seeded().await;

    let found = storage
        .find_by_attribute(StorageKey::prefix("subscribers"), "neighborhoodId", "n-1")
        .await
        .unwrap();
    let ids: Vec<&str> = found.iter().map(|(key, _)| key.id()).collect();
    assert_eq!(ids, ["b", "c"]);

    let nested = storage
        .find_by_attribute(StorageKey::prefix("subscribers"), "address.street", "Rua A")
        .await
        .unwrap();
    assert_eq!(nested.len(), 3);

    let boolean = storage
        .find_by_attribute(StorageKey::prefix("routes"), "active", "true")
        .await
        .unwrap();
    assert_eq!(boolean.len(), 1);
}

#[tokio::test]
async fn test_stats_collections_and_clear() {
    let storage = seeded().await;

    let stats = storage.stats().await;
    assert_eq!(stats.collection_count, 2);
    assert_eq!(stats.total_records, 4);
    assert_eq!(storage.list_collections().await, ["routes", "subscribers"]);

    assert!(storage.delete(StorageKey::new("routes", "r")).await.unwrap());
    assert_eq!(storage.list_collections().await, ["subscribers"]);

    storage.clear().await;
    assert_eq!(storage.stats().await.total_records, 0);
}

#[tokio::test]
async fn test_rejects_non_object_records() {
    let storage = InMemoryStorage::new();
    let error = storage
        .put(StorageKey::new("routes", "r"), json!("monday"))
        .await
        .unwrap_err();
    assert!(matches!(error, StorageError::InvalidData { .. }));
}

#[tokio::test]
async fn test_concurrent_writers_share_state() {
    let storage = InMemoryStorage::new();

    let writes = (0..50).map(|index| {
        let storage = storage.clone();
        tokio::spawn(async move {
            storage
                .put(
                    StorageKey::new("ecopoints", format!("e-{:02}", index)),
                    json!({"id": index}),
                )
                .await
        })
    });
    for result in futures::future::join_all(writes).await {
        result.unwrap().unwrap();
    }

    assert_eq!(storage.count(StorageKey::prefix("ecopoints")).await.unwrap(), 50);
    assert!(storage.exists(StorageKey::new("ecopoints", "e-49")).await.unwrap());
}
