//! Integration tests for the collection service.
//!
//! These tests drive [`RecyclingService`](recycling_collection::RecyclingService)
//! over [`InMemoryStorage`](recycling_collection::InMemoryStorage) the way a
//! host application would, and check the storage backend against the
//! `StorageProvider` contract.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test integration::
//! cargo test integration::properties
//! ```

pub mod concurrency;
pub mod end_to_end;
pub mod problem_reports;
pub mod properties;
pub mod storage;
