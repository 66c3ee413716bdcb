//! Common test utilities.
//!
//! Shared setup for the integration suite: logger initialization and a
//! service factory backed by [`InMemoryStorage`].

use recycling_collection::storage::InMemoryStorage;
use recycling_collection::{RecyclingError, RecyclingService, ServiceConfig};

pub mod fixtures;

/// Install `env_logger` once. Repeated calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A service over fresh in-memory storage with the default configuration.
pub fn service() -> RecyclingService<InMemoryStorage> {
    init_logging();
    RecyclingService::new(InMemoryStorage::new()).expect("default config is valid")
}

pub fn service_with(config: ServiceConfig) -> RecyclingService<InMemoryStorage> {
    init_logging();
    RecyclingService::with_config(InMemoryStorage::new(), config).expect("test config is valid")
}

/// The `Invalid*Error` name of a validation failure.
///
/// Panics if `error` is not a validation error.
pub fn validation_error_name(error: &RecyclingError) -> &'static str {
    match error {
        RecyclingError::Validation(inner) => inner.name(),
        other => panic!("Expected validation error, got {:?}", other),
    }
}
