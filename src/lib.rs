//! Domain core for a municipal recycling-collection service.
//!
//! Provides self-validating value objects, the aggregates built from them, a
//! repository layer over pluggable async storage and the use-cases that tie
//! them together.
//!
//! # Core Components
//!
//! - [`domain::value_objects`] - Immutable, validated-on-construction values
//! - [`domain`] - Aggregates: routes, neighborhoods, ecopoints, subscribers,
//!   administrators and problem reports
//! - [`StorageProvider`] - Trait for implementing storage backends
//! - [`RecyclingService`] - Use-case orchestration over DTOs
//!
//! # Quick Start
//!
//! ```rust
//! use recycling_collection::RecyclingService;
//! use recycling_collection::service::{CreateEcopointInput, AddressInput};
//! use recycling_collection::storage::InMemoryStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RecyclingService::new(InMemoryStorage::new())?;
//!
//! let ecopoint = service
//!     .create_ecopoint(CreateEcopointInput {
//!         name: "Ecoponto Pinheiros".to_string(),
//!         address: AddressInput {
//!             street: "Rua Sumidouro".to_string(),
//!             ..Default::default()
//!         },
//!         accepted_materials: vec!["paper".to_string(), "glass".to_string()],
//!         opening_hours: None,
//!         neighborhood_id: None,
//!         image_url: None,
//!     })
//!     .await?;
//! assert_eq!(ecopoint.materials, ["glass", "paper"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod service;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::ServiceConfig;
pub use error::{RecyclingError, RecyclingResult, ValidationError, ValidationResult};
pub use repository::{Persistable, Repository};
pub use service::RecyclingService;
pub use storage::{InMemoryStorage, StorageError, StorageProvider};
