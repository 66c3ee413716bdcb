//! Value objects for recycling-collection domain primitives.
//!
//! This module contains immutable value objects that encapsulate validation logic
//! for the core concepts of the collection service: contact data, locations,
//! collection schedules, accepted materials and problem reports. Each value
//! object enforces its invariants at construction time, so an instance that
//! exists is always valid.
//!
//! ## Design Principles
//!
//! - **Immutable**: operations such as [`CollectionDays::add_days`] return a new instance
//! - **Self-validating**: every constructor returns a [`ValidationResult`](crate::error::ValidationResult)
//! - **One error kind per object**: failures map to a dedicated
//!   [`ValidationError`](crate::error::ValidationError) variant
//! - **Persistable**: each object has a primitive persisted form and rebuilds
//!   itself from that form through the same constructor
//!
//! ## Usage Pattern
//!
//! ```rust
//! use recycling_collection::domain::value_objects::{AcceptedMaterials, CollectionDays};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let materials = AcceptedMaterials::from_raw(["plastic", "glass", "plastic"])?;
//!     assert_eq!(materials.to_string(), "glass,plastic");
//!
//!     let days: CollectionDays = "friday, monday".parse()?;
//!     assert_eq!(days.to_string(), "monday,friday");
//!     Ok(())
//! }
//! ```

mod accepted_materials;
mod address;
mod classification;
mod collection_days;
mod collection_time;
mod email;
mod entity_name;
mod geo_location;
mod material_type;
mod ordinal_set;
mod population_estimate;
mod postal_code;
mod problem_attachments;
mod problem_description;
mod problem_protocol;
mod problem_status;
mod week_day;

pub use accepted_materials::AcceptedMaterials;
pub use address::{Address, AddressChanges, Patch};
pub use classification::{CollectionType, ProblemType};
pub use collection_days::CollectionDays;
pub use collection_time::CollectionTime;
pub use email::Email;
pub use entity_name::EntityName;
pub use geo_location::GeoLocation;
pub use material_type::MaterialType;
pub use population_estimate::PopulationEstimate;
pub use postal_code::PostalCode;
pub use problem_attachments::ProblemAttachments;
pub use problem_description::ProblemDescription;
pub use problem_protocol::ProblemProtocol;
pub use problem_status::ProblemStatus;
pub use week_day::WeekDay;
