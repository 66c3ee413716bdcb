//! Unit tests for value objects.
//!
//! These tests use only the public API and cover construction rules,
//! boundary values and the persisted string forms.
//!
//! ## Organization
//!
//! - [`value_objects`] - Scalar value objects and [`Address`](recycling_collection::domain::value_objects::Address)
//! - [`enum_sets`] - `AcceptedMaterials` and `CollectionDays`
//! - [`serialization`] - serde forms of value objects and DTOs

pub mod serialization;
