//! Domain layer: self-validating value objects and the aggregates built from
//! them.

pub mod entities;
pub mod value_objects;

pub use entities::{Administrator, Ecopoint, Neighborhood, ProblemReport, Route, Subscriber};
