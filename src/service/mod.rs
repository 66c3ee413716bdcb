//! Use-case orchestration for the collection service.
//!
//! [`RecyclingService`] is the application boundary. Each operation accepts a
//! DTO of raw primitives, builds the value objects (so every validation rule
//! is enforced in one place), loads and saves aggregates through the
//! [`Repository`](crate::repository::Repository) and returns an output DTO.
//!
//! Use-cases are grouped by aggregate:
//!
//! - administrators: registration with unique email
//! - neighborhoods: CRUD plus route assignment
//! - routes: CRUD, day editing and day/date lookups
//! - ecopoints: CRUD plus material lookups
//! - subscribers: CRUD with unique email
//! - problem reports: filing with protocol allocation and the status workflow

mod administrators;
mod core;
pub mod dto;
mod ecopoints;
mod neighborhoods;
mod problem_reports;
mod routes;
mod subscribers;

pub use self::core::RecyclingService;
pub use dto::*;
