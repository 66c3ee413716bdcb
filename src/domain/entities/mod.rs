//! Aggregates of the collection service.
//!
//! Entities own their identity and embed value objects for every validated
//! field. Because each field type is valid by construction, entity fields are
//! public and entities can be updated in place by the use-case layer; only
//! identity and timestamps are assigned here.

mod administrator;
mod ecopoint;
mod neighborhood;
mod problem_report;
mod route;
mod subscriber;

pub use administrator::Administrator;
pub use ecopoint::Ecopoint;
pub use neighborhood::Neighborhood;
pub use problem_report::ProblemReport;
pub use route::Route;
pub use subscriber::Subscriber;

/// Fresh identifier for a new aggregate.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
