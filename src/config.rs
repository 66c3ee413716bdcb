//! Service configuration.
//!
//! [`ServiceConfig`] tunes the use-case layer: pagination bounds, the
//! attachment limit for problem reports and whether the problem status
//! workflow is enforced. Hosts may build it in code with the `with_*` setters
//! or load it from JSON; missing keys take their default value.
//!
//! ```rust
//! use recycling_collection::config::ServiceConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config: ServiceConfig = serde_json::from_str(r#"{"maxPageSize": 50}"#)?;
//!     assert_eq!(config.max_page_size, 50);
//!     assert_eq!(config.default_page_size, 20);
//!     config.validate()?;
//!     Ok(())
//! }
//! ```

use crate::error::{RecyclingError, RecyclingResult};
use serde::{Deserialize, Serialize};

/// Configuration for [`RecyclingService`](crate::service::RecyclingService).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceConfig {
    /// Upper bound applied to every requested page size.
    pub max_page_size: usize,

    /// Page size used when a request does not specify one.
    pub default_page_size: usize,

    /// Maximum number of attachments a single problem report may carry.
    pub max_attachments: usize,

    /// Reject problem status changes outside
    /// `PENDING -> IN_ANALYSIS -> {RESOLVED, REJECTED}`.
    pub enforce_status_transitions: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_page_size: 100,
            default_page_size: 20,
            max_attachments: 5,
            enforce_status_transitions: true,
        }
    }
}

impl ServiceConfig {
    pub fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    pub fn with_default_page_size(mut self, default_page_size: usize) -> Self {
        self.default_page_size = default_page_size;
        self
    }

    pub fn with_max_attachments(mut self, max_attachments: usize) -> Self {
        self.max_attachments = max_attachments;
        self
    }

    pub fn with_status_transitions_enforced(mut self, enforce: bool) -> Self {
        self.enforce_status_transitions = enforce;
        self
    }

    /// Check that the page bounds are usable.
    pub fn validate(&self) -> RecyclingResult<()> {
        if self.max_page_size == 0 {
            return Err(RecyclingError::configuration(
                "maxPageSize must be greater than zero",
            ));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(RecyclingError::configuration(format!(
                "defaultPageSize must be between 1 and maxPageSize ({}), got {}",
                self.max_page_size, self.default_page_size
            )));
        }
        Ok(())
    }
}
