//! Error types for recycling-collection operations.
//!
//! Validation failures are modelled with one variant per value object so that a
//! boundary handler can map any of them to a client error without enumerating
//! each type. [`RecyclingError`] wraps them together with lookup, conflict and
//! storage failures raised by the repository and service layers.

use crate::storage::StorageError;

/// Main error type for use-case and repository operations.
///
/// Each variant maps to exactly one HTTP-style status class through
/// [`RecyclingError::status_code`].
#[derive(Debug, thiserror::Error)]
pub enum RecyclingError {
    /// Input rejected by a value object constructor
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The requested aggregate does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A uniqueness rule was violated (duplicate email, protocol, ...)
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// A problem report status change that skips or reverses the workflow
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Errors raised by the storage backend
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unusable service configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Internal errors that are not the caller's fault
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Validation errors raised by value object constructors.
///
/// There is one variant per value object. Every variant carries a
/// human-readable message, and [`ValidationError::name`] returns the
/// conventional `Invalid*Error` name used by boundary handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid email: {message}")]
    InvalidEmail { message: String },

    #[error("Invalid postal code: {message}")]
    InvalidPostalCode { message: String },

    #[error("Invalid geolocation: {message}")]
    InvalidGeoLocation { message: String },

    #[error("Invalid population estimate: {message}")]
    InvalidPopulationEstimate { message: String },

    #[error("Invalid collection time: {message}")]
    InvalidCollectionTime { message: String },

    #[error("Invalid accepted materials: {message}")]
    InvalidAcceptedMaterials { message: String },

    #[error("Invalid collection days: {message}")]
    InvalidCollectionDays { message: String },

    #[error("Invalid address: {message}")]
    InvalidAddress { message: String },

    #[error("Invalid problem protocol: {message}")]
    InvalidProblemProtocol { message: String },

    #[error("Invalid problem description: {message}")]
    InvalidProblemDescription { message: String },

    #[error("Invalid problem attachments: {message}")]
    InvalidProblemAttachments { message: String },

    #[error("Invalid problem status: {message}")]
    InvalidProblemStatus { message: String },

    #[error("Invalid problem type: {message}")]
    InvalidProblemType { message: String },

    #[error("Invalid collection type: {message}")]
    InvalidCollectionType { message: String },

    /// Entity display names (administrator, neighborhood, route, ...)
    #[error("Invalid name: {message}")]
    InvalidName { message: String },
}

impl RecyclingError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code a boundary handler should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::InvalidStatusTransition { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::Storage(_)
            | Self::Json(_)
            | Self::Configuration { .. }
            | Self::Internal { .. } => 500,
        }
    }

    /// Whether the caller can fix the failure by changing the input.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl ValidationError {
    /// Conventional error name, always prefixed with `Invalid`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidEmail { .. } => "InvalidEmailError",
            Self::InvalidPostalCode { .. } => "InvalidPostalCodeError",
            Self::InvalidGeoLocation { .. } => "InvalidGeoLocationError",
            Self::InvalidPopulationEstimate { .. } => "InvalidPopulationEstimateError",
            Self::InvalidCollectionTime { .. } => "InvalidCollectionTimeError",
            Self::InvalidAcceptedMaterials { .. } => "InvalidAcceptedMaterialsError",
            Self::InvalidCollectionDays { .. } => "InvalidCollectionDaysError",
            Self::InvalidAddress { .. } => "InvalidAddressError",
            Self::InvalidProblemProtocol { .. } => "InvalidProblemProtocolError",
            Self::InvalidProblemDescription { .. } => "InvalidProblemDescriptionError",
            Self::InvalidProblemAttachments { .. } => "InvalidProblemAttachmentsError",
            Self::InvalidProblemStatus { .. } => "InvalidProblemStatusError",
            Self::InvalidProblemType { .. } => "InvalidProblemTypeError",
            Self::InvalidCollectionType { .. } => "InvalidCollectionTypeError",
            Self::InvalidName { .. } => "InvalidNameError",
        }
    }

    /// The human-readable message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidEmail { message }
            | Self::InvalidPostalCode { message }
            | Self::InvalidGeoLocation { message }
            | Self::InvalidPopulationEstimate { message }
            | Self::InvalidCollectionTime { message }
            | Self::InvalidAcceptedMaterials { message }
            | Self::InvalidCollectionDays { message }
            | Self::InvalidAddress { message }
            | Self::InvalidProblemProtocol { message }
            | Self::InvalidProblemDescription { message }
            | Self::InvalidProblemAttachments { message }
            | Self::InvalidProblemStatus { message }
            | Self::InvalidProblemType { message }
            | Self::InvalidCollectionType { message }
            | Self::InvalidName { message } => message,
        }
    }

    pub(crate) fn email(message: impl Into<String>) -> Self {
        Self::InvalidEmail {
            message: message.into(),
        }
    }

    pub(crate) fn postal_code(message: impl Into<String>) -> Self {
        Self::InvalidPostalCode {
            message: message.into(),
        }
    }

    pub(crate) fn geo_location(message: impl Into<String>) -> Self {
        Self::InvalidGeoLocation {
            message: message.into(),
        }
    }

    pub(crate) fn population_estimate(message: impl Into<String>) -> Self {
        Self::InvalidPopulationEstimate {
            message: message.into(),
        }
    }

    pub(crate) fn collection_time(message: impl Into<String>) -> Self {
        Self::InvalidCollectionTime {
            message: message.into(),
        }
    }

    pub(crate) fn accepted_materials(message: impl Into<String>) -> Self {
        Self::InvalidAcceptedMaterials {
            message: message.into(),
        }
    }

    pub(crate) fn collection_days(message: impl Into<String>) -> Self {
        Self::InvalidCollectionDays {
            message: message.into(),
        }
    }

    pub(crate) fn address(message: impl Into<String>) -> Self {
        Self::InvalidAddress {
            message: message.into(),
        }
    }

    pub(crate) fn problem_protocol(message: impl Into<String>) -> Self {
        Self::InvalidProblemProtocol {
            message: message.into(),
        }
    }

    pub(crate) fn problem_description(message: impl Into<String>) -> Self {
        Self::InvalidProblemDescription {
            message: message.into(),
        }
    }

    pub(crate) fn problem_attachments(message: impl Into<String>) -> Self {
        Self::InvalidProblemAttachments {
            message: message.into(),
        }
    }

    pub(crate) fn problem_status(message: impl Into<String>) -> Self {
        Self::InvalidProblemStatus {
            message: message.into(),
        }
    }

    pub(crate) fn problem_type(message: impl Into<String>) -> Self {
        Self::InvalidProblemType {
            message: message.into(),
        }
    }

    pub(crate) fn collection_type(message: impl Into<String>) -> Self {
        Self::InvalidCollectionType {
            message: message.into(),
        }
    }

    pub(crate) fn name_field(message: impl Into<String>) -> Self {
        Self::InvalidName {
            message: message.into(),
        }
    }
}

// Result type aliases for convenience
pub type RecyclingResult<T> = Result<T, RecyclingError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
