//! Storage-specific error types for pure data operations.
//!
//! These errors describe persistence failures only. Domain validation failures
//! and use-case conflicts live in [`crate::error`].

use std::fmt;

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// Invalid data that cannot be stored.
    InvalidData { message: String, cause: String },

    /// A stored record could not be read back.
    DataCorruption {
        collection: String,
        id: String,
        details: String,
    },

    /// The backend itself failed.
    Internal {
        message: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidData { message, cause } => {
                write!(f, "Invalid data: {} (cause: {})", message, cause)
            }
            StorageError::DataCorruption {
                collection,
                id,
                details,
            } => write!(f, "Data corruption in {}/{}: {}", collection, id, details),
            StorageError::Internal { message, .. } => {
                write!(f, "Internal storage error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Internal { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl StorageError {
    pub fn invalid_data_with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
            cause: cause.into(),
        }
    }

    /// A corrupted record identified by `id`.
    pub fn data_corruption(
        collection: impl Into<String>,
        id: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::DataCorruption {
            collection: collection.into(),
            id: id.into(),
            details: details.into(),
        }
    }

    pub fn internal_with_source(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source,
        }
    }
}
