//! ProblemDescription value object for the free-text body of a report.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const MIN_DESCRIPTION_LENGTH: usize = 10;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// A trimmed description between 10 and 500 characters.
///
/// Length is counted in characters, not bytes, so accented Portuguese text is
/// measured the way the reporter sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProblemDescription(String);

impl ProblemDescription {
    pub fn new(value: impl AsRef<str>) -> ValidationResult<Self> {
        let trimmed = value.as_ref().trim();
        let length = trimmed.chars().count();

        if length < MIN_DESCRIPTION_LENGTH {
            return Err(ValidationError::problem_description(format!(
                "Description must have at least {} characters, got {}",
                MIN_DESCRIPTION_LENGTH, length
            )));
        }
        if length > MAX_DESCRIPTION_LENGTH {
            return Err(ValidationError::problem_description(format!(
                "Description must have at most {} characters, got {}",
                MAX_DESCRIPTION_LENGTH, length
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProblemDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ProblemDescription {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProblemDescription {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
