//! Free-text classifications: the kind of a problem report and the kind of
//! collection a route performs.
//!
//! Both are trimmed, non-empty and between 2 and 50 characters. They share the
//! same rule but stay distinct types so a route's collection type cannot be
//! passed where a problem type is expected.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const MIN_CLASSIFICATION_LENGTH: usize = 2;
pub const MAX_CLASSIFICATION_LENGTH: usize = 50;

fn validate_classification(
    value: &str,
    kind: &str,
    error: fn(String) -> ValidationError,
) -> ValidationResult<String> {
    let trimmed = value.trim();
    let length = trimmed.chars().count();

    if length == 0 {
        return Err(error(format!("{} cannot be empty", kind)));
    }
    if !(MIN_CLASSIFICATION_LENGTH..=MAX_CLASSIFICATION_LENGTH).contains(&length) {
        return Err(error(format!(
            "{} must have between {} and {} characters, got {}",
            kind, MIN_CLASSIFICATION_LENGTH, MAX_CLASSIFICATION_LENGTH, length
        )));
    }
    Ok(trimmed.to_string())
}

/// Kind of problem being reported, e.g. "Coleta não realizada".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProblemType(String);

impl ProblemType {
    pub fn new(value: impl AsRef<str>) -> ValidationResult<Self> {
        validate_classification(value.as_ref(), "Problem type", |message| {
            ValidationError::problem_type(message)
        })
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Kind of collection a route performs, e.g. "Seletiva".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionType(String);

impl CollectionType {
    pub fn new(value: impl AsRef<str>) -> ValidationResult<Self> {
        validate_classification(value.as_ref(), "Collection type", |message| {
            ValidationError::collection_type(message)
        })
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ProblemType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProblemType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for CollectionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CollectionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
