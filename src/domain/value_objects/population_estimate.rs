//! PopulationEstimate value object for neighborhood sizes.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A non-negative estimate of the residents served in a neighborhood.
///
/// Aggregates that may not know their population hold an
/// `Option<PopulationEstimate>` instead of a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PopulationEstimate(u64);

impl PopulationEstimate {
    /// Accepts a signed input so negative values from untyped sources are
    /// reported instead of wrapping.
    pub fn new(value: i64) -> ValidationResult<Self> {
        u64::try_from(value).map(Self).map_err(|_| {
            ValidationError::population_estimate(format!(
                "Population estimate must be zero or positive, got {}",
                value
            ))
        })
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PopulationEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PopulationEstimate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PopulationEstimate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
