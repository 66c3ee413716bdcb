//! ProblemProtocol value object for problem report tracking numbers.

use crate::error::{ValidationError, ValidationResult};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static PROTOCOL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PR-([0-9]{4})-([0-9]{4})$").expect("protocol pattern is a valid regex")
});

/// A tracking number of the form `PR-YYYY-NNNN`.
///
/// [`ProblemProtocol::generate`] builds the canonical string and then goes
/// through the same validation as [`ProblemProtocol::new`], so a sequence that
/// does not fit in four digits is rejected rather than silently widened.
///
/// ```rust
/// use recycling_collection::domain::value_objects::ProblemProtocol;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let protocol = ProblemProtocol::generate(2026, 1)?;
///     assert_eq!(protocol.as_str(), "PR-2026-0001");
///     assert_eq!(protocol.sequence(), 1);
///
///     assert!(ProblemProtocol::new("PR-26-1").is_err());
///     assert!(ProblemProtocol::generate(2026, 10_000).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemProtocol {
    value: String,
    year: i32,
    sequence: u32,
}

impl ProblemProtocol {
    pub fn new(value: impl AsRef<str>) -> ValidationResult<Self> {
        let value = value.as_ref().trim();
        let invalid = || {
            ValidationError::problem_protocol(format!(
                "'{}' does not match the PR-YYYY-NNNN format",
                value
            ))
        };

        let captures = PROTOCOL_PATTERN.captures(value).ok_or_else(invalid)?;
        let year = captures[1].parse().map_err(|_| invalid())?;
        let sequence = captures[2].parse().map_err(|_| invalid())?;

        Ok(Self {
            value: value.to_string(),
            year,
            sequence,
        })
    }

    /// Build the protocol for the `sequence`-th report filed in `year`.
    pub fn generate(year: i32, sequence: u32) -> ValidationResult<Self> {
        Self::new(format!("PR-{}-{:04}", year, sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl fmt::Display for ProblemProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for ProblemProtocol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProblemProtocol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
