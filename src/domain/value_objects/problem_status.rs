//! ProblemStatus value object for the lifecycle of a problem report.
//!
//! The status only guarantees that its current value is one of the four legal
//! states. [`ProblemStatus::can_transition_to`] describes the one-way flow
//! `PENDING -> IN_ANALYSIS -> {RESOLVED, REJECTED}`; whether that flow is
//! enforced is decided by the caller.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Current state of a problem report.
///
/// ## Examples
///
/// ```rust
/// use recycling_collection::domain::value_objects::ProblemStatus;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let status: ProblemStatus = "in_analysis".parse()?;
///     assert_eq!(status, ProblemStatus::InAnalysis);
///     assert_eq!(status.as_str(), "IN_ANALYSIS");
///
///     assert!(ProblemStatus::Pending.can_transition_to(ProblemStatus::InAnalysis));
///     assert!(!ProblemStatus::Resolved.can_transition_to(ProblemStatus::Pending));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProblemStatus {
    #[default]
    Pending,
    InAnalysis,
    Resolved,
    Rejected,
}

impl ProblemStatus {
    pub const ALL: [ProblemStatus; 4] = [
        ProblemStatus::Pending,
        ProblemStatus::InAnalysis,
        ProblemStatus::Resolved,
        ProblemStatus::Rejected,
    ];

    /// Parse a status name, ignoring case and surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> ValidationResult<Self> {
        let normalized = value.as_ref().trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                ValidationError::problem_status(format!(
                    "'{}' is not a valid status. Allowed values: {}",
                    value.as_ref().trim(),
                    Self::ALL.map(|status| status.as_str()).join(", ")
                ))
            })
    }

    /// Persisted upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemStatus::Pending => "PENDING",
            ProblemStatus::InAnalysis => "IN_ANALYSIS",
            ProblemStatus::Resolved => "RESOLVED",
            ProblemStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProblemStatus::Pending => "Pendente",
            ProblemStatus::InAnalysis => "Em análise",
            ProblemStatus::Resolved => "Resolvido",
            ProblemStatus::Rejected => "Rejeitado",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProblemStatus::Resolved | ProblemStatus::Rejected)
    }

    pub fn can_transition_to(&self, next: ProblemStatus) -> bool {
        matches!(
            (self, next),
            (ProblemStatus::Pending, ProblemStatus::InAnalysis)
                | (ProblemStatus::InAnalysis, ProblemStatus::Resolved)
                | (ProblemStatus::InAnalysis, ProblemStatus::Rejected)
        )
    }
}

impl fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ProblemStatus {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for ProblemStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProblemStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
