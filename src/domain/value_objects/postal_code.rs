//! PostalCode value object for Brazilian CEP codes.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const CEP_LENGTH: usize = 8;
const HYPHEN_OFFSET: usize = 5;

/// A validated 8-digit CEP.
///
/// Accepts both `12345678` and `12345-678`; the stored value is always the
/// bare digits. [`PostalCode::formatted`] restores the hyphen for display.
///
/// ```rust
/// use recycling_collection::domain::value_objects::PostalCode;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let cep = PostalCode::new("01310-100")?;
///     assert_eq!(cep.value(), "01310100");
///     assert_eq!(cep.formatted(), "01310-100");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn new(value: impl AsRef<str>) -> ValidationResult<Self> {
        let trimmed = value.as_ref().trim();
        let digits = Self::strip_hyphen(trimmed);

        if digits.len() != CEP_LENGTH || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::postal_code(format!(
                "'{}' must contain exactly {} digits",
                trimmed, CEP_LENGTH
            )));
        }

        Ok(Self(digits))
    }

    /// Only a single hyphen in the display position is accepted.
    fn strip_hyphen(value: &str) -> String {
        match value.split_once('-') {
            Some((head, tail)) if head.len() == HYPHEN_OFFSET => format!("{}{}", head, tail),
            _ => value.to_string(),
        }
    }

    /// The 8 bare digits, as persisted.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Display form with a hyphen after the fifth digit.
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..HYPHEN_OFFSET], &self.0[HYPHEN_OFFSET..])
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for PostalCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&str> for PostalCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value)
    }
}
