//! Email value object for administrator, subscriber and reporter contacts.
//!
//! Addresses are trimmed and lowercased on construction, so two emails that
//! differ only in case compare equal.

use crate::error::{ValidationError, ValidationResult};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

const MAX_EMAIL_LENGTH: usize = 254;

/// A validated, normalized email address.
///
/// ## Validation Rules
///
/// - Must not be empty after trimming
/// - Must look like `local@domain.tld` with no whitespace
/// - Must not exceed 254 characters
///
/// ## Examples
///
/// ```rust
/// use recycling_collection::domain::value_objects::Email;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let email = Email::new("  Maria.Silva@Prefeitura.gov.br ")?;
///     assert_eq!(email.as_str(), "maria.silva@prefeitura.gov.br");
///     assert_eq!(email.domain(), "prefeitura.gov.br");
///
///     assert!(Email::new("not-an-email").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email with validation.
    ///
    /// # Returns
    ///
    /// * `Ok(Email)` - If the value is a well-formed address
    /// * `Err(ValidationError::InvalidEmail)` - Otherwise
    pub fn new(value: impl AsRef<str>) -> ValidationResult<Self> {
        let normalized = value.as_ref().trim().to_lowercase();
        Self::validate_format(&normalized)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The part before `@`.
    pub fn local_part(&self) -> &str {
        self.0.rsplit_once('@').map(|(local, _)| local).unwrap_or("")
    }

    /// The part after `@`.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("")
    }

    fn validate_format(value: &str) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::email("Email cannot be empty"));
        }

        if value.len() > MAX_EMAIL_LENGTH {
            return Err(ValidationError::email(format!(
                "Email exceeds maximum length of {} characters",
                MAX_EMAIL_LENGTH
            )));
        }

        if !EMAIL_PATTERN.is_match(value) {
            return Err(ValidationError::email(format!(
                "'{}' is not a valid email address",
                value
            )));
        }

        Ok(())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value)
    }
}
