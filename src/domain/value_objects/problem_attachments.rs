//! ProblemAttachments value object for the photo URLs attached to a report.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered list of non-blank attachment URLs.
///
/// Unlike the enumerated sets, an empty list is valid: most reports carry no
/// attachments. Entries are trimmed and keep their insertion order.
///
/// ```rust
/// use recycling_collection::domain::value_objects::ProblemAttachments;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let attachments = ProblemAttachments::from_comma_separated("a.jpg, ,b.jpg")?;
///     assert_eq!(attachments.urls(), ["a.jpg", "b.jpg"]);
///     assert_eq!(attachments.to_string(), "a.jpg,b.jpg");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProblemAttachments(Vec<String>);

impl ProblemAttachments {
    pub fn new<I, S>(urls: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut validated = Vec::new();
        for (index, url) in urls.into_iter().enumerate() {
            let trimmed = url.as_ref().trim();
            if trimmed.is_empty() {
                return Err(ValidationError::problem_attachments(format!(
                    "Attachment at position {} is blank",
                    index
                )));
            }
            if trimmed.contains(',') {
                return Err(ValidationError::problem_attachments(format!(
                    "Attachment '{}' cannot contain a comma",
                    trimmed
                )));
            }
            validated.push(trimmed.to_string());
        }
        Ok(Self(validated))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the persisted comma-joined form. Blank entries are dropped.
    pub fn from_comma_separated(value: &str) -> ValidationResult<Self> {
        Self::new(
            value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty()),
        )
    }

    pub fn urls(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new list with `urls` appended after the existing entries.
    pub fn with_added<I, S>(&self, urls: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = Self::new(urls)?;
        let mut combined = self.0.clone();
        combined.extend(added.0);
        Ok(Self(combined))
    }
}

impl fmt::Display for ProblemAttachments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl Serialize for ProblemAttachments {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProblemAttachments {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let urls = Vec::<String>::deserialize(deserializer)?;
        Self::new(urls).map_err(serde::de::Error::custom)
    }
}
