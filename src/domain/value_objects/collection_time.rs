//! CollectionTime value object for daily collection windows.
//!
//! A window is a `HH:mm` start and end on the same day. Validation runs in two
//! stages: each bound must be a valid 24-hour time, then the end must be at
//! least one minute after the start. Windows crossing midnight are rejected.

use crate::error::{ValidationError, ValidationResult};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::LazyLock;

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1][0-9]|2[0-3]):([0-5][0-9])$").expect("time pattern is a valid regex")
});

const INTERVAL_SEPARATOR: &str = " - ";

/// A validated same-day time window.
///
/// ```rust
/// use recycling_collection::domain::value_objects::CollectionTime;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let window = CollectionTime::new("08:00", "12:00")?;
///     assert_eq!(window.formatted_interval(), "08:00 - 12:00");
///     assert_eq!(window.duration_minutes(), 240);
///
///     let parsed = CollectionTime::from_interval("08:00 - 12:00")?;
///     assert_eq!(parsed, window);
///
///     assert!(CollectionTime::new("23:59", "00:00").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CollectionTime {
    start: String,
    end: String,
    #[serde(skip)]
    start_minutes: u16,
    #[serde(skip)]
    end_minutes: u16,
}

impl CollectionTime {
    pub fn new(start: impl AsRef<str>, end: impl AsRef<str>) -> ValidationResult<Self> {
        let start = start.as_ref().trim();
        let end = end.as_ref().trim();

        let start_minutes = Self::minutes_of_day(start, "start")?;
        let end_minutes = Self::minutes_of_day(end, "end")?;

        if end_minutes <= start_minutes {
            return Err(ValidationError::collection_time(format!(
                "End time {} must be at least one minute after start time {}",
                end, start
            )));
        }

        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
            start_minutes,
            end_minutes,
        })
    }

    /// Parse the persisted `"HH:mm - HH:mm"` form.
    pub fn from_interval(interval: &str) -> ValidationResult<Self> {
        let (start, end) = interval.split_once(INTERVAL_SEPARATOR.trim()).ok_or_else(|| {
            ValidationError::collection_time(format!(
                "'{}' is not in the 'HH:mm - HH:mm' format",
                interval
            ))
        })?;
        Self::new(start, end)
    }

    fn minutes_of_day(value: &str, bound: &str) -> ValidationResult<u16> {
        let invalid = || {
            ValidationError::collection_time(format!(
                "Invalid {} time '{}': expected 24-hour HH:mm",
                bound, value
            ))
        };

        let captures = TIME_PATTERN.captures(value).ok_or_else(invalid)?;
        let hours: u16 = captures[1].parse().map_err(|_| invalid())?;
        let minutes: u16 = captures[2].parse().map_err(|_| invalid())?;
        Ok(hours * 60 + minutes)
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Minutes since midnight for the start bound.
    pub fn start_minutes(&self) -> u16 {
        self.start_minutes
    }

    pub fn end_minutes(&self) -> u16 {
        self.end_minutes
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_minutes - self.start_minutes
    }

    /// Persisted form, `"HH:mm - HH:mm"`.
    pub fn formatted_interval(&self) -> String {
        format!("{}{}{}", self.start, INTERVAL_SEPARATOR, self.end)
    }

    /// Whether a `HH:mm` instant falls inside the window, bounds inclusive.
    pub fn contains(&self, time: &str) -> ValidationResult<bool> {
        let minutes = Self::minutes_of_day(time.trim(), "query")?;
        Ok((self.start_minutes..=self.end_minutes).contains(&minutes))
    }

    pub fn overlaps(&self, other: &CollectionTime) -> bool {
        self.start_minutes < other.end_minutes && other.start_minutes < self.end_minutes
    }
}

impl fmt::Display for CollectionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_interval())
    }
}

impl<'de> Deserialize<'de> for CollectionTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: String,
            end: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
