//! CollectionDays value object for the week days a route is served.
//!
//! Days are kept in ISO weekday order (Monday first) regardless of the order
//! they were supplied in, and the set can never be empty.

use super::ordinal_set::OrdinalSet;
use super::week_day::WeekDay;
use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated, non-empty set of collection days.
///
/// ## Validation Rules
///
/// - At least one day must be provided
/// - Every raw entry must name a [`WeekDay`]
///
/// ## Examples
///
/// ```rust
/// use recycling_collection::domain::value_objects::{CollectionDays, WeekDay};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let days = CollectionDays::new([WeekDay::Friday, WeekDay::Monday, WeekDay::Monday])?;
///     assert_eq!(days.days(), vec![WeekDay::Monday, WeekDay::Friday]);
///     assert_eq!(days.to_string(), "monday,friday");
///     assert_eq!(days.to_short_localized_string(), "Seg, Sex");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionDays(OrdinalSet<WeekDay>);

impl CollectionDays {
    /// Create a set from typed days. Duplicates collapse.
    pub fn new<I>(days: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = WeekDay>,
    {
        let set: OrdinalSet<WeekDay> = days.into_iter().collect();
        if set.is_empty() {
            return Err(ValidationError::collection_days(
                "At least one collection day must be provided",
            ));
        }
        Ok(Self(set))
    }

    /// Create a set from raw day names, reporting every unknown entry.
    pub fn from_raw<I, S>(raw: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut days = Vec::new();
        let mut invalid = Vec::new();

        for entry in raw {
            let entry = entry.as_ref();
            match WeekDay::parse(entry) {
                Some(day) => days.push(day),
                None => invalid.push(format!("'{}'", entry)),
            }
        }

        if !invalid.is_empty() {
            return Err(ValidationError::collection_days(format!(
                "Unknown days: {}. Allowed values: {}",
                invalid.join(", "),
                WeekDay::allowed_values()
            )));
        }

        Self::new(days)
    }

    pub fn everyday() -> Self {
        Self(OrdinalSet::all())
    }

    /// Monday through Friday.
    pub fn weekdays() -> Self {
        Self(WeekDay::WEEKDAYS.into_iter().collect())
    }

    /// The days in weekday order.
    pub fn days(&self) -> Vec<WeekDay> {
        self.0.to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = WeekDay> + '_ {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_day(&self, day: WeekDay) -> bool {
        self.0.contains(day)
    }

    pub fn has_overlap_with(&self, other: &CollectionDays) -> bool {
        self.0.intersects(&other.0)
    }

    /// Days present in both sets, in weekday order. May be empty.
    pub fn overlap_with(&self, other: &CollectionDays) -> Vec<WeekDay> {
        self.0.intersection(&other.0).to_vec()
    }

    pub fn contains_all<I>(&self, days: I) -> bool
    where
        I: IntoIterator<Item = WeekDay>,
    {
        let wanted: OrdinalSet<WeekDay> = days.into_iter().collect();
        self.0.is_superset(&wanted)
    }

    pub fn is_everyday(&self) -> bool {
        self.len() == WeekDay::ALL.len()
    }

    /// Exactly Monday through Friday.
    pub fn is_weekdays_only(&self) -> bool {
        *self == Self::weekdays()
    }

    pub fn has_weekend_collection(&self) -> bool {
        self.iter().any(WeekDay::is_weekend)
    }

    pub fn add_days<I>(&self, days: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = WeekDay>,
    {
        let added: OrdinalSet<WeekDay> = days.into_iter().collect();
        Self::new(self.0.union(&added).iter())
    }

    /// A new set without the given days. Removing every day fails.
    pub fn remove_days<I>(&self, days: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = WeekDay>,
    {
        let removed: OrdinalSet<WeekDay> = days.into_iter().collect();
        Self::new(self.0.difference(&removed).iter())
    }

    pub fn to_localized_string(&self) -> String {
        self.iter()
            .map(WeekDay::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn to_short_localized_string(&self) -> String {
        self.iter()
            .map(WeekDay::short_label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CollectionDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(WeekDay::as_str)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

impl FromStr for CollectionDays {
    type Err = ValidationError;

    fn from_str(value: &str) -> ValidationResult<Self> {
        Self::from_raw(
            value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty()),
        )
    }
}

impl Serialize for CollectionDays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.days().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CollectionDays {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}
