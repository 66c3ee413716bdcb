//! Address value object for ecopoints, subscribers and problem reports.
//!
//! Address is the only composite value object: it aggregates a street with an
//! optional number and complement, and optionally embeds a [`PostalCode`] and a
//! [`GeoLocation`]. The nested value objects are already valid by construction
//! and are not checked again here.
//!
//! Partial updates go through [`Address::with_changes`], where every field is a
//! [`Patch`] so that "leave as is" and "remove" are distinct requests.

use super::{GeoLocation, PostalCode};
use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A three-way update for a single field.
///
/// When deserialized as a struct field marked `#[serde(default)]`, a missing
/// key becomes `Keep`, an explicit `null` becomes `Clear`, and any other value
/// becomes `Set`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    /// Resolve the patch against the current value of an optional field.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Keep => current,
            Patch::Clear => None,
            Patch::Set(value) => Some(value),
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Patch::Keep => Patch::Keep,
            Patch::Clear => Patch::Clear,
            Patch::Set(value) => Patch::Set(f(value)),
        }
    }

    /// Like [`Patch::map`] for fallible conversions, e.g. building a value
    /// object from the raw patched input.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Patch<U>, E> {
        Ok(match self {
            Patch::Keep => Patch::Keep,
            Patch::Clear => Patch::Clear,
            Patch::Set(value) => Patch::Set(f(value)?),
        })
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// `Some` sets the value, `None` clears it.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

/// Requested changes to an [`Address`]. Every field defaults to [`Patch::Keep`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressChanges {
    pub street: Patch<String>,
    pub number: Patch<String>,
    pub complement: Patch<String>,
    pub postal_code: Patch<PostalCode>,
    pub geo_location: Patch<GeoLocation>,
}

/// A validated postal address.
///
/// ## Validation Rules
///
/// - `street` is required and cannot be blank after trimming
/// - `number` and `complement` are trimmed; blank values are stored as absent
///
/// ## Examples
///
/// ```rust
/// use recycling_collection::domain::value_objects::{Address, AddressChanges, Patch, PostalCode};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let address = Address::new(
///         "Rua das Flores",
///         Some("120"),
///         Some("Bloco B"),
///         Some(PostalCode::new("01310-100")?),
///         None,
///     )?;
///     assert_eq!(address.to_string(), "Rua das Flores, 120 - Bloco B, CEP 01310-100");
///
///     let moved = address.with_changes(AddressChanges {
///         complement: Patch::Clear,
///         ..Default::default()
///     })?;
///     assert_eq!(moved.complement(), None);
///     assert_eq!(moved.number(), Some("120"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    street: String,
    number: Option<String>,
    complement: Option<String>,
    postal_code: Option<PostalCode>,
    geo_location: Option<GeoLocation>,
}

impl Address {
    pub fn new(
        street: impl AsRef<str>,
        number: Option<impl AsRef<str>>,
        complement: Option<impl AsRef<str>>,
        postal_code: Option<PostalCode>,
        geo_location: Option<GeoLocation>,
    ) -> ValidationResult<Self> {
        let street = street.as_ref().trim();
        if street.is_empty() {
            return Err(ValidationError::address("Street cannot be empty"));
        }

        Ok(Self {
            street: street.to_string(),
            number: Self::normalize_optional(number),
            complement: Self::normalize_optional(complement),
            postal_code,
            geo_location,
        })
    }

    /// Address with only a street.
    pub fn from_street(street: impl AsRef<str>) -> ValidationResult<Self> {
        Self::new(street, None::<&str>, None::<&str>, None, None)
    }

    fn normalize_optional(value: Option<impl AsRef<str>>) -> Option<String> {
        value
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    pub fn complement(&self) -> Option<&str> {
        self.complement.as_deref()
    }

    pub fn postal_code(&self) -> Option<&PostalCode> {
        self.postal_code.as_ref()
    }

    pub fn geo_location(&self) -> Option<&GeoLocation> {
        self.geo_location.as_ref()
    }

    /// Build a new address from this one with `changes` applied.
    ///
    /// The result goes through [`Address::new`], so a `Set` street that is
    /// blank fails the same way as on creation. Clearing the street is always
    /// an error.
    pub fn with_changes(&self, changes: AddressChanges) -> ValidationResult<Self> {
        let street = match changes.street {
            Patch::Keep => self.street.clone(),
            Patch::Clear => {
                return Err(ValidationError::address(
                    "Street is required and cannot be cleared",
                ));
            }
            Patch::Set(street) => street,
        };

        Self::new(
            street,
            changes.number.apply(self.number.clone()),
            changes.complement.apply(self.complement.clone()),
            changes.postal_code.apply(self.postal_code.clone()),
            changes.geo_location.apply(self.geo_location),
        )
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.street)?;
        if let Some(number) = &self.number {
            write!(f, ", {}", number)?;
        }
        if let Some(complement) = &self.complement {
            write!(f, " - {}", complement)?;
        }
        if let Some(postal_code) = &self.postal_code {
            write!(f, ", CEP {}", postal_code.formatted())?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            street: String,
            number: Option<String>,
            complement: Option<String>,
            postal_code: Option<PostalCode>,
            geo_location: Option<GeoLocation>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(
            raw.street,
            raw.number,
            raw.complement,
            raw.postal_code,
            raw.geo_location,
        )
        .map_err(serde::de::Error::custom)
    }
}
