//! AcceptedMaterials value object for the materials an ecopoint takes in.
//!
//! The set is de-duplicated and sorted alphabetically by material name, and it
//! can never be empty. Operations that add or remove materials rebuild the set
//! through the validating constructor, so the non-empty invariant holds for
//! every derived instance as well.

use super::material_type::MaterialType;
use super::ordinal_set::OrdinalSet;
use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated, non-empty set of recyclable materials.
///
/// ## Validation Rules
///
/// - At least one material must be provided
/// - Every raw entry must name a [`MaterialType`]; all offending entries are
///   listed in the error message
///
/// ## Examples
///
/// ```rust
/// use recycling_collection::domain::value_objects::{AcceptedMaterials, MaterialType};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let materials = AcceptedMaterials::from_raw(["plastic", "glass", "plastic"])?;
///     assert_eq!(materials.materials(), vec![MaterialType::Glass, MaterialType::Plastic]);
///     assert_eq!(materials.to_string(), "glass,plastic");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AcceptedMaterials(OrdinalSet<MaterialType>);

impl AcceptedMaterials {
    /// Create a set from typed materials. Duplicates collapse.
    ///
    /// # Returns
    ///
    /// * `Ok(AcceptedMaterials)` - If at least one material was given
    /// * `Err(ValidationError::InvalidAcceptedMaterials)` - If the input is empty
    pub fn new<I>(materials: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = MaterialType>,
    {
        let set: OrdinalSet<MaterialType> = materials.into_iter().collect();
        if set.is_empty() {
            return Err(ValidationError::accepted_materials(
                "At least one material must be accepted",
            ));
        }
        Ok(Self(set))
    }

    /// Create a set from raw material names.
    ///
    /// Every entry that does not name a known material is reported.
    pub fn from_raw<I, S>(raw: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut materials = Vec::new();
        let mut invalid = Vec::new();

        for entry in raw {
            let entry = entry.as_ref();
            match MaterialType::parse(entry) {
                Some(material) => materials.push(material),
                None => invalid.push(format!("'{}'", entry)),
            }
        }

        if !invalid.is_empty() {
            return Err(ValidationError::accepted_materials(format!(
                "Unknown materials: {}. Allowed values: {}",
                invalid.join(", "),
                MaterialType::allowed_values()
            )));
        }

        Self::new(materials)
    }

    /// Every known material.
    pub fn all() -> Self {
        Self(OrdinalSet::all())
    }

    /// The materials in alphabetical order.
    pub fn materials(&self) -> Vec<MaterialType> {
        self.0.to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = MaterialType> + '_ {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no material is accepted. Construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn accepts(&self, material: MaterialType) -> bool {
        self.0.contains(material)
    }

    /// Whether every given material is accepted.
    pub fn accepts_all<I>(&self, materials: I) -> bool
    where
        I: IntoIterator<Item = MaterialType>,
    {
        let wanted: OrdinalSet<MaterialType> = materials.into_iter().collect();
        self.0.is_superset(&wanted)
    }

    /// Whether at least one of the given materials is accepted.
    pub fn accepts_any<I>(&self, materials: I) -> bool
    where
        I: IntoIterator<Item = MaterialType>,
    {
        let wanted: OrdinalSet<MaterialType> = materials.into_iter().collect();
        self.0.intersects(&wanted)
    }

    /// A new set with the given materials added.
    pub fn add_materials<I>(&self, materials: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = MaterialType>,
    {
        let added: OrdinalSet<MaterialType> = materials.into_iter().collect();
        Self::new(self.0.union(&added).iter())
    }

    /// A new set with the given materials removed.
    ///
    /// Removing every material fails rather than producing an empty set.
    pub fn remove_materials<I>(&self, materials: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = MaterialType>,
    {
        let removed: OrdinalSet<MaterialType> = materials.into_iter().collect();
        Self::new(self.0.difference(&removed).iter())
    }

    /// Localized labels joined with `", "`.
    pub fn to_localized_string(&self) -> String {
        self.iter()
            .map(MaterialType::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn localized_labels(&self) -> Vec<&'static str> {
        self.iter().map(MaterialType::label).collect()
    }
}

impl fmt::Display for AcceptedMaterials {
    /// Persistence form: comma-joined lowercase names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(MaterialType::as_str)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

impl FromStr for AcceptedMaterials {
    type Err = ValidationError;

    /// Parse the persistence form. Blank entries are ignored.
    fn from_str(value: &str) -> ValidationResult<Self> {
        Self::from_raw(
            value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty()),
        )
    }
}

impl Serialize for AcceptedMaterials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.materials().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AcceptedMaterials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}
