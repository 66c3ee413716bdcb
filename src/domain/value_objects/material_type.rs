//! Closed enumeration of recyclable material categories.

use super::ordinal_set::Ordinal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recyclable material category accepted at ecopoints.
///
/// Variants are declared in the lexical order of their persisted names, so the
/// derived `Ord` and the ordinal used by [`AcceptedMaterials`] both sort
/// alphabetically (`glass` before `plastic`).
///
/// [`AcceptedMaterials`]: super::AcceptedMaterials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    Battery,
    CookingOil,
    Electronic,
    Glass,
    Metal,
    Organic,
    Paper,
    Plastic,
}

/// pt-BR display labels, indexed by ordinal.
const MATERIAL_LABELS: [&str; 8] = [
    "Pilhas e baterias",
    "Óleo de cozinha",
    "Eletrônicos",
    "Vidro",
    "Metal",
    "Orgânico",
    "Papel",
    "Plástico",
];

impl MaterialType {
    /// Every material, in sort order.
    pub const ALL: [MaterialType; 8] = [
        MaterialType::Battery,
        MaterialType::CookingOil,
        MaterialType::Electronic,
        MaterialType::Glass,
        MaterialType::Metal,
        MaterialType::Organic,
        MaterialType::Paper,
        MaterialType::Plastic,
    ];

    /// The persisted lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialType::Battery => "battery",
            MaterialType::CookingOil => "cooking_oil",
            MaterialType::Electronic => "electronic",
            MaterialType::Glass => "glass",
            MaterialType::Metal => "metal",
            MaterialType::Organic => "organic",
            MaterialType::Paper => "paper",
            MaterialType::Plastic => "plastic",
        }
    }

    /// The localized display label.
    pub fn label(self) -> &'static str {
        MATERIAL_LABELS[self as usize]
    }

    /// Parse a persisted name, ignoring surrounding whitespace and case.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|material| material.as_str() == normalized)
    }

    /// Comma-separated list of accepted names, for error messages.
    pub(crate) fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|material| material.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Ordinal for MaterialType {
    const ALL: &'static [Self] = &MaterialType::ALL;

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
