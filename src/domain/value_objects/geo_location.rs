//! GeoLocation value object for latitude/longitude pairs.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A validated WGS84 coordinate.
///
/// Equality compares both components exactly, without an epsilon, so two
/// coordinates that differ only by floating-point noise are not equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    /// Create a new coordinate.
    ///
    /// # Returns
    ///
    /// * `Ok(GeoLocation)` - If latitude is within [-90, 90] and longitude within [-180, 180]
    /// * `Err(ValidationError::InvalidGeoLocation)` - Otherwise (NaN included)
    pub fn new(latitude: f64, longitude: f64) -> ValidationResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::geo_location(format!(
                "Latitude {} must be between -90 and 90",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::geo_location(format!(
                "Longitude {} must be between -180 and 180",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl<'de> Deserialize<'de> for GeoLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}
