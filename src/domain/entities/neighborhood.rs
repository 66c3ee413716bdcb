use super::new_id;
use crate::domain::value_objects::{EntityName, GeoLocation, PopulationEstimate, PostalCode};

/// A served area, optionally attached to the route that collects in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighborhood {
    pub id: String,
    pub name: EntityName,
    pub population_estimate: Option<PopulationEstimate>,
    pub postal_code: Option<PostalCode>,
    pub geo_location: Option<GeoLocation>,
    pub route_id: Option<String>,
}

impl Neighborhood {
    pub fn new(name: EntityName) -> Self {
        Self {
            id: new_id(),
            name,
            population_estimate: None,
            postal_code: None,
            geo_location: None,
            route_id: None,
        }
    }

    pub fn with_population_estimate(mut self, estimate: PopulationEstimate) -> Self {
        self.population_estimate = Some(estimate);
        self
    }

    pub fn with_postal_code(mut self, postal_code: PostalCode) -> Self {
        self.postal_code = Some(postal_code);
        self
    }

    pub fn with_geo_location(mut self, geo_location: GeoLocation) -> Self {
        self.geo_location = Some(geo_location);
        self
    }
}
