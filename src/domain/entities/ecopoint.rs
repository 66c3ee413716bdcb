use super::new_id;
use crate::domain::value_objects::{AcceptedMaterials, Address, CollectionTime, EntityName};

/// A drop-off point for recyclable materials.
#[derive(Debug, Clone, PartialEq)]
pub struct Ecopoint {
    pub id: String,
    pub name: EntityName,
    pub address: Address,
    pub accepted_materials: AcceptedMaterials,
    pub opening_hours: Option<CollectionTime>,
    pub neighborhood_id: Option<String>,
    pub image_url: Option<String>,
}

impl Ecopoint {
    pub fn new(name: EntityName, address: Address, accepted_materials: AcceptedMaterials) -> Self {
        Self {
            id: new_id(),
            name,
            address,
            accepted_materials,
            opening_hours: None,
            neighborhood_id: None,
            image_url: None,
        }
    }
}
