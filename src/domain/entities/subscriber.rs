use super::new_id;
use crate::domain::value_objects::{Address, Email, EntityName};
use chrono::{DateTime, Utc};

/// A resident subscribed to collection notices.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscriber {
    pub id: String,
    pub name: EntityName,
    pub email: Email,
    pub address: Address,
    pub neighborhood_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Subscriber {
    pub fn new(name: EntityName, email: Email, address: Address) -> Self {
        Self {
            id: new_id(),
            name,
            email,
            address,
            neighborhood_id: None,
            created_at: Utc::now(),
        }
    }
}
