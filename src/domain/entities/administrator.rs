use super::new_id;
use crate::domain::value_objects::{Email, EntityName};
use chrono::{DateTime, Utc};

/// A dashboard user. Credentials are managed outside this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Administrator {
    pub id: String,
    pub name: EntityName,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

impl Administrator {
    pub fn new(name: EntityName, email: Email) -> Self {
        Self {
            id: new_id(),
            name,
            email,
            created_at: Utc::now(),
        }
    }
}
