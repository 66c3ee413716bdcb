use super::new_id;
use crate::domain::value_objects::{CollectionDays, CollectionTime, CollectionType, EntityName, WeekDay};

/// A collection route: which days, at what time, and what kind of collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    pub name: EntityName,
    pub collection_days: CollectionDays,
    pub collection_time: CollectionTime,
    pub collection_type: CollectionType,
    pub active: bool,
}

impl Route {
    pub fn new(
        name: EntityName,
        collection_days: CollectionDays,
        collection_time: CollectionTime,
        collection_type: CollectionType,
    ) -> Self {
        Self {
            id: new_id(),
            name,
            collection_days,
            collection_time,
            collection_type,
            active: true,
        }
    }

    /// Active and scheduled on `day`.
    pub fn collects_on(&self, day: WeekDay) -> bool {
        self.active && self.collection_days.has_day(day)
    }
}
