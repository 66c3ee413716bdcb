//! Flat persisted records and their conversion to and from aggregates.
//!
//! Value objects are written in their primitive persisted form (comma-joined
//! sets, `"HH:mm - HH:mm"` windows, bare-digit postal codes, upper-case
//! statuses) and rebuilt through their validating constructors on read. A
//! stored row that violates an invariant surfaces as the matching
//! [`ValidationError`].

use super::Persistable;
use crate::domain::value_objects::{
    AcceptedMaterials, Address, CollectionDays, CollectionTime, CollectionType, Email,
    EntityName, GeoLocation, PopulationEstimate, PostalCode, ProblemAttachments,
    ProblemDescription, ProblemProtocol, ProblemStatus, ProblemType,
};
use crate::domain::{Administrator, Ecopoint, Neighborhood, ProblemReport, Route, Subscriber};
use crate::error::{RecyclingResult, ValidationError, ValidationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Address columns shared by every record that embeds an address.
///
/// An absent `street` means the record has no address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressColumns {
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AddressColumns {
    fn from_address(address: Option<&Address>) -> Self {
        let Some(address) = address else {
            return Self::default();
        };
        Self {
            street: Some(address.street().to_string()),
            number: address.number().map(str::to_string),
            complement: address.complement().map(str::to_string),
            postal_code: address.postal_code().map(|c| c.value().to_string()),
            latitude: address.geo_location().map(GeoLocation::latitude),
            longitude: address.geo_location().map(GeoLocation::longitude),
        }
    }

    fn into_optional_address(self) -> ValidationResult<Option<Address>> {
        let Some(street) = self.street else {
            return Ok(None);
        };
        Address::new(
            street,
            self.number,
            self.complement,
            postal_code_column(self.postal_code)?,
            geo_location_columns(self.latitude, self.longitude)?,
        )
        .map(Some)
    }

    fn into_address(self) -> ValidationResult<Address> {
        self.into_optional_address()?
            .ok_or_else(|| ValidationError::address("Street cannot be empty"))
    }
}

fn postal_code_column(value: Option<String>) -> ValidationResult<Option<PostalCode>> {
    value.map(PostalCode::new).transpose()
}

fn geo_location_columns(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> ValidationResult<Option<GeoLocation>> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => GeoLocation::new(latitude, longitude).map(Some),
        (None, None) => Ok(None),
        _ => Err(ValidationError::geo_location(
            "Latitude and longitude must be stored together",
        )),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministratorRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Persistable for Administrator {
    const COLLECTION: &'static str = "administrators";
    const ENTITY: &'static str = "Administrator";
    type Record = AdministratorRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> AdministratorRecord {
        AdministratorRecord {
            id: self.id.clone(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            created_at: self.created_at,
        }
    }

    fn from_record(record: AdministratorRecord) -> RecyclingResult<Self> {
        Ok(Self {
            id: record.id,
            name: EntityName::new(record.name)?,
            email: Email::new(record.email)?,
            created_at: record.created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodRecord {
    pub id: String,
    pub name: String,
    pub population_estimate: Option<i64>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub route_id: Option<String>,
}

impl Persistable for Neighborhood {
    const COLLECTION: &'static str = "neighborhoods";
    const ENTITY: &'static str = "Neighborhood";
    type Record = NeighborhoodRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> NeighborhoodRecord {
        NeighborhoodRecord {
            id: self.id.clone(),
            name: self.name.to_string(),
            population_estimate: self
                .population_estimate
                .map(|p| i64::try_from(p.value()).unwrap_or(i64::MAX)),
            postal_code: self.postal_code.as_ref().map(|c| c.value().to_string()),
            latitude: self.geo_location.map(|g| g.latitude()),
            longitude: self.geo_location.map(|g| g.longitude()),
            route_id: self.route_id.clone(),
        }
    }

    fn from_record(record: NeighborhoodRecord) -> RecyclingResult<Self> {
        Ok(Self {
            id: record.id,
            name: EntityName::new(record.name)?,
            population_estimate: record
                .population_estimate
                .map(PopulationEstimate::new)
                .transpose()?,
            postal_code: postal_code_column(record.postal_code)?,
            geo_location: geo_location_columns(record.latitude, record.longitude)?,
            route_id: record.route_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub id: String,
    pub name: String,
    /// Comma-joined lowercase days, e.g. `monday,friday`.
    pub collection_days: String,
    /// `HH:mm - HH:mm`
    pub collection_time: String,
    pub collection_type: String,
    pub active: bool,
}

impl Persistable for Route {
    const COLLECTION: &'static str = "routes";
    const ENTITY: &'static str = "Route";
    type Record = RouteRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> RouteRecord {
        RouteRecord {
            id: self.id.clone(),
            name: self.name.to_string(),
            collection_days: self.collection_days.to_string(),
            collection_time: self.collection_time.formatted_interval(),
            collection_type: self.collection_type.to_string(),
            active: self.active,
        }
    }

    fn from_record(record: RouteRecord) -> RecyclingResult<Self> {
        Ok(Self {
            id: record.id,
            name: EntityName::new(record.name)?,
            collection_days: record.collection_days.parse::<CollectionDays>()?,
            collection_time: CollectionTime::from_interval(&record.collection_time)?,
            collection_type: CollectionType::new(record.collection_type)?,
            active: record.active,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcopointRecord {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub address: AddressColumns,
    /// Comma-joined lowercase materials, e.g. `glass,plastic`.
    pub accepted_materials: String,
    pub opening_hours: Option<String>,
    pub neighborhood_id: Option<String>,
    pub image_url: Option<String>,
}

impl Persistable for Ecopoint {
    const COLLECTION: &'static str = "ecopoints";
    const ENTITY: &'static str = "Ecopoint";
    type Record = EcopointRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> EcopointRecord {
        EcopointRecord {
            id: self.id.clone(),
            name: self.name.to_string(),
            address: AddressColumns::from_address(Some(&self.address)),
            accepted_materials: self.accepted_materials.to_string(),
            opening_hours: self.opening_hours.as_ref().map(CollectionTime::formatted_interval),
            neighborhood_id: self.neighborhood_id.clone(),
            image_url: self.image_url.clone(),
        }
    }

    fn from_record(record: EcopointRecord) -> RecyclingResult<Self> {
        Ok(Self {
            id: record.id,
            name: EntityName::new(record.name)?,
            address: record.address.into_address()?,
            accepted_materials: record.accepted_materials.parse::<AcceptedMaterials>()?,
            opening_hours: record
                .opening_hours
                .as_deref()
                .map(CollectionTime::from_interval)
                .transpose()?,
            neighborhood_id: record.neighborhood_id,
            image_url: record.image_url,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub address: AddressColumns,
    pub neighborhood_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Persistable for Subscriber {
    const COLLECTION: &'static str = "subscribers";
    const ENTITY: &'static str = "Subscriber";
    type Record = SubscriberRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> SubscriberRecord {
        SubscriberRecord {
            id: self.id.clone(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            address: AddressColumns::from_address(Some(&self.address)),
            neighborhood_id: self.neighborhood_id.clone(),
            created_at: self.created_at,
        }
    }

    fn from_record(record: SubscriberRecord) -> RecyclingResult<Self> {
        Ok(Self {
            id: record.id,
            name: EntityName::new(record.name)?,
            email: Email::new(record.email)?,
            address: record.address.into_address()?,
            neighborhood_id: record.neighborhood_id,
            created_at: record.created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemReportRecord {
    pub id: String,
    pub protocol: String,
    pub problem_type: String,
    pub description: String,
    /// Comma-joined attachment URLs.
    pub attachments: String,
    /// Upper-case status name.
    pub status: String,
    #[serde(flatten)]
    pub address: AddressColumns,
    pub reporter_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Persistable for ProblemReport {
    const COLLECTION: &'static str = "problem_reports";
    const ENTITY: &'static str = "ProblemReport";
    type Record = ProblemReportRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> ProblemReportRecord {
        ProblemReportRecord {
            id: self.id.clone(),
            protocol: self.protocol.to_string(),
            problem_type: self.problem_type.to_string(),
            description: self.description.to_string(),
            attachments: self.attachments.to_string(),
            status: self.status.as_str().to_string(),
            address: AddressColumns::from_address(self.address.as_ref()),
            reporter_email: self.reporter_email.as_ref().map(Email::to_string),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_record(record: ProblemReportRecord) -> RecyclingResult<Self> {
        Ok(Self {
            id: record.id,
            protocol: ProblemProtocol::new(record.protocol)?,
            problem_type: ProblemType::new(record.problem_type)?,
            description: ProblemDescription::new(record.description)?,
            attachments: ProblemAttachments::from_comma_separated(&record.attachments)?,
            status: ProblemStatus::new(record.status)?,
            address: record.address.into_optional_address()?,
            reporter_email: record.reporter_email.map(Email::new).transpose()?,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}
