//! Input and output DTOs for the use-case layer.
//!
//! Inputs carry raw primitives so that every rule is enforced by the value
//! object constructors inside the use-cases, never by deserialization.
//! Outputs flatten value objects into display-ready fields. All DTOs use
//! camelCase JSON.
//!
//! Update inputs distinguish three states per optional field through
//! [`Patch`]: a missing key keeps the current value, `null` clears it and any
//! other value replaces it.

use crate::domain::value_objects::{
    Address, AddressChanges, CollectionTime, GeoLocation, Patch, PostalCode,
};
use crate::domain::{Administrator, Ecopoint, Neighborhood, ProblemReport, Route, Subscriber};
use crate::error::ValidationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Requested page of a listing. A missing `limit` uses the configured default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
    pub offset: usize,
    pub limit: Option<usize>,
}

impl Page {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            offset,
            limit: Some(limit),
        }
    }

    pub fn first(limit: usize) -> Self {
        Self::new(0, limit)
    }
}

/// One page of results plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOutput<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocationInput {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocationInput {
    pub(crate) fn build(self) -> ValidationResult<GeoLocation> {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindowInput {
    pub start: String,
    pub end: String,
}

impl TimeWindowInput {
    pub(crate) fn build(self) -> ValidationResult<CollectionTime> {
        CollectionTime::new(self.start, self.end)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub street: String,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub geo_location: Option<GeoLocationInput>,
}

impl AddressInput {
    pub(crate) fn build(self) -> ValidationResult<Address> {
        Address::new(
            self.street,
            self.number,
            self.complement,
            self.postal_code.map(PostalCode::new).transpose()?,
            self.geo_location.map(GeoLocationInput::build).transpose()?,
        )
    }
}

/// Partial address update. Every field defaults to keeping the current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressPatchInput {
    pub street: Patch<String>,
    pub number: Patch<String>,
    pub complement: Patch<String>,
    pub postal_code: Patch<String>,
    pub geo_location: Patch<GeoLocationInput>,
}

impl AddressPatchInput {
    pub fn is_empty(&self) -> bool {
        self.street.is_keep()
            && self.number.is_keep()
            && self.complement.is_keep()
            && self.postal_code.is_keep()
            && self.geo_location.is_keep()
    }

    pub(crate) fn build(self) -> ValidationResult<AddressChanges> {
        Ok(AddressChanges {
            street: self.street,
            number: self.number,
            complement: self.complement,
            postal_code: self.postal_code.try_map(PostalCode::new)?,
            geo_location: self.geo_location.try_map(GeoLocationInput::build)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressOutput {
    pub street: String,
    pub number: Option<String>,
    pub complement: Option<String>,
    /// Display form, `NNNNN-NNN`.
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub formatted: String,
}

impl From<&Address> for AddressOutput {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            number: address.number().map(str::to_string),
            complement: address.complement().map(str::to_string),
            postal_code: address.postal_code().map(PostalCode::formatted),
            latitude: address.geo_location().map(GeoLocation::latitude),
            longitude: address.geo_location().map(GeoLocation::longitude),
            formatted: address.to_string(),
        }
    }
}

// Administrators

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdministratorInput {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministratorOutput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Administrator> for AdministratorOutput {
    fn from(administrator: &Administrator) -> Self {
        Self {
            id: administrator.id.clone(),
            name: administrator.name.to_string(),
            email: administrator.email.to_string(),
            created_at: administrator.created_at,
        }
    }
}

// Neighborhoods

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateNeighborhoodInput {
    pub name: String,
    pub population_estimate: Option<i64>,
    pub postal_code: Option<String>,
    pub geo_location: Option<GeoLocationInput>,
    pub route_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateNeighborhoodInput {
    pub name: Option<String>,
    pub population_estimate: Patch<i64>,
    pub postal_code: Patch<String>,
    pub geo_location: Patch<GeoLocationInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodOutput {
    pub id: String,
    pub name: String,
    pub population_estimate: Option<u64>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub route_id: Option<String>,
}

impl From<&Neighborhood> for NeighborhoodOutput {
    fn from(neighborhood: &Neighborhood) -> Self {
        Self {
            id: neighborhood.id.clone(),
            name: neighborhood.name.to_string(),
            population_estimate: neighborhood.population_estimate.map(|p| p.value()),
            postal_code: neighborhood.postal_code.as_ref().map(PostalCode::formatted),
            latitude: neighborhood.geo_location.map(|g| g.latitude()),
            longitude: neighborhood.geo_location.map(|g| g.longitude()),
            route_id: neighborhood.route_id.clone(),
        }
    }
}

// Routes

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteInput {
    pub name: String,
    pub collection_days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    pub collection_type: String,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Route update. Absent fields keep their value; a route has no optional
/// fields to clear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateRouteInput {
    pub name: Option<String>,
    pub collection_days: Option<Vec<String>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub collection_type: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOutput {
    pub id: String,
    pub name: String,
    pub collection_days: Vec<String>,
    pub collection_days_localized: String,
    pub collection_days_short: String,
    /// `HH:mm - HH:mm`
    pub collection_time: String,
    pub start_time: String,
    pub end_time: String,
    pub collection_type: String,
    pub active: bool,
}

impl From<&Route> for RouteOutput {
    fn from(route: &Route) -> Self {
        Self {
            id: route.id.clone(),
            name: route.name.to_string(),
            collection_days: route
                .collection_days
                .iter()
                .map(|day| day.as_str().to_string())
                .collect(),
            collection_days_localized: route.collection_days.to_localized_string(),
            collection_days_short: route.collection_days.to_short_localized_string(),
            collection_time: route.collection_time.formatted_interval(),
            start_time: route.collection_time.start().to_string(),
            end_time: route.collection_time.end().to_string(),
            collection_type: route.collection_type.to_string(),
            active: route.active,
        }
    }
}

// Ecopoints

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEcopointInput {
    pub name: String,
    pub address: AddressInput,
    pub accepted_materials: Vec<String>,
    #[serde(default)]
    pub opening_hours: Option<TimeWindowInput>,
    #[serde(default)]
    pub neighborhood_id: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateEcopointInput {
    pub name: Option<String>,
    pub address: AddressPatchInput,
    pub accepted_materials: Option<Vec<String>>,
    pub opening_hours: Patch<TimeWindowInput>,
    pub neighborhood_id: Patch<String>,
    pub image_url: Patch<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcopointOutput {
    pub id: String,
    pub name: String,
    pub address: AddressOutput,
    pub materials: Vec<String>,
    pub materials_localized: String,
    pub opening_hours: Option<String>,
    pub neighborhood_id: Option<String>,
    pub image_url: Option<String>,
}

impl From<&Ecopoint> for EcopointOutput {
    fn from(ecopoint: &Ecopoint) -> Self {
        Self {
            id: ecopoint.id.clone(),
            name: ecopoint.name.to_string(),
            address: AddressOutput::from(&ecopoint.address),
            materials: ecopoint
                .accepted_materials
                .iter()
                .map(|material| material.as_str().to_string())
                .collect(),
            materials_localized: ecopoint.accepted_materials.to_localized_string(),
            opening_hours: ecopoint
                .opening_hours
                .as_ref()
                .map(CollectionTime::formatted_interval),
            neighborhood_id: ecopoint.neighborhood_id.clone(),
            image_url: ecopoint.image_url.clone(),
        }
    }
}

// Subscribers

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriberInput {
    pub name: String,
    pub email: String,
    pub address: AddressInput,
    #[serde(default)]
    pub neighborhood_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateSubscriberInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: AddressPatchInput,
    pub neighborhood_id: Patch<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberOutput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: AddressOutput,
    pub neighborhood_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Subscriber> for SubscriberOutput {
    fn from(subscriber: &Subscriber) -> Self {
        Self {
            id: subscriber.id.clone(),
            name: subscriber.name.to_string(),
            email: subscriber.email.to_string(),
            address: AddressOutput::from(&subscriber.address),
            neighborhood_id: subscriber.neighborhood_id.clone(),
            created_at: subscriber.created_at,
        }
    }
}

// Problem reports

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileProblemReportInput {
    pub problem_type: String,
    pub description: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub address: Option<AddressInput>,
    #[serde(default)]
    pub reporter_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemReportOutput {
    pub id: String,
    pub protocol: String,
    pub problem_type: String,
    pub description: String,
    pub attachments: Vec<String>,
    pub status: String,
    pub status_label: String,
    pub address: Option<AddressOutput>,
    pub reporter_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ProblemReport> for ProblemReportOutput {
    fn from(report: &ProblemReport) -> Self {
        Self {
            id: report.id.clone(),
            protocol: report.protocol.to_string(),
            problem_type: report.problem_type.to_string(),
            description: report.description.to_string(),
            attachments: report.attachments.urls().to_vec(),
            status: report.status.as_str().to_string(),
            status_label: report.status.label().to_string(),
            address: report.address.as_ref().map(AddressOutput::from),
            reporter_email: report.reporter_email.as_ref().map(|e| e.to_string()),
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}
