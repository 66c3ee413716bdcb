//! Serialization Tests
//!
//! Value objects serialize as their persisted primitives and deserialize
//! through their validating constructors.

use recycling_collection::ServiceConfig;
use recycling_collection::domain::value_objects::{
    AcceptedMaterials, Address, CollectionDays, CollectionTime, Email, GeoLocation, Patch,
    PostalCode, ProblemProtocol, ProblemStatus,
};
use recycling_collection::service::{UpdateEcopointInput, UpdateNeighborhoodInput};
use serde_json::json;

#[test]
fn test_scalars_serialize_as_primitives() {
    let email = Email::new("Fiscal@Example.com").unwrap();
    assert_eq!(serde_json::to_value(&email).unwrap(), json!("fiscal@example.com"));

    let cep = PostalCode::new("01001-000").unwrap();
    assert_eq!(serde_json::to_value(&cep).unwrap(), json!("01001000"));

    let status = ProblemStatus::InAnalysis;
    assert_eq!(serde_json::to_value(status).unwrap(), json!("IN_ANALYSIS"));
}

#[test]
fn test_deserialization_validates() {
    assert!(serde_json::from_value::<Email>(json!("nope")).is_err());
    assert!(serde_json::from_value::<PostalCode>(json!("123")).is_err());
    assert!(serde_json::from_value::<ProblemProtocol>(json!("PR-2026-1")).is_err());
    assert!(serde_json::from_value::<GeoLocation>(json!({"latitude": 91.0, "longitude": 0.0})).is_err());
    assert!(serde_json::from_value::<AcceptedMaterials>(json!([])).is_err());

    let status: ProblemStatus = serde_json::from_value(json!("resolved")).unwrap();
    assert_eq!(status, ProblemStatus::Resolved);
}

#[test]
fn test_sets_serialize_as_sorted_arrays() {
    let materials = AcceptedMaterials::from_raw(["plastic", "glass"]).unwrap();
    assert_eq!(serde_json::to_value(materials).unwrap(), json!(["glass", "plastic"]));

    let days: CollectionDays = serde_json::from_value(json!(["friday", "monday"])).unwrap();
    assert_eq!(serde_json::to_value(days).unwrap(), json!(["monday", "friday"]));
}

#[test]
fn test_collection_time_json() {
    let window = CollectionTime::new("06:30", "10:00").unwrap();
    let value = serde_json::to_value(&window).unwrap();
    assert_eq!(value, json!({"start": "06:30", "end": "10:00"}));

    let back: CollectionTime = serde_json::from_value(value).unwrap();
    assert_eq!(back, window);
    assert!(serde_json::from_value::<CollectionTime>(json!({"start": "10:00", "end": "06:30"})).is_err());
}

#[test]
fn test_address_json_round_trip() {
    let address = Address::new(
        "Rua da Consolação",
        Some("896"),
        None::<&str>,
        Some(PostalCode::new("01302-000").unwrap()),
        None,
    )
    .unwrap();

    let value = serde_json::to_value(&address).unwrap();
    assert_eq!(value["street"], "Rua da Consolação");
    assert_eq!(value["postalCode"], "01302000");

    let back: Address = serde_json::from_value(value).unwrap();
    assert_eq!(back, address);
    assert!(serde_json::from_value::<Address>(json!({"street": " "})).is_err());
}

/// Test missing, null and present keys map to keep, clear and set
#[test]
fn test_update_inputs_patch_semantics() {
    let input: UpdateNeighborhoodInput = serde_json::from_value(json!({
        "postalCode": null,
        "populationEstimate": 1200
    }))
    .unwrap();
    assert_eq!(input.name, None);
    assert_eq!(input.postal_code, Patch::Clear);
    assert_eq!(input.population_estimate, Patch::Set(1200));
    assert!(input.geo_location.is_keep());

    let input: UpdateEcopointInput = serde_json::from_value(json!({
        "address": {"complement": null},
        "imageUrl": "https://img.example.com/new.jpg"
    }))
    .unwrap();
    assert_eq!(input.address.complement, Patch::Clear);
    assert!(input.address.street.is_keep());
    assert_eq!(
        input.image_url,
        Patch::Set("https://img.example.com/new.jpg".to_string())
    );
    assert!(input.opening_hours.is_keep());
}

#[test]
fn test_service_config_from_json() {
    let config: ServiceConfig =
        serde_json::from_value(json!({"maxAttachments": 10, "defaultPageSize": 50})).unwrap();
    assert_eq!(config.max_attachments, 10);
    assert_eq!(config.max_page_size, 100);
    assert!(config.validate().is_ok());
}
