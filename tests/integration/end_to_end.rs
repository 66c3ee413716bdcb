//! End-to-end registration flows.
//!
//! Walks through registering ecopoints, routes, neighborhoods and subscribers
//! and reading them back through both the service and the raw storage.

use crate::common::{self, fixtures, validation_error_name};
use recycling_collection::domain::value_objects::{AcceptedMaterials, CollectionDays};
use recycling_collection::service::{
    AddressPatchInput, CreateAdministratorInput, CreateNeighborhoodInput, Page,
    UpdateEcopointInput, UpdateNeighborhoodInput,
};
use recycling_collection::storage::{StorageKey, StorageProvider};
use recycling_collection::{RecyclingError, domain::value_objects::Patch};
use std::str::FromStr;

/// Test the canonical registration walkthrough
#[tokio::test]
async fn test_ecopoint_and_route_registration() {
    let service = common::service();

    let ecopoint = service
        .create_ecopoint(fixtures::ecopoint_input(
            "Ecoponto Sé",
            &["plastic", "glass", "plastic"],
        ))
        .await
        .expect("ecopoint is valid");
    assert_eq!(ecopoint.materials, ["glass", "plastic"]);
    assert_eq!(ecopoint.materials_localized, "Vidro, Plástico");

    let route = service
        .create_route(fixtures::route_input("Rota Centro", &["friday", "monday"]))
        .await
        .expect("route is valid");
    assert_eq!(route.collection_days, ["monday", "friday"]);
    assert_eq!(route.collection_days_localized, "Segunda-feira, Sexta-feira");
    assert_eq!(route.collection_time, "08:00 - 12:00");

    // Persisted forms re-parse into identical sets
    let stored = service
        .repository()
        .storage()
        .get(StorageKey::new("ecopoints", &ecopoint.id))
        .await
        .unwrap()
        .expect("ecopoint stored");
    let persisted = stored["acceptedMaterials"].as_str().unwrap();
    assert_eq!(persisted, "glass,plastic");
    assert_eq!(
        AcceptedMaterials::from_str(persisted).unwrap(),
        AcceptedMaterials::from_raw(["glass", "plastic"]).unwrap()
    );

    let stored = service
        .repository()
        .storage()
        .get(StorageKey::new("routes", &route.id))
        .await
        .unwrap()
        .expect("route stored");
    assert_eq!(stored["collectionDays"], "monday,friday");
    assert_eq!(
        CollectionDays::from_str(stored["collectionDays"].as_str().unwrap()).unwrap(),
        CollectionDays::from_raw(["monday", "friday"]).unwrap()
    );

    assert_eq!(service.get_ecopoint(&ecopoint.id).await.unwrap(), ecopoint);
    assert_eq!(service.get_route(&route.id).await.unwrap(), route);
}

#[tokio::test]
async fn test_neighborhood_route_lifecycle() {
    let service = common::service();

    let route = service
        .create_route(fixtures::route_input("Rota Leste", &["tuesday", "thursday"]))
        .await
        .unwrap();
    let neighborhood = service
        .create_neighborhood(CreateNeighborhoodInput {
            name: "Mooca".to_string(),
            population_estimate: Some(75_000),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(neighborhood.route_id, None);

    let assigned = service.assign_route(&neighborhood.id, &route.id).await.unwrap();
    assert_eq!(assigned.route_id.as_deref(), Some(route.id.as_str()));

    let on_route = service.neighborhoods_on_route(&route.id).await.unwrap();
    assert_eq!(on_route.len(), 1);
    assert_eq!(on_route[0].name, "Mooca");

    let error = service
        .assign_route(&neighborhood.id, "missing-route")
        .await
        .unwrap_err();
    assert!(matches!(error, RecyclingError::NotFound { .. }));

    let unassigned = service.unassign_route(&neighborhood.id).await.unwrap();
    assert_eq!(unassigned.route_id, None);
    assert!(service.neighborhoods_on_route(&route.id).await.unwrap().is_empty());

    let updated = service
        .update_neighborhood(
            &neighborhood.id,
            UpdateNeighborhoodInput {
                population_estimate: Patch::Clear,
                postal_code: Patch::Set("03101-000".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.population_estimate, None);
    assert_eq!(updated.postal_code.as_deref(), Some("03101-000"));
}

#[tokio::test]
async fn test_subscriber_and_administrator_email_uniqueness() {
    let service = common::service();

    service
        .create_subscriber(fixtures::subscriber_input("carlos@example.com"))
        .await
        .unwrap();
    let error = service
        .create_subscriber(fixtures::subscriber_input("CARLOS@example.com"))
        .await
        .unwrap_err();
    assert_eq!(error.status_code(), 409);

    // Administrators and subscribers are separate namespaces
    let admin = service
        .create_administrator(CreateAdministratorInput {
            name: "Carlos Lima".to_string(),
            email: "carlos@example.com".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(admin.email, "carlos@example.com");

    let error = service
        .create_administrator(CreateAdministratorInput {
            name: "Outro".to_string(),
            email: "carlos@example.com".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(error, RecyclingError::Conflict { .. }));
}

#[tokio::test]
async fn test_validation_errors_surface_by_name() {
    let service = common::service();

    let mut input = fixtures::ecopoint_input("Ecoponto", &["glass"]);
    input.address.postal_code = Some("999".to_string());
    let error = service.create_ecopoint(input).await.unwrap_err();
    assert_eq!(validation_error_name(&error), "InvalidPostalCodeError");
    assert_eq!(error.status_code(), 400);

    let mut input = fixtures::route_input("Rota", &["monday"]);
    input.start_time = "23:59".to_string();
    input.end_time = "00:00".to_string();
    let error = service.create_route(input).await.unwrap_err();
    assert_eq!(validation_error_name(&error), "InvalidCollectionTimeError");

    let error = service
        .create_subscriber(fixtures::subscriber_input("not-an-email"))
        .await
        .unwrap_err();
    assert_eq!(validation_error_name(&error), "InvalidEmailError");

    // Nothing was persisted
    assert_eq!(service.list_ecopoints(Page::default()).await.unwrap().total, 0);
    assert_eq!(service.list_routes(Page::default()).await.unwrap().total, 0);
}

#[tokio::test]
async fn test_partial_address_update() {
    let service = common::service();
    let ecopoint = service
        .create_ecopoint(fixtures::ecopoint_input("Ecoponto Sé", &["paper"]))
        .await
        .unwrap();

    let input: UpdateEcopointInput = serde_json::from_value(serde_json::json!({
        "address": {"number": null, "complement": "Fundos"},
        "acceptedMaterials": ["paper", "cooking_oil"]
    }))
    .unwrap();
    let updated = service.update_ecopoint(&ecopoint.id, input).await.unwrap();

    assert_eq!(updated.address.street, "Rua Direita");
    assert_eq!(updated.address.number, None);
    assert_eq!(updated.address.complement.as_deref(), Some("Fundos"));
    assert_eq!(updated.address.postal_code.as_deref(), Some("01002-000"));
    assert_eq!(updated.materials, ["cooking_oil", "paper"]);
    assert_eq!(updated.image_url, ecopoint.image_url);

    let error = service
        .update_ecopoint(
            &ecopoint.id,
            UpdateEcopointInput {
                address: AddressPatchInput {
                    street: Patch::Clear,
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(validation_error_name(&error), "InvalidAddressError");
}

#[tokio::test]
async fn test_pagination_is_clamped() {
    let service = common::service_with(
        recycling_collection::ServiceConfig::default()
            .with_max_page_size(3)
            .with_default_page_size(2),
    );
    for index in 0..5 {
        service
            .create_route(fixtures::route_input(&format!("Rota {}", index), &["monday"]))
            .await
            .unwrap();
    }

    let page = service.list_routes(Page::default()).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 5);

    let page = service.list_routes(Page::new(3, 50)).await.unwrap();
    assert_eq!(page.limit, 3);
    assert_eq!(page.items.len(), 2);
}

#[tokio::test]
async fn test_delete_cascades_references() {
    let service = common::service();
    let neighborhood = service
        .create_neighborhood(CreateNeighborhoodInput {
            name: "Liberdade".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let mut input = fixtures::subscriber_input("morador@example.com");
    input.neighborhood_id = Some(neighborhood.id.clone());
    let subscriber = service.create_subscriber(input).await.unwrap();

    service.delete_neighborhood(&neighborhood.id).await.unwrap();

    let subscriber = service.get_subscriber(&subscriber.id).await.unwrap();
    assert_eq!(subscriber.neighborhood_id, None);
    assert!(service.delete_neighborhood(&neighborhood.id).await.is_err());
}
