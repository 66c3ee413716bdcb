//! Input DTO fixtures with realistic São Paulo data.

use recycling_collection::service::{
    AddressInput, CreateEcopointInput, CreateRouteInput, CreateSubscriberInput,
    FileProblemReportInput, GeoLocationInput, TimeWindowInput,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn address_input() -> AddressInput {
    AddressInput {
        street: "Rua Direita".to_string(),
        number: Some("250".to_string()),
        complement: None,
        postal_code: Some("01002000".to_string()),
        geo_location: Some(GeoLocationInput {
            latitude: -23.5489,
            longitude: -46.6367,
        }),
    }
}

pub fn route_input(name: &str, days: &[&str]) -> CreateRouteInput {
    CreateRouteInput {
        name: name.to_string(),
        collection_days: strings(days),
        start_time: "08:00".to_string(),
        end_time: "12:00".to_string(),
        collection_type: "Coleta Seletiva".to_string(),
        active: None,
    }
}

pub fn ecopoint_input(name: &str, materials: &[&str]) -> CreateEcopointInput {
    CreateEcopointInput {
        name: name.to_string(),
        address: address_input(),
        accepted_materials: strings(materials),
        opening_hours: Some(TimeWindowInput {
            start: "07:00".to_string(),
            end: "19:00".to_string(),
        }),
        neighborhood_id: None,
        image_url: Some("https://img.example.com/ecoponto.jpg".to_string()),
    }
}

pub fn subscriber_input(email: &str) -> CreateSubscriberInput {
    CreateSubscriberInput {
        name: "Carlos Lima".to_string(),
        email: email.to_string(),
        address: address_input(),
        neighborhood_id: None,
    }
}

pub fn problem_report_input(attachments: &[&str]) -> FileProblemReportInput {
    FileProblemReportInput {
        problem_type: "Coleta não realizada".to_string(),
        description: "Os recicláveis da rua não foram recolhidos na sexta-feira".to_string(),
        attachments: strings(attachments),
        address: Some(address_input()),
        reporter_email: Some("carlos@example.com".to_string()),
    }
}
