//! Property-Based Tests for Value Objects
//!
//! Uses proptest to check ordering, de-duplication and string round-trips of
//! the enum sets, and that persisted aggregates read back unchanged.

use proptest::prelude::*;
use recycling_collection::domain::Route;
use recycling_collection::domain::value_objects::{
    AcceptedMaterials, CollectionDays, CollectionTime, CollectionType, EntityName,
    MaterialType, PostalCode, WeekDay,
};
use recycling_collection::repository::Repository;
use recycling_collection::storage::InMemoryStorage;
use std::str::FromStr;

fn material() -> impl Strategy<Value = MaterialType> {
    prop::sample::select(MaterialType::ALL.to_vec())
}

fn week_day() -> impl Strategy<Value = WeekDay> {
    prop::sample::select(WeekDay::ALL.to_vec())
}

/// `HH:mm` as minutes since midnight
fn minute_of_day() -> impl Strategy<Value = u16> {
    0u16..(24 * 60)
}

fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

proptest! {
    #[test]
    fn materials_round_trip_through_string(raw in prop::collection::vec(material(), 1..20)) {
        let materials = AcceptedMaterials::new(raw.iter().copied()).unwrap();
        let reparsed = AcceptedMaterials::from_str(&materials.to_string()).unwrap();
        prop_assert_eq!(reparsed, materials);
    }

    #[test]
    fn materials_sorted_and_unique(raw in prop::collection::vec(material(), 1..20)) {
        let materials = AcceptedMaterials::new(raw.iter().copied()).unwrap().materials();
        let mut expected = raw.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(materials, expected);
    }

    #[test]
    fn materials_independent_of_input_order(raw in prop::collection::vec(material(), 1..20)) {
        let forward = AcceptedMaterials::new(raw.iter().copied()).unwrap();
        let backward = AcceptedMaterials::new(raw.iter().rev().copied()).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn days_round_trip_through_string(raw in prop::collection::vec(week_day(), 1..14)) {
        let days = CollectionDays::new(raw.iter().copied()).unwrap();
        let reparsed = CollectionDays::from_str(&days.to_string()).unwrap();
        prop_assert_eq!(reparsed, days);
    }

    #[test]
    fn days_follow_weekday_order(raw in prop::collection::vec(week_day(), 1..14)) {
        let days = CollectionDays::new(raw.iter().copied()).unwrap().days();
        prop_assert!(days.windows(2).all(|pair| pair[0].iso_number() < pair[1].iso_number()));
        prop_assert!(raw.iter().all(|day| days.contains(day)));
    }

    #[test]
    fn remove_then_add_restores_days(raw in prop::collection::vec(week_day(), 2..14), day in week_day()) {
        let days = CollectionDays::new(raw.iter().copied()).unwrap();
        if days.has_day(day) && days.len() > 1 {
            let restored = days.remove_days([day]).unwrap().add_days([day]).unwrap();
            prop_assert_eq!(restored, days);
        }
    }

    #[test]
    fn collection_time_accepts_exactly_forward_windows(start in minute_of_day(), end in minute_of_day()) {
        let result = CollectionTime::new(format_minutes(start), format_minutes(end));
        prop_assert_eq!(result.is_ok(), end > start);
        if let Ok(window) = result {
            prop_assert_eq!(window.duration_minutes(), end - start);
            prop_assert_eq!(CollectionTime::from_interval(&window.formatted_interval()).unwrap(), window);
        }
    }

    #[test]
    fn postal_code_formats_accepted_equally(digits in "[0-9]{8}") {
        let plain = PostalCode::new(&digits).unwrap();
        let hyphenated = PostalCode::new(plain.formatted()).unwrap();
        prop_assert_eq!(plain.value(), digits.as_str());
        prop_assert_eq!(hyphenated, plain);
    }

    #[test]
    fn persisted_routes_read_back_unchanged(
        raw in prop::collection::vec(week_day(), 1..7),
        start in 0u16..(12 * 60),
        length in 1u16..(12 * 60),
    ) {
        let route = Route::new(
            EntityName::new("Rota Propriedade").unwrap(),
            CollectionDays::new(raw).unwrap(),
            CollectionTime::new(format_minutes(start), format_minutes(start + length)).unwrap(),
            CollectionType::new("Seletiva").unwrap(),
        );

        let loaded: Route = tokio_test::block_on(async {
            let repository = Repository::new(InMemoryStorage::new());
            repository.save(&route).await.unwrap();
            repository.get(&route.id).await.unwrap()
        });
        prop_assert_eq!(loaded, route);
    }
}
