use std::time::{Duration, Instant};

use super::common::*;
use crate::fleet::debounce::SearchDebouncer;
use crate::fleet::domain::{VehicleId, VehicleStatus};
use crate::fleet::filter::{query, VehicleFilter};
use crate::fleet::registry::VehicleRegistry;

const WINDOW: Duration = Duration::from_millis(300);

fn registry() -> VehicleRegistry {
    VehicleRegistry::from_vehicles(fleet(), WINDOW)
}

fn visible_plates(registry: &VehicleRegistry) -> Vec<String> {
    registry
        .filtered_view()
        .into_iter()
        .map(|vehicle| vehicle.plate.clone())
        .collect()
}

#[test]
fn debouncer_waits_for_the_quiescence_window() {
    let start = Instant::now();
    let mut debouncer = SearchDebouncer::new(WINDOW);

    debouncer.edit("ab", start);
    assert!(debouncer.poll(start + Duration::from_millis(299)).is_none());
    assert_eq!(debouncer.settled(), "");
    assert_eq!(
        debouncer.poll(start + Duration::from_millis(300)),
        Some("ab")
    );
    assert!(!debouncer.is_pending());
}

#[test]
fn newer_edits_restart_the_window() {
    let start = Instant::now();
    let mut debouncer = SearchDebouncer::new(WINDOW);

    debouncer.edit("a", start);
    debouncer.edit("ab", start + Duration::from_millis(200));
    assert!(debouncer.poll(start + Duration::from_millis(400)).is_none());
    assert_eq!(
        debouncer.poll(start + Duration::from_millis(500)),
        Some("ab")
    );
}

#[test]
fn unchanged_text_does_not_trigger_a_refresh() {
    let start = Instant::now();
    let mut debouncer = SearchDebouncer::new(WINDOW);

    debouncer.edit("ford", start);
    assert!(debouncer.flush().is_some());
    debouncer.edit("ford", start + Duration::from_millis(10));
    assert!(debouncer.poll(start + Duration::from_secs(1)).is_none());
    assert!(!debouncer.is_pending());
}

#[test]
fn rapid_edits_trigger_exactly_one_refilter_with_the_final_text() {
    let start = Instant::now();
    let mut registry = registry();
    let mut refreshes = 0;

    for (offset, text) in [(0, "a"), (80, "ab"), (160, "abc")] {
        let now = start + Duration::from_millis(offset);
        registry.edit_search_text(text, now);
        if registry.tick(now) {
            refreshes += 1;
        }
    }

    for offset in (200..=1_000).step_by(50) {
        if registry.tick(start + Duration::from_millis(offset)) {
            refreshes += 1;
        }
    }

    assert_eq!(refreshes, 1);
    assert_eq!(registry.criteria().search_text, "abc");
    assert_eq!(visible_plates(&registry), vec!["1234ABC"]);
}

#[test]
fn pending_search_does_not_change_the_view() {
    let start = Instant::now();
    let mut registry = registry();

    registry.edit_search_text("fiat", start);
    assert!(registry.search_pending());
    assert_eq!(registry.filtered_view().len(), 4);
}

#[test]
fn settled_view_matches_immediate_query() {
    let start = Instant::now();
    let mut registry = registry();
    registry.set_brand_filter(Some("Ford".to_string()));
    registry.edit_search_text("def", start);
    assert!(registry.tick(start + WINDOW));

    let vehicles = fleet();
    let expected = query(
        &vehicles,
        &VehicleFilter::default()
            .with_search_text("def")
            .with_brand("Ford"),
    );
    let settled: Vec<_> = registry.filtered_view().into_iter().cloned().collect();
    let immediate: Vec<_> = expected.into_iter().cloned().collect();
    assert_eq!(settled, immediate);
}

#[test]
fn facet_filters_apply_immediately() {
    let mut registry = registry();

    registry.set_status_filter(Some(VehicleStatus::Unavailable));
    assert_eq!(visible_plates(&registry), vec!["1234ABC"]);

    registry.set_status_filter(None);
    registry.set_model_filter(Some("Daily".to_string()));
    assert_eq!(visible_plates(&registry), vec!["3456GHI"]);
}

#[test]
fn facet_values_come_from_the_full_fleet() {
    let mut registry = registry();
    registry.set_brand_filter(Some("Iveco".to_string()));

    assert_eq!(registry.brands(), vec!["Ford", "Fiat", "Iveco"]);
    assert_eq!(
        registry.models(),
        vec!["Transit", "Ducato", "Custom", "Daily"]
    );
}

#[test]
fn load_replaces_vehicles_from_the_store() {
    let store = MemoryStore::with_vehicles(fleet());
    let mut registry = VehicleRegistry::new(WINDOW);
    assert!(registry.filtered_view().is_empty());

    let loaded = registry.load(&store).expect("store lists vehicles");
    assert_eq!(loaded, 4);
    assert_eq!(registry.filtered_view().len(), 4);
}

#[test]
fn load_propagates_storage_errors() {
    let mut registry = VehicleRegistry::new(WINDOW);
    assert!(registry.load(&UnavailableStore).is_err());
}

#[test]
fn apply_saved_replaces_by_id_or_lists_new_vehicles_first() {
    let mut registry = registry();

    let mut updated = registry
        .get(&VehicleId("veh-2".to_string()))
        .cloned()
        .expect("fiat present");
    updated.model = "Doblo".to_string();
    registry.apply_saved(updated);
    assert_eq!(registry.vehicles().len(), 4);
    assert_eq!(registry.vehicles()[1].model, "Doblo");

    registry.apply_saved(vehicle("veh-9", "9999NEW", "Mercedes", "Sprinter"));
    assert_eq!(registry.vehicles().len(), 5);
    assert_eq!(visible_plates(&registry)[0], "9999NEW");
}
