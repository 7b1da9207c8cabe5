use super::common::*;
use crate::fleet::domain::{Vehicle, VehicleStatus};
use crate::fleet::filter::{distinct_brands, distinct_models, query, VehicleFilter};

fn plates(vehicles: &[&Vehicle]) -> Vec<String> {
    vehicles.iter().map(|vehicle| vehicle.plate.clone()).collect()
}

#[test]
fn default_criteria_return_every_vehicle_in_order() {
    let vehicles = fleet();
    let result = query(&vehicles, &VehicleFilter::default());
    assert_eq!(result.len(), vehicles.len());
    assert!(result
        .iter()
        .zip(vehicles.iter())
        .all(|(left, right)| *left == right));
}

#[test]
fn search_matches_plate_case_insensitively() {
    let vehicles = vec![
        vehicle("veh-1", "1234ABC", "Ford", "Transit"),
        vehicle("veh-2", "5678XYZ", "Fiat", "Ducato"),
    ];
    let result = query(&vehicles, &VehicleFilter::default().with_search_text("abc"));
    assert_eq!(plates(&result), vec!["1234ABC"]);
}

#[test]
fn search_matches_brand_or_model() {
    let vehicles = fleet();

    let by_brand = query(&vehicles, &VehicleFilter::default().with_search_text("FORD"));
    assert_eq!(plates(&by_brand), vec!["1234ABC", "9012DEF"]);

    let by_model = query(&vehicles, &VehicleFilter::default().with_search_text("uca"));
    assert_eq!(plates(&by_model), vec!["5678XYZ"]);
}

#[test]
fn facets_match_exactly() {
    let vehicles = fleet();

    let fords = query(&vehicles, &VehicleFilter::default().with_brand("Ford"));
    assert_eq!(fords.len(), 2);

    let lowercase = query(&vehicles, &VehicleFilter::default().with_brand("ford"));
    assert!(lowercase.is_empty());

    let partial = query(&vehicles, &VehicleFilter::default().with_model("Trans"));
    assert!(partial.is_empty());
}

#[test]
fn facets_combine_conjunctively() {
    let vehicles = fleet();

    let available_fords = query(
        &vehicles,
        &VehicleFilter::default()
            .with_brand("Ford")
            .with_status(VehicleStatus::Available),
    );
    assert_eq!(plates(&available_fords), vec!["9012DEF"]);

    let none = query(
        &vehicles,
        &VehicleFilter::default()
            .with_search_text("iveco")
            .with_model("Transit"),
    );
    assert!(none.is_empty());
}

#[test]
fn empty_facet_strings_are_unconstrained() {
    let vehicles = fleet();
    let criteria = VehicleFilter::default().with_brand("").with_model("");
    assert!(criteria.is_unconstrained());
    assert_eq!(query(&vehicles, &criteria).len(), vehicles.len());
}

#[test]
fn result_is_an_order_preserving_subset() {
    let vehicles = fleet();
    let result = query(&vehicles, &VehicleFilter::default().with_search_text("a"));

    let mut cursor = vehicles.iter();
    for selected in result {
        assert!(
            cursor.any(|candidate| candidate == selected),
            "filtered vehicles must appear in input order"
        );
    }
}

#[test]
fn matches_agrees_with_query() {
    let vehicles = fleet();
    let criteria = VehicleFilter::default().with_status(VehicleStatus::Unavailable);
    let expected: Vec<&Vehicle> = vehicles.iter().filter(|v| criteria.matches(v)).collect();
    assert_eq!(query(&vehicles, &criteria), expected);
}

#[test]
fn distinct_values_collapse_duplicates_in_first_seen_order() {
    let mut vehicles = fleet();
    vehicles.push(vehicle("veh-5", "1111ZZZ", "Fiat", "Ducato"));

    assert_eq!(distinct_brands(&vehicles), vec!["Ford", "Fiat", "Iveco"]);
    assert_eq!(
        distinct_models(&vehicles),
        vec!["Transit", "Ducato", "Custom", "Daily"]
    );
}
