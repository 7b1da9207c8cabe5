use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::domain::{Vehicle, VehicleStatus};

/// Listing criteria. Every field defaults to unconstrained; empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleFilter {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub status: Option<VehicleStatus>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl VehicleFilter {
    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    pub fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search_text.is_empty()
            && self.status.is_none()
            && facet(&self.brand).is_none()
            && facet(&self.model).is_none()
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        Matcher::new(self).matches(vehicle)
    }
}

fn facet(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Criteria prepared once per query so the search needle is lowercased a single time.
struct Matcher<'a> {
    needle: Option<String>,
    status: Option<VehicleStatus>,
    brand: Option<&'a str>,
    model: Option<&'a str>,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a VehicleFilter) -> Self {
        let needle = if criteria.search_text.is_empty() {
            None
        } else {
            Some(criteria.search_text.to_lowercase())
        };

        Self {
            needle,
            status: criteria.status,
            brand: facet(&criteria.brand),
            model: facet(&criteria.model),
        }
    }

    fn matches(&self, vehicle: &Vehicle) -> bool {
        self.matches_search(vehicle)
            && self.status.map_or(true, |status| vehicle.status == status)
            && self.brand.map_or(true, |brand| vehicle.brand == brand)
            && self.model.map_or(true, |model| vehicle.model == model)
    }

    fn matches_search(&self, vehicle: &Vehicle) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };

        [&vehicle.plate, &vehicle.brand, &vehicle.model]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Stable filter over `vehicles`; the result keeps input order.
pub fn query<'v>(vehicles: &'v [Vehicle], criteria: &VehicleFilter) -> Vec<&'v Vehicle> {
    let matcher = Matcher::new(criteria);
    vehicles
        .iter()
        .filter(|vehicle| matcher.matches(vehicle))
        .collect()
}

pub(crate) fn query_indices(vehicles: &[Vehicle], criteria: &VehicleFilter) -> Vec<usize> {
    let matcher = Matcher::new(criteria);
    vehicles
        .iter()
        .enumerate()
        .filter(|(_, vehicle)| matcher.matches(vehicle))
        .map(|(index, _)| index)
        .collect()
}

pub fn distinct_brands(vehicles: &[Vehicle]) -> Vec<&str> {
    distinct_by(vehicles, |vehicle| vehicle.brand.as_str())
}

pub fn distinct_models(vehicles: &[Vehicle]) -> Vec<&str> {
    distinct_by(vehicles, |vehicle| vehicle.model.as_str())
}

fn distinct_by<'v, F>(vehicles: &'v [Vehicle], field: F) -> Vec<&'v str>
where
    F: Fn(&'v Vehicle) -> &'v str,
{
    let mut seen = HashSet::new();
    vehicles
        .iter()
        .map(field)
        .filter(|value| seen.insert(*value))
        .collect()
}
