use std::time::{Duration, Instant};

use tracing::debug;

use super::debounce::SearchDebouncer;
use super::domain::{Vehicle, VehicleId, VehicleStatus};
use super::filter::{distinct_brands, distinct_models, query_indices, VehicleFilter};
use super::repository::{StorageError, VehicleStore};

/// Vehicles loaded for one administrator view, plus the active filter criteria.
///
/// The filtered view is memoized and recomputed only when the vehicles or the
/// effective criteria change. Search text goes through a [`SearchDebouncer`], so
/// keystrokes only re-filter once the input settles.
#[derive(Debug, Clone, Default)]
pub struct VehicleRegistry {
    vehicles: Vec<Vehicle>,
    criteria: VehicleFilter,
    search: SearchDebouncer,
    visible: Vec<usize>,
}

impl VehicleRegistry {
    pub fn new(search_debounce: Duration) -> Self {
        Self::from_vehicles(Vec::new(), search_debounce)
    }

    pub fn from_vehicles(vehicles: Vec<Vehicle>, search_debounce: Duration) -> Self {
        let mut registry = Self {
            vehicles,
            criteria: VehicleFilter::default(),
            search: SearchDebouncer::new(search_debounce),
            visible: Vec::new(),
        };
        registry.refilter();
        registry
    }

    /// Replace the loaded vehicles with the store's current listing.
    pub fn load<S>(&mut self, store: &S) -> Result<usize, StorageError>
    where
        S: VehicleStore + ?Sized,
    {
        self.vehicles = store.list_vehicles()?;
        self.refilter();
        debug!(vehicles = self.vehicles.len(), "vehicle registry loaded");
        Ok(self.vehicles.len())
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| &vehicle.id == id)
    }

    /// Effective criteria, with the settled search text.
    pub fn criteria(&self) -> &VehicleFilter {
        &self.criteria
    }

    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    pub fn edit_search_text(&mut self, text: impl Into<String>, now: Instant) {
        self.search.edit(text, now);
    }

    /// Drive the search debouncer. Returns `true` when the view was re-filtered.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(text) = self.search.poll(now) else {
            return false;
        };
        self.criteria.search_text = text.to_string();
        self.refilter();
        true
    }

    pub fn set_status_filter(&mut self, status: Option<VehicleStatus>) {
        self.criteria.status = status;
        self.refilter();
    }

    pub fn set_brand_filter(&mut self, brand: Option<String>) {
        self.criteria.brand = brand;
        self.refilter();
    }

    pub fn set_model_filter(&mut self, model: Option<String>) {
        self.criteria.model = model;
        self.refilter();
    }

    pub fn filtered_view(&self) -> Vec<&Vehicle> {
        self.visible
            .iter()
            .filter_map(|index| self.vehicles.get(*index))
            .collect()
    }

    pub fn brands(&self) -> Vec<&str> {
        distinct_brands(&self.vehicles)
    }

    pub fn models(&self) -> Vec<&str> {
        distinct_models(&self.vehicles)
    }

    /// Apply a saved vehicle: replaced in place by id, otherwise listed first as the newest.
    pub fn apply_saved(&mut self, vehicle: Vehicle) {
        match self
            .vehicles
            .iter_mut()
            .find(|existing| existing.id == vehicle.id)
        {
            Some(existing) => *existing = vehicle,
            None => self.vehicles.insert(0, vehicle),
        }
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = query_indices(&self.vehicles, &self.criteria);
    }
}
