use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use super::catalog::DocumentCategory;
use super::compliance::{compliance_summary, fleet_report, ComplianceSummary, FleetComplianceReport};
use super::debounce::DEFAULT_SEARCH_DEBOUNCE;
use super::documents::{validate_mandatory_complete, MissingDocumentsError};
use super::domain::{DocumentUpload, Vehicle, VehicleId};
use super::filter::{distinct_brands, distinct_models, query, VehicleFilter};
use super::registry::VehicleRegistry;
use super::repository::{StorageError, VehicleStore};

/// Service composing the storage collaborator with the compliance and filter rules.
pub struct FleetService<S> {
    store: Arc<S>,
    search_debounce: Duration,
}

static VEHICLE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_vehicle_id() -> VehicleId {
    let id = VEHICLE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    VehicleId(format!("veh-{id:06}"))
}

/// Filtered vehicles together with the facet values derived from the full fleet.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleListing {
    pub vehicles: Vec<Vehicle>,
    pub brands: Vec<String>,
    pub models: Vec<String>,
}

impl<S> FleetService<S>
where
    S: VehicleStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_search_debounce(store, DEFAULT_SEARCH_DEBOUNCE)
    }

    pub fn with_search_debounce(store: Arc<S>, search_debounce: Duration) -> Self {
        Self {
            store,
            search_debounce,
        }
    }

    /// Load a registry for a new administrator view.
    pub fn registry(&self) -> Result<VehicleRegistry, FleetServiceError> {
        let mut registry = VehicleRegistry::new(self.search_debounce);
        registry.load(self.store.as_ref())?;
        Ok(registry)
    }

    pub fn filtered_view(&self, criteria: &VehicleFilter) -> Result<Vec<Vehicle>, FleetServiceError> {
        let vehicles = self.store.list_vehicles()?;
        Ok(query(&vehicles, criteria).into_iter().cloned().collect())
    }

    pub fn listing(&self, criteria: &VehicleFilter) -> Result<VehicleListing, FleetServiceError> {
        let vehicles = self.store.list_vehicles()?;
        let brands = distinct_brands(&vehicles)
            .into_iter()
            .map(str::to_string)
            .collect();
        let models = distinct_models(&vehicles)
            .into_iter()
            .map(str::to_string)
            .collect();
        let filtered = query(&vehicles, criteria).into_iter().cloned().collect();

        Ok(VehicleListing {
            vehicles: filtered,
            brands,
            models,
        })
    }

    pub fn get(&self, id: &VehicleId) -> Result<Vehicle, FleetServiceError> {
        self.store
            .fetch_vehicle(id)?
            .ok_or_else(|| FleetServiceError::VehicleNotFound(id.clone()))
    }

    pub fn compliance_summary(
        &self,
        id: &VehicleId,
        today: NaiveDate,
    ) -> Result<ComplianceSummary, FleetServiceError> {
        let vehicle = self.get(id)?;
        Ok(compliance_summary(&vehicle, today))
    }

    pub fn fleet_report(&self, today: NaiveDate) -> Result<FleetComplianceReport, FleetServiceError> {
        let vehicles = self.store.list_vehicles()?;
        Ok(fleet_report(&vehicles, today))
    }

    /// Persist a vehicle once every mandatory document is present. Nothing is written otherwise.
    pub fn try_save(&self, vehicle: Vehicle) -> Result<Vehicle, FleetServiceError> {
        self.save(vehicle).map(|outcome| outcome.vehicle)
    }

    /// Same as [`Self::try_save`], also reporting whether the store held no vehicle under the id.
    pub fn save(&self, mut vehicle: Vehicle) -> Result<SaveOutcome, FleetServiceError> {
        if let Err(missing) = validate_mandatory_complete(&vehicle) {
            warn!(
                vehicle_id = %vehicle.id,
                plate = %vehicle.plate,
                missing = ?missing.names,
                "vehicle save rejected"
            );
            return Err(missing.into());
        }

        let created = if vehicle.id.is_unassigned() {
            vehicle.id = next_vehicle_id();
            true
        } else {
            self.store.fetch_vehicle(&vehicle.id)?.is_none()
        };

        let saved = self.store.save_vehicle(vehicle)?;
        info!(vehicle_id = %saved.id, plate = %saved.plate, created, "vehicle saved");
        Ok(SaveOutcome {
            vehicle: saved,
            created,
        })
    }

    /// Attach a document to a stored vehicle and save it through [`Self::try_save`].
    pub fn upload_document(
        &self,
        id: &VehicleId,
        category: DocumentCategory,
        upload: DocumentUpload,
        today: NaiveDate,
    ) -> Result<Vehicle, FleetServiceError> {
        let mut vehicle = self.get(id)?;
        if !category.contains(&upload.name) {
            warn!(
                vehicle_id = %id,
                ?category,
                name = %upload.name,
                "storing document outside the catalog"
            );
        }
        vehicle.documents.upsert(category, upload, today);
        self.try_save(vehicle)
    }
}

/// Saved vehicle plus whether the save inserted it.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub vehicle: Vehicle,
    pub created: bool,
}

/// Error raised by the fleet service.
#[derive(Debug, thiserror::Error)]
pub enum FleetServiceError {
    #[error(transparent)]
    MissingDocuments(#[from] MissingDocumentsError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),
}
