use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::fleet::catalog::{DocumentCategory, MANDATORY_DOCUMENTS};
use crate::fleet::domain::{
    DocumentUpload, Vehicle, VehicleId, VehicleStatus, VehicleVisibility,
};
use crate::fleet::documents::DocumentSet;
use crate::fleet::repository::{StorageError, VehicleStore};
use crate::fleet::{fleet_router, FleetService};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub(super) fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

pub(super) fn upload(name: &str, expires_in_days: Option<i64>) -> DocumentUpload {
    let upload = DocumentUpload::new(name, format!("{}.pdf", name.to_lowercase()));
    match expires_in_days {
        Some(days) => upload.expiring_on(days_from_today(days)),
        None => upload,
    }
}

pub(super) fn mandatory_documents() -> DocumentSet {
    let mut documents = DocumentSet::default();
    for name in MANDATORY_DOCUMENTS {
        documents.upsert(DocumentCategory::Basic, upload(name, Some(365)), today());
    }
    documents
}

pub(super) fn vehicle(id: &str, plate: &str, brand: &str, model: &str) -> Vehicle {
    Vehicle {
        id: VehicleId(id.to_string()),
        plate: plate.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        year: 2021,
        status: VehicleStatus::Available,
        visibility: VehicleVisibility::Visible,
        next_inspection: Some(days_from_today(120)),
        next_service_km: Some(45_000),
        insurance_expiry: Some(days_from_today(200)),
        documents: mandatory_documents(),
    }
}

pub(super) fn fleet() -> Vec<Vehicle> {
    let mut transit = vehicle("veh-1", "1234ABC", "Ford", "Transit");
    transit.status = VehicleStatus::Unavailable;
    vec![
        transit,
        vehicle("veh-2", "5678XYZ", "Fiat", "Ducato"),
        vehicle("veh-3", "9012DEF", "Ford", "Custom"),
        vehicle("veh-4", "3456GHI", "Iveco", "Daily"),
    ]
}

/// Vehicle holding only the circulation permit and the technical sheet.
pub(super) fn incomplete_vehicle() -> Vehicle {
    let mut vehicle = vehicle("", "7777KLM", "Renault", "Master");
    vehicle.documents = DocumentSet::default();
    vehicle.documents.upsert(
        DocumentCategory::Basic,
        upload("Permiso de Circulación", None),
        today(),
    );
    vehicle.documents.upsert(
        DocumentCategory::Basic,
        upload("Ficha Técnica", None),
        today(),
    );
    vehicle
}

#[derive(Default)]
pub(super) struct MemoryStore {
    vehicles: Mutex<Vec<Vehicle>>,
}

impl MemoryStore {
    pub(super) fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: Mutex::new(vehicles),
        }
    }

    pub(super) fn snapshot(&self) -> Vec<Vehicle> {
        self.vehicles.lock().expect("store mutex poisoned").clone()
    }
}

impl VehicleStore for MemoryStore {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, StorageError> {
        Ok(self.snapshot())
    }

    fn fetch_vehicle(&self, id: &VehicleId) -> Result<Option<Vehicle>, StorageError> {
        Ok(self
            .snapshot()
            .into_iter()
            .find(|vehicle| &vehicle.id == id))
    }

    fn save_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, StorageError> {
        let mut guard = self.vehicles.lock().expect("store mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == vehicle.id) {
            Some(existing) => *existing = vehicle.clone(),
            None => guard.insert(0, vehicle.clone()),
        }
        Ok(vehicle)
    }
}

pub(super) struct UnavailableStore;

impl VehicleStore for UnavailableStore {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, StorageError> {
        Err(StorageError::Unavailable("database offline".to_string()))
    }

    fn fetch_vehicle(&self, _id: &VehicleId) -> Result<Option<Vehicle>, StorageError> {
        Err(StorageError::Unavailable("database offline".to_string()))
    }

    fn save_vehicle(&self, _vehicle: Vehicle) -> Result<Vehicle, StorageError> {
        Err(StorageError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (FleetService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_vehicles(fleet()));
    (FleetService::new(store.clone()), store)
}

pub(super) fn fleet_router_with_service(service: FleetService<MemoryStore>) -> axum::Router {
    fleet_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
