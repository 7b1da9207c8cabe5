use fleet_compliance::error::AppError;
use fleet_compliance::fleet::{StorageError, Vehicle, VehicleId, VehicleStore};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local vehicle store. Newest vehicles are listed first.
#[derive(Default, Clone)]
pub(crate) struct InMemoryVehicleStore {
    vehicles: Arc<Mutex<Vec<Vehicle>>>,
}

impl InMemoryVehicleStore {
    pub(crate) fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: Arc::new(Mutex::new(vehicles)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Vehicle>>, StorageError> {
        self.vehicles
            .lock()
            .map_err(|_| StorageError::Unavailable("vehicle store lock poisoned".to_string()))
    }
}

impl VehicleStore for InMemoryVehicleStore {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, StorageError> {
        Ok(self.lock()?.clone())
    }

    fn fetch_vehicle(&self, id: &VehicleId) -> Result<Option<Vehicle>, StorageError> {
        Ok(self
            .lock()?
            .iter()
            .find(|vehicle| &vehicle.id == id)
            .cloned())
    }

    fn save_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, StorageError> {
        let mut guard = self.lock()?;
        match guard.iter_mut().find(|existing| existing.id == vehicle.id) {
            Some(existing) => *existing = vehicle.clone(),
            None => guard.insert(0, vehicle.clone()),
        }
        Ok(vehicle)
    }
}

/// Read a JSON array of vehicles, as exported by the fleet office.
pub(crate) fn load_fleet_file(path: &Path) -> Result<Vec<Vehicle>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let vehicles = serde_json::from_str(&raw)?;
    Ok(vehicles)
}
