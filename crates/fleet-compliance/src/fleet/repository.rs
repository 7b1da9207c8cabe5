use super::domain::{Vehicle, VehicleId};

/// Vehicle storage collaborator. Implementations own persistence; the core only reads and saves.
pub trait VehicleStore: Send + Sync {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, StorageError>;
    fn fetch_vehicle(&self, id: &VehicleId) -> Result<Option<Vehicle>, StorageError>;
    /// Create or update by identity; last write wins.
    fn save_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, StorageError>;
}

/// Error enumeration for storage failures. Propagated unchanged, never retried here.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("vehicle storage unavailable: {0}")]
    Unavailable(String),
    #[error("vehicle storage rejected the write: {0}")]
    Rejected(String),
}
