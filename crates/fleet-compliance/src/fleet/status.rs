use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::VehicleDocument;

/// Documents expiring within this many days of today are flagged as expiring soon.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;

/// Lifecycle state of a catalog document for one vehicle. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceState {
    Valid,
    ExpiringSoon,
    Expired,
    Missing,
}

impl ComplianceState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valid => "Vigente",
            Self::ExpiringSoon => "Expira pronto",
            Self::Expired => "Caducado",
            Self::Missing => "Pendiente",
        }
    }
}

/// Classify a document against `today`.
///
/// Undated documents are treated as non-expiring and therefore valid.
pub fn evaluate(document: Option<&VehicleDocument>, today: NaiveDate) -> ComplianceState {
    let Some(document) = document else {
        return ComplianceState::Missing;
    };

    let Some(expires_on) = document.expiration_date else {
        return ComplianceState::Valid;
    };

    if expires_on < today {
        ComplianceState::Expired
    } else if (expires_on - today).num_days() < EXPIRING_SOON_WINDOW_DAYS {
        ComplianceState::ExpiringSoon
    } else {
        ComplianceState::Valid
    }
}
