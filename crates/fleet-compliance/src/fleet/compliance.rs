use chrono::NaiveDate;
use serde::Serialize;

use super::catalog::DocumentCategory;
use super::domain::{Vehicle, VehicleId};
use super::status::{evaluate, ComplianceState};

#[derive(Debug, Clone, Serialize)]
pub struct DocumentComplianceEntry {
    pub name: &'static str,
    pub state: ComplianceState,
    pub state_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_reference: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCompliance {
    pub category: DocumentCategory,
    pub category_label: &'static str,
    pub entries: Vec<DocumentComplianceEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StateCounts {
    pub valid: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    pub missing: usize,
}

impl StateCounts {
    fn record(&mut self, state: ComplianceState) {
        match state {
            ComplianceState::Valid => self.valid += 1,
            ComplianceState::ExpiringSoon => self.expiring_soon += 1,
            ComplianceState::Expired => self.expired += 1,
            ComplianceState::Missing => self.missing += 1,
        }
    }
}

/// Catalog-wide compliance view of a single vehicle as of `evaluated_on`.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceSummary {
    pub vehicle_id: VehicleId,
    pub plate: String,
    pub evaluated_on: NaiveDate,
    pub categories: Vec<CategoryCompliance>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_mandatory: Vec<&'static str>,
}

impl ComplianceSummary {
    pub fn for_category(&self, category: DocumentCategory) -> Option<&CategoryCompliance> {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
    }

    pub fn state_of(&self, category: DocumentCategory, name: &str) -> Option<ComplianceState> {
        self.for_category(category)?
            .entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.state)
    }

    pub fn counts(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        self.categories
            .iter()
            .flat_map(|category| category.entries.iter())
            .for_each(|entry| counts.record(entry.state));
        counts
    }
}

pub fn compliance_summary(vehicle: &Vehicle, today: NaiveDate) -> ComplianceSummary {
    let categories = DocumentCategory::ordered()
        .into_iter()
        .map(|category| CategoryCompliance {
            category,
            category_label: category.label(),
            entries: vehicle
                .documents
                .catalog_entries(category)
                .into_iter()
                .map(|(name, document)| {
                    let state = evaluate(document, today);
                    DocumentComplianceEntry {
                        name,
                        state,
                        state_label: state.label(),
                        expiration_date: document.and_then(|doc| doc.expiration_date),
                        file_reference: document.map(|doc| doc.file_reference.clone()),
                    }
                })
                .collect(),
        })
        .collect();

    ComplianceSummary {
        vehicle_id: vehicle.id.clone(),
        plate: vehicle.plate.clone(),
        evaluated_on: today,
        categories,
        missing_mandatory: vehicle.documents.missing_mandatory(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleComplianceAlert {
    pub vehicle_id: VehicleId,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub expired: usize,
    pub expiring_soon: usize,
    pub missing: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_mandatory: Vec<&'static str>,
}

/// Fleet-wide rollup listing only the vehicles with expired, expiring, or missing paperwork.
#[derive(Debug, Clone, Serialize)]
pub struct FleetComplianceReport {
    pub evaluated_on: NaiveDate,
    pub vehicles_evaluated: usize,
    pub fully_compliant: usize,
    pub alerts: Vec<VehicleComplianceAlert>,
}

pub fn fleet_report(vehicles: &[Vehicle], today: NaiveDate) -> FleetComplianceReport {
    let mut alerts = Vec::new();

    for vehicle in vehicles {
        let summary = compliance_summary(vehicle, today);
        let counts = summary.counts();
        if counts.expired + counts.expiring_soon + counts.missing == 0 {
            continue;
        }

        alerts.push(VehicleComplianceAlert {
            vehicle_id: summary.vehicle_id,
            plate: summary.plate,
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            expired: counts.expired,
            expiring_soon: counts.expiring_soon,
            missing: counts.missing,
            missing_mandatory: summary.missing_mandatory,
        });
    }

    FleetComplianceReport {
        evaluated_on: today,
        vehicles_evaluated: vehicles.len(),
        fully_compliant: vehicles.len() - alerts.len(),
        alerts,
    }
}
