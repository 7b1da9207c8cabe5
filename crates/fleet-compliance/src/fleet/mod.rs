//! Vehicle document compliance and fleet listing.
//!
//! The catalog fixes which documents each category expects, the status evaluator classifies
//! stored documents against an explicit "today", and the registry/filter engine narrows a
//! loaded fleet for an administrator view. Storage is reached only through [`VehicleStore`].

pub mod catalog;
pub mod compliance;
pub mod debounce;
pub mod documents;
pub mod domain;
pub mod filter;
pub mod registry;
pub mod repository;
pub mod router;
pub mod service;
pub mod status;

#[cfg(test)]
mod tests;

pub use catalog::{
    categories_and_names, form_groups, mandatory_names, DocumentCategory, DocumentFormGroup,
};
pub use compliance::{
    compliance_summary, fleet_report, CategoryCompliance, ComplianceSummary,
    DocumentComplianceEntry, FleetComplianceReport, StateCounts, VehicleComplianceAlert,
};
pub use debounce::{SearchDebouncer, DEFAULT_SEARCH_DEBOUNCE};
pub use documents::{validate_mandatory_complete, CategoryDocuments, DocumentSet, MissingDocumentsError};
pub use domain::{
    DocumentUpload, Vehicle, VehicleDocument, VehicleId, VehicleStatus, VehicleVisibility,
};
pub use filter::{distinct_brands, distinct_models, query, VehicleFilter};
pub use registry::VehicleRegistry;
pub use repository::{StorageError, VehicleStore};
pub use router::fleet_router;
pub use service::{FleetService, FleetServiceError, SaveOutcome, VehicleListing};
pub use status::{evaluate, ComplianceState, EXPIRING_SOON_WINDOW_DAYS};
