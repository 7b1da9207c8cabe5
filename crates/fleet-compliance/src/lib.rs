//! Vehicle fleet document compliance: catalog, status evaluation, per-vehicle document
//! collections, and the filtered fleet listing, plus the configuration, error, and
//! telemetry plumbing shared with the API service.

pub mod config;
pub mod error;
pub mod fleet;
pub mod telemetry;
