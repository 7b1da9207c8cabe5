use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::catalog::DocumentCategory;
use super::compliance::{ComplianceSummary, FleetComplianceReport};
use super::domain::{deserialize_optional_date, DocumentUpload, Vehicle, VehicleId, VehicleStatus};
use super::filter::VehicleFilter;
use super::repository::VehicleStore;
use super::service::{FleetService, VehicleListing};
use crate::error::AppError;

/// Router builder exposing vehicle listing, compliance, and save endpoints.
pub fn fleet_router<S>(service: Arc<FleetService<S>>) -> Router
where
    S: VehicleStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/vehicles",
            get(list_handler::<S>).post(save_handler::<S>),
        )
        .route("/api/v1/vehicles/:vehicle_id", get(vehicle_handler::<S>))
        .route(
            "/api/v1/vehicles/:vehicle_id/compliance",
            get(compliance_handler::<S>),
        )
        .route(
            "/api/v1/vehicles/:vehicle_id/documents/:category",
            put(upload_handler::<S>),
        )
        .route("/api/v1/fleet/compliance", get(fleet_report_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListParams {
    #[serde(default)]
    pub(crate) search: Option<String>,
    #[serde(default)]
    pub(crate) status: Option<String>,
    #[serde(default)]
    pub(crate) brand: Option<String>,
    #[serde(default)]
    pub(crate) model: Option<String>,
}

impl ListParams {
    fn into_filter(self) -> Result<VehicleFilter, String> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                VehicleStatus::from_label(raw).ok_or_else(|| format!("unknown status '{raw}'"))?,
            ),
        };

        Ok(VehicleFilter {
            search_text: self.search.unwrap_or_default(),
            status,
            brand: self.brand,
            model: self.model,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EvaluationParams {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

impl EvaluationParams {
    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

pub(crate) async fn list_handler<S>(
    State(service): State<Arc<FleetService<S>>>,
    Query(params): Query<ListParams>,
) -> Result<Json<VehicleListing>, AppError>
where
    S: VehicleStore + 'static,
{
    let criteria = params.into_filter().map_err(AppError::InvalidQuery)?;
    Ok(Json(service.listing(&criteria)?))
}

pub(crate) async fn vehicle_handler<S>(
    State(service): State<Arc<FleetService<S>>>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<Vehicle>, AppError>
where
    S: VehicleStore + 'static,
{
    Ok(Json(service.get(&VehicleId(vehicle_id))?))
}

pub(crate) async fn compliance_handler<S>(
    State(service): State<Arc<FleetService<S>>>,
    Path(vehicle_id): Path<String>,
    Query(params): Query<EvaluationParams>,
) -> Result<Json<ComplianceSummary>, AppError>
where
    S: VehicleStore + 'static,
{
    let summary = service.compliance_summary(&VehicleId(vehicle_id), params.today())?;
    Ok(Json(summary))
}

pub(crate) async fn fleet_report_handler<S>(
    State(service): State<Arc<FleetService<S>>>,
    Query(params): Query<EvaluationParams>,
) -> Result<Json<FleetComplianceReport>, AppError>
where
    S: VehicleStore + 'static,
{
    Ok(Json(service.fleet_report(params.today())?))
}

/// 201 when the save inserted the vehicle, 200 when it replaced a stored one.
pub(crate) async fn save_handler<S>(
    State(service): State<Arc<FleetService<S>>>,
    Json(vehicle): Json<Vehicle>,
) -> Result<(StatusCode, Json<Vehicle>), AppError>
where
    S: VehicleStore + 'static,
{
    let outcome = service.save(vehicle)?;
    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.vehicle)))
}

pub(crate) async fn upload_handler<S>(
    State(service): State<Arc<FleetService<S>>>,
    Path((vehicle_id, category)): Path<(String, DocumentCategory)>,
    Json(upload): Json<DocumentUpload>,
) -> Result<Json<Vehicle>, AppError>
where
    S: VehicleStore + 'static,
{
    let today = Local::now().date_naive();
    let vehicle = service.upload_document(&VehicleId(vehicle_id), category, upload, today)?;
    Ok(Json(vehicle))
}
