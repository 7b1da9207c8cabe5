use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use fleet_compliance::fleet::{fleet_router, form_groups, DocumentFormGroup, FleetService, VehicleStore};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_fleet_routes<S>(service: Arc<FleetService<S>>) -> axum::Router
where
    S: VehicleStore + 'static,
{
    fleet_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/documents/catalog",
            axum::routing::get(catalog_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Document groups in edit-form order, with the mandatory subset marked.
pub(crate) async fn catalog_endpoint() -> Json<Vec<DocumentFormGroup>> {
    Json(form_groups().to_vec())
}
