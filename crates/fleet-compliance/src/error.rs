use crate::config::ConfigError;
use crate::fleet::FleetServiceError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    FleetData(serde_json::Error),
    InvalidQuery(String),
    Fleet(FleetServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::FleetData(err) => write!(f, "invalid fleet data: {}", err),
            AppError::InvalidQuery(message) => write!(f, "invalid query: {}", message),
            AppError::Fleet(err) => write!(f, "fleet error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::FleetData(err) => Some(err),
            AppError::InvalidQuery(_) => None,
            AppError::Fleet(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, payload) = match self {
            AppError::Fleet(FleetServiceError::MissingDocuments(missing)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": message,
                    "missing_documents": missing.names,
                }),
            ),
            AppError::Fleet(FleetServiceError::VehicleNotFound(id)) => (
                StatusCode::NOT_FOUND,
                json!({
                    "vehicle_id": id.0,
                    "message": "Vehículo no encontrado",
                }),
            ),
            AppError::FleetData(_) | AppError::InvalidQuery(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message }),
            ),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Fleet(FleetServiceError::Storage(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message }),
            ),
        };

        (status, Json(payload)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::FleetData(value)
    }
}

impl From<FleetServiceError> for AppError {
    fn from(value: FleetServiceError) -> Self {
        Self::Fleet(value)
    }
}
