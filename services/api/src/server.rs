use crate::cli::ServeArgs;
use crate::infra::{load_fleet_file, AppState, InMemoryVehicleStore};
use crate::routes::with_fleet_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fleet_compliance::config::AppConfig;
use fleet_compliance::error::AppError;
use fleet_compliance::fleet::FleetService;
use fleet_compliance::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = match config.fleet.seed_path.as_deref() {
        Some(path) => {
            let vehicles = load_fleet_file(path)?;
            info!(path = %path.display(), vehicles = vehicles.len(), "seeded vehicle store");
            InMemoryVehicleStore::with_vehicles(vehicles)
        }
        None => InMemoryVehicleStore::default(),
    };
    let fleet_service = Arc::new(FleetService::with_search_debounce(
        Arc::new(store),
        config.fleet.search_debounce,
    ));

    let app = with_fleet_routes(fleet_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "fleet compliance service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
