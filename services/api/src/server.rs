use crate::cli::ServeArgs;
use crate::infra::{
    game_config, AppState, InMemoryInventoryRepository, InMemoryTitanRepository, StaticItemCatalog,
    StubDuelSchedule, StubWellnessProvider,
};
use crate::routes::with_game_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ironforge::config::AppConfig;
use ironforge::error::AppError;
use ironforge::game::workouts::{OracleService, WorkoutService};
use ironforge::telemetry;
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

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let titans = Arc::new(InMemoryTitanRepository::default());
    let inventory = Arc::new(InMemoryInventoryRepository::default());
    let catalog = Arc::new(StaticItemCatalog::default());
    let wellness = Arc::new(StubWellnessProvider::default());
    let duels = Arc::new(StubDuelSchedule::default());

    let game = game_config(&config.tuning);
    let oracle_config = game.oracle.clone();
    let workout_service = Arc::new(WorkoutService::new(titans, inventory, catalog, game));
    let oracle_service = Arc::new(OracleService::new(wellness, duels, oracle_config));

    let app = with_game_routes(workout_service, oracle_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ironforge api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
