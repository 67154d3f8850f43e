use metro_planner::config::AppConfig;
use metro_planner::network::NetworkModel;
use metro_planner::planner::RoutePlanner;
use metro_planner::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Load the network (fail fast if the dataset is unusable)
    let network = NetworkModel::load(&config.dataset).expect("Failed to load network dataset");
    let penalty = RoutePlanner::new(&network, &config.planner).transfer_penalty();
    info!(
        dataset = %config.dataset.display(),
        stations = network.station_count(),
        lines = network.line_count(),
        transfer_penalty = penalty,
        "Loaded network"
    );

    let state = AppState::new(network, config.planner);
    let app = create_router(state);

    info!(addr = %config.addr, "Metro route planner listening");
    info!("  GET  /health          - Health check");
    info!("  GET  /lines           - All lines and their stations");
    info!("  GET  /stations/:name  - Lines and neighbours of a station");
    info!("  POST /route/plan      - Plan a route");
    info!("  POST /route/alternatives - Ranked distinct routes");

    let listener = tokio::net::TcpListener::bind(config.addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
