use std::process;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use round_trip_server::config::ServerConfig;
use round_trip_server::loader::{DataSources, TimetableLoader, TimetableLoaderConfig};
use round_trip_server::planner::SearchConfig;
use round_trip_server::web::{AppState, create_router};

const DEFAULT_LOG_LEVEL: &str = "info";

fn init_logger() {
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let env_filter = EnvFilter::try_new(&rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {} {:?}, falling back to '{}': {}",
            EnvFilter::DEFAULT_ENV,
            rust_log,
            DEFAULT_LOG_LEVEL,
            err
        );
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() {
    init_logger();

    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        error!("Invalid configuration: {}", e);
        process::exit(1);
    });

    // Load every timetable up front (fail fast if any is unavailable)
    let loader = TimetableLoader::new(TimetableLoaderConfig::default()).unwrap_or_else(|e| {
        error!("Failed to create HTTP client: {}", e);
        process::exit(1);
    });
    let sources = DataSources::default_in(&config.data_dir);
    info!(
        data_dir = %config.data_dir.display(),
        documents = sources.document_count(),
        "loading timetables"
    );
    let timetables = loader.load_all(&sources).await.unwrap_or_else(|e| {
        error!("Failed to load timetables: {}", e);
        process::exit(1);
    });

    let state = AppState::new(timetables, SearchConfig::default());
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind {}: {}", config.listen_addr, e);
            process::exit(1);
        });

    info!("Round-trip planner listening on http://{}", config.listen_addr);
    info!("API endpoints:");
    info!("  GET  /health                 - Health check");
    info!("  GET  /api/lines              - Lines");
    info!("  GET  /api/lines/:line/stations - Stations of a line");
    info!("  GET  /api/time-options       - Time picker choices");
    info!("  GET  /api/round-trips/fixed  - Round trips to a chosen station");
    info!("  GET  /api/round-trips/open   - Round trips to anywhere");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        process::exit(1);
    }
}
