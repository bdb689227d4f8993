use wx_server::{
    AppState, InsightsClient, WeatherClient, build_router, error::Result as ServerErrorResult,
    logger,
};

use wx_db::SqlitePreferenceStore;

use std::process::ExitCode;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may not be up yet
            eprintln!("wx-server failed: {}", e);
            error!("wx-server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ServerErrorResult<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = wx_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting wx-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    if config.weather.api_key.is_empty() {
        warn!("weather.api_key is not set; the provider will reject every lookup");
    }

    // Open database and run migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = wx_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database ready, migrations applied");

    // Upstream clients
    let weather = WeatherClient::new(&config.weather)?;
    let insights = match config.insights.enabled {
        true => Some(InsightsClient::new(&config.insights)?),
        false => {
            info!("Insights disabled");
            None
        }
    };

    let state = AppState::new(
        Arc::new(SqlitePreferenceStore::new(pool.clone())),
        weather,
        insights,
        config.validation.clone(),
    );

    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
