//! Attendance Engine HTTP service.
//!
//! Reads the configuration named by `ATTENDANCE_CONFIG` (default
//! `./config/attendance.yaml`) and serves the workbook parsing API.

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use attendance_engine::error::{EngineError, EngineResult};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_ENV: &str = "ATTENDANCE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/attendance.yaml";

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config() -> EngineResult<ConfigLoader> {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    match ConfigLoader::load(&path) {
        Ok(config) => {
            info!(path = %path, "Loaded configuration");
            Ok(config)
        }
        Err(EngineError::ConfigNotFound { path }) => {
            warn!(path = %path, "Configuration file not found, using defaults");
            Ok(ConfigLoader::default())
        }
        Err(err) => Err(err),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = load_config()?;
    let addr = config.server().bind_address();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
