mod graphics; // floor plan rendering loop
mod session; // store, runtime and workflow calls for one event

use anyhow::Context;
use floorplan_core::{DEFAULT_CONFIG_PATH, load_config};
use graphics::window_conf; // Import window_conf directly
use session::FloorplanSession;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

/// Overrides the configuration file location.
const CONFIG_PATH_ENV: &str = "FLOORPLAN_CONFIG";

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Expo floor plan viewer started. Loading configuration and seeding the demo event...");

    match prepare() {
        Ok(session) => graphics::run_floorplan_loop(session).await,
        Err(e) => error!("Floor plan viewer failed to start: {:#}", e),
    }
}

fn prepare() -> anyhow::Result<FloorplanSession> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let settings = load_config(&path).with_context(|| format!("loading configuration from {}", path))?;
    FloorplanSession::seed(&settings)
}
