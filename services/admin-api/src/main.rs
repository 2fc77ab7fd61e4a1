use anyhow::Result;
use tracing::info;

mod models;
mod routes;
mod state;

use shared::{config::ServerConfig, logging};
use tokio::net::TcpListener;

use crate::state::AppState;

const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    logging::init()?;

    info!("Starting admin API");

    let config = ServerConfig::from_env("ADMIN", DEFAULT_PORT)?;
    let app_state = AppState::in_memory();

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = TcpListener::bind(config.address()).await?;
    info!("Admin API listening on {}", config.address());
    info!("Available endpoints:");
    info!("  GET  /              - Health check");
    info!("  GET  /dashboard     - Dashboard stats");
    info!("  GET  /users         - List users");
    info!("  POST /users         - Create user");
    info!("  GET  /users/:id     - Get user");
    info!("  POST /users/:id/ban - Ban user");
    info!("  GET  /settings      - Get settings");
    info!("  PUT  /settings      - Update settings");

    axum::serve(listener, app).await?;

    Ok(())
}
