use anyhow::Result;
use tracing::info;

mod models;
mod routes;
mod state;

use shared::{config::ServerConfig, logging};
use tokio::net::TcpListener;

use crate::state::AppState;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    logging::init()?;

    info!("Starting main app");

    let config = ServerConfig::from_env("APP", DEFAULT_PORT)?;

    // Start the web server
    let app = routes::create_router(AppState::new());

    let listener = TcpListener::bind(config.address()).await?;
    info!("Main app listening on {}", config.address());
    info!("Try: http://localhost:{}/todos", config.port);
    info!("Try: http://localhost:{}/hello/YourName", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
