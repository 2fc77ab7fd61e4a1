//! Logging setup and request logging middleware

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, subscriber::SetGlobalDefaultError};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global fmt subscriber
///
/// Filtering follows `RUST_LOG` and falls back to `info`.
pub fn init() -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)
}

/// Log method, path, status and latency of every request
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );

    response
}
