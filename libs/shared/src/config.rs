//! Service configuration
//!
//! Each service reads its listening address from environment variables
//! under its own prefix, e.g. `ADMIN_PORT` or `APP_HOST`.

use config::{Config, Environment};
use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;

/// Default bind host for every service
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Listening address of an HTTP service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `{PREFIX}_HOST`: bind host (default: "0.0.0.0")
    /// - `{PREFIX}_PORT`: bind port (default: `default_port`)
    pub fn from_env(prefix: &str, default_port: u16) -> Result<Self, ConfigError> {
        Self::from_source(Environment::with_prefix(prefix), default_port)
    }

    /// Build from an explicit environment source
    pub fn from_source(source: Environment, default_port: u16) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(default_port))?
            .add_source(source.try_parsing(true))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        info!("Loaded server configuration: {}", config.address());
        Ok(config)
    }

    /// `host:port` string suitable for binding a listener
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
