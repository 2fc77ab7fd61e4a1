//! Response payloads specific to the admin API

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::contracts::{Settings, User};

/// Service status reported by the root endpoint
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Response for user listing
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

/// Response for the ban endpoint
#[derive(Debug, Serialize)]
pub struct BanResponse {
    pub banned: bool,
    pub user_id: String,
}

/// Response for a settings update
#[derive(Debug, Serialize)]
pub struct SettingsUpdatedResponse {
    pub updated: bool,
    pub settings: Settings,
}
