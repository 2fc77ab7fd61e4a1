//! Admin API routes

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    ApiError, ApiResponse, ApiResult, Valid,
    contracts::{CreateUser, Dashboard, Settings, User},
    error::not_found,
    logging::log_request,
    store::Store,
    utils::current_timestamp,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    models::{BanResponse, SettingsUpdatedResponse, StatusResponse, UserListResponse},
    state::AppState,
};

/// Create the router for the admin API
pub fn create_router<U: Store<Uuid, User>>(state: AppState<U>) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/dashboard", get(dashboard))
        .route("/users", get(list_users::<U>).post(create_user::<U>))
        .route("/users/:id", get(get_user::<U>))
        .route("/users/:id/ban", post(ban_user))
        .route("/settings", get(get_settings::<U>).put(update_settings))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Health check endpoint
pub async fn status() -> ApiResponse<StatusResponse> {
    ApiResponse::ok(StatusResponse {
        status: "admin api running",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: current_timestamp(),
    })
}

/// Dashboard counters
pub async fn dashboard() -> ApiResponse<Dashboard> {
    ApiResponse::ok(Dashboard {
        users: 1234,
        posts: 5678,
        visits_today: 89,
        last_updated: current_timestamp(),
    })
}

/// List all users
pub async fn list_users<U: Store<Uuid, User>>(
    State(state): State<AppState<U>>,
) -> ApiResponse<UserListResponse> {
    let users = state.user_store.list().await;
    ApiResponse::ok(UserListResponse { users })
}

/// Create a user from a validated payload
pub async fn create_user<U: Store<Uuid, User>>(
    State(state): State<AppState<U>>,
    Valid(payload): Valid<CreateUser>,
) -> impl IntoResponse {
    let user = payload.into_user();
    info!("Creating user {} with role {}", user.id, user.role.as_str());
    state.user_store.put(user.id, user.clone()).await;

    (StatusCode::CREATED, ApiResponse::ok(user))
}

/// Get a user by ID
pub async fn get_user<U: Store<Uuid, User>>(
    State(state): State<AppState<U>>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<User>> {
    let missing = || ApiError::NotFound(format!("user {id}"));
    let key = Uuid::parse_str(&id).map_err(|_| missing())?;

    let user = state.user_store.get(&key).await.ok_or_else(missing)?;
    Ok(ApiResponse::ok(user))
}

/// Ban a user
///
/// Acknowledges the request without touching any stored record.
pub async fn ban_user(Path(id): Path<String>) -> ApiResponse<BanResponse> {
    info!("Ban requested for user: {}", id);
    ApiResponse::ok(BanResponse {
        banned: true,
        user_id: id,
    })
}

/// Current settings
pub async fn get_settings<U: Store<Uuid, User>>(
    State(state): State<AppState<U>>,
) -> ApiResponse<Settings> {
    ApiResponse::ok(state.settings)
}

/// Accept a validated settings payload and echo it back
pub async fn update_settings(Valid(settings): Valid<Settings>) -> ApiResponse<SettingsUpdatedResponse> {
    info!(
        maintenance_mode = settings.maintenance_mode,
        "Settings update received"
    );
    ApiResponse::ok(SettingsUpdatedResponse {
        updated: true,
        settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, header},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use shared::contracts::Role;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::in_memory())
    }

    async fn call(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status() {
        let (status, body) = call(app(), "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "admin api running");
        assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_dashboard() {
        let (status, body) = call(app(), "GET", "/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["users"], 1234);
        assert_eq!(body["data"]["posts"], 5678);
        assert_eq!(body["data"]["visits_today"], 89);
    }

    #[tokio::test]
    async fn test_users_start_empty() {
        let (status, body) = call(app(), "GET", "/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({ "users": [] }));
    }

    #[tokio::test]
    async fn test_create_then_fetch_user() {
        let app = app();
        let (status, body) = call(
            app.clone(),
            "POST",
            "/users",
            Some(json!({ "name": "Eve", "email": "eve@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["role"], Role::User.as_str());
        let id = body["data"]["id"].as_str().unwrap().to_owned();

        let (status, body) = call(app.clone(), "GET", &format!("/users/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], "eve@example.com");

        let (_, body) = call(app, "GET", "/users", None).await;
        assert_eq!(body["data"]["users"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_user_reports_every_issue() {
        let (status, body) = call(
            app(),
            "POST",
            "/users",
            Some(json!({ "name": "", "email": "nope", "role": "root" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert!(body.get("data").is_none());
        let fields: Vec<&str> = body["issues"]
            .as_array()
            .unwrap()
            .iter()
            .map(|issue| issue["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["name", "email", "role"]);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let (status, body) = call(app(), "GET", &format!("/users/{}", Uuid::new_v4()), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);

        let (status, _) = call(app(), "GET", "/users/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ban_echoes_user_id() {
        let (status, body) = call(app(), "POST", "/users/42/ban", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({ "banned": true, "user_id": "42" }));
    }

    #[tokio::test]
    async fn test_get_settings() {
        let (status, body) = call(app(), "GET", "/settings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["maintenance_mode"], false);
        assert_eq!(body["data"]["max_upload_size"], "100MB");
    }

    #[tokio::test]
    async fn test_update_settings_echoes_validated_body() {
        let (status, body) = call(
            app(),
            "PUT",
            "/settings",
            Some(json!({
                "maintenance_mode": true,
                "max_upload_size": "1GB",
                "api_rate_limit": 50,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["updated"], true);
        assert_eq!(body["data"]["settings"]["max_upload_size"], "1GB");
    }

    #[tokio::test]
    async fn test_update_settings_rejects_bad_rate_limit() {
        let (status, body) = call(
            app(),
            "PUT",
            "/settings",
            Some(json!({
                "maintenance_mode": true,
                "max_upload_size": "1GB",
                "api_rate_limit": 0,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["issues"][0]["field"], "api_rate_limit");
    }

    #[tokio::test]
    async fn test_unmatched_route() {
        let (status, body) = call(app(), "GET", "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }
}
