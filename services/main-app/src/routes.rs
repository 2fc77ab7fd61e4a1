//! Main app routes

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    ApiError, ApiResponse, ApiResult, Valid,
    contracts::{CreatePost, Post},
    error::not_found,
    logging::log_request,
    store::Store,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    models::{
        CreateTodo, MessageResponse, PostListResponse, Todo, TodoCreatedResponse,
        TodoListResponse, WelcomeResponse,
    },
    state::AppState,
};

/// Create the router for the main app
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/hello/:name", get(hello))
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/:id", get(get_post))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Welcome message listing the endpoints
pub async fn welcome() -> ApiResponse<WelcomeResponse> {
    let endpoints = [
        ("GET /", "This message"),
        ("GET /todos", "Get all todos"),
        ("POST /todos", "Create new todo"),
        ("GET /hello/:name", "Greet someone"),
        ("GET /posts", "Get all posts"),
        ("POST /posts", "Create new post"),
        ("GET /posts/:id", "Get a post"),
    ];

    ApiResponse::ok(WelcomeResponse {
        message: "Welcome to the main app API!",
        endpoints: endpoints.into_iter().collect(),
    })
}

/// Get all todos
pub async fn list_todos(State(state): State<AppState>) -> ApiResponse<TodoListResponse> {
    let todos = state.todo_store.list().await;
    ApiResponse::ok(TodoListResponse { todos })
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<AppState>,
    Valid(payload): Valid<CreateTodo>,
) -> ApiResponse<TodoCreatedResponse> {
    let todo = Todo {
        id: state.next_todo_id(),
        task: payload.task,
        done: false,
    };
    info!("Created todo {}", todo.id);
    state.todo_store.put(todo.id, todo.clone()).await;

    ApiResponse::ok(TodoCreatedResponse {
        created: true,
        todo,
    })
}

/// Greet someone by name
pub async fn hello(Path(name): Path<String>) -> ApiResponse<MessageResponse> {
    ApiResponse::ok(MessageResponse {
        message: format!("Hello, {name}!"),
    })
}

/// Get all posts
pub async fn list_posts(State(state): State<AppState>) -> ApiResponse<PostListResponse> {
    let posts = state.post_store.list().await;
    ApiResponse::ok(PostListResponse { posts })
}

/// Create a draft post from a validated payload
pub async fn create_post(
    State(state): State<AppState>,
    Valid(payload): Valid<CreatePost>,
) -> impl IntoResponse {
    let post = payload.into_post();
    info!("Created post {} by author {}", post.id, post.author_id);
    state.post_store.put(post.id, post.clone()).await;

    (StatusCode::CREATED, ApiResponse::ok(post))
}

/// Get a post by ID
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<Post>> {
    let missing = || ApiError::NotFound(format!("post {id}"));
    let key = Uuid::parse_str(&id).map_err(|_| missing())?;

    let post = state.post_store.get(&key).await.ok_or_else(missing)?;
    Ok(ApiResponse::ok(post))
}
