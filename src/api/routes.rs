//! API Routes
//!
//! Configures the Axum router with every endpoint and the static landing page.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::diagnostics::{delay, echo, validate};
use super::posts::{create_post, get_post, list_posts};
use super::state::AppState;
use super::users::{create_user, delete_user, get_user, list_users, update_user};

/// Method, path and summary of every API endpoint, logged at startup.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/api/users", "list users"),
    ("GET", "/api/users/:id", "get one user"),
    ("POST", "/api/users", "create a user"),
    ("PUT", "/api/users/:id", "update a user"),
    ("DELETE", "/api/users/:id", "delete a user"),
    ("GET", "/api/posts", "list posts"),
    ("GET", "/api/posts/:id", "get one post"),
    ("POST", "/api/posts", "create a post"),
    ("POST", "/api/test/echo", "echo the request body"),
    ("GET", "/api/test/delay", "respond after ?ms= milliseconds"),
    ("POST", "/api/test/validate", "validate username and password"),
];

/// Creates the main router with all endpoints configured.
///
/// Paths outside `/api` are served from `state.static_dir`, so `/`
/// returns its `index.html`.
///
/// # Middleware
/// - CORS: Allows any origin, method and header
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.static_dir);

    let api = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/:id", get(get_post))
        .route("/test/echo", post(echo))
        .route("/test/delay", get(delay))
        .route("/test/validate", post(validate));

    Router::new()
        .nest("/api", api)
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
