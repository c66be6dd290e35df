//! API Router and Application State
//!
//! Central routing configuration and shared state.

mod content;
mod error;
mod roles;
mod users;

use std::sync::Arc;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::TraceLayer,
    ServiceBuilderExt,
};

use crate::{config::Config, directory::BuiltinRole, guard::require_role};

pub use error::{ApiError, AppJson, ErrorResponse};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Each gated route group carries its required role, fixed at
    // registration time. Merging keeps the gate scoped to its own routes.
    let admin_routes = Router::new()
        .route("/manage_users", get(users::manage_users))
        .layer(from_fn(require_role(
            state.clone(),
            BuiltinRole::Admin.as_str(),
        )));

    let editor_routes = Router::new()
        .route("/manage_content", post(content::manage_content))
        .layer(from_fn(require_role(
            state.clone(),
            BuiltinRole::Editor.as_str(),
        )));

    let viewer_routes = Router::new()
        .route("/view_content", get(content::view_content))
        .layer(from_fn(require_role(
            state.clone(),
            BuiltinRole::Viewer.as_str(),
        )));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Open directory operations (unauthenticated on purpose, see README)
        .route("/add_user", post(users::add_user))
        .route("/assign_role", post(users::assign_role))
        .route("/check_roles", get(roles::check_roles))
        // Gated routes
        .merge(admin_routes)
        .merge(editor_routes)
        .merge(viewer_routes)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .set_x_request_id(MakeRequestUuid)
                .layer(TraceLayer::new_for_http())
                .propagate_x_request_id(),
        )
        .layer(cors)
        // State
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
