//! Common Test Helpers
//!
//! Shared utilities for HTTP integration tests: an in-process `TestApp`
//! wrapping the full router, request builders, and directory shortcuts.
//!
//! Each test gets its own migrated database from `#[sqlx::test]`, so there
//! is no shared state to clean up between tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{self, Method, Request, Response};
use axum::Router;
use doorman_server::api::{create_router, AppState};
use doorman_server::config::Config;
use doorman_server::directory;
use doorman_server::guard::IDENTITY_HEADER;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

/// A test application with its router and database pool.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Build a test app over a per-test database, with the default roles seeded.
    pub async fn new(pool: SqlitePool) -> Self {
        let config = Config::default_for_test();
        directory::seed_roles(&pool, &config.seed_roles)
            .await
            .expect("Failed to seed roles");

        let state = AppState::new(pool.clone(), config);
        let router = create_router(state);

        Self { router, pool }
    }

    /// Create a request builder with common setup.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Send a request through the router and return the response.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed")
    }

    /// GET `uri`, presenting `identity` in the username header if given.
    pub async fn get_as(&self, identity: Option<&str>, uri: &str) -> Response<Body> {
        let mut builder = Self::request(Method::GET, uri);
        if let Some(username) = identity {
            builder = builder.header(IDENTITY_HEADER, username);
        }
        let request = builder.body(Body::empty()).expect("Failed to build request");
        self.oneshot(request).await
    }

    /// POST `uri` with an empty body, presenting `identity` if given.
    pub async fn post_as(&self, identity: Option<&str>, uri: &str) -> Response<Body> {
        let mut builder = Self::request(Method::POST, uri);
        if let Some(username) = identity {
            builder = builder.header(IDENTITY_HEADER, username);
        }
        let request = builder.body(Body::empty()).expect("Failed to build request");
        self.oneshot(request).await
    }

    /// POST `uri` with a JSON body.
    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> Response<Body> {
        let request = Self::request(Method::POST, uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.oneshot(request).await
    }
}

/// Create a user holding `role` directly in the directory.
///
/// Returns the generated unique username.
pub async fn create_test_user(pool: &SqlitePool, role: &str) -> String {
    let test_id = Uuid::new_v4().to_string()[..8].to_string();
    let username = format!("httptest_{test_id}");

    directory::create_user(pool, &username, role)
        .await
        .expect("Failed to create test user");

    username
}

/// Read a user's current role straight from the directory.
pub async fn role_of(pool: &SqlitePool, username: &str) -> String {
    directory::find_user_with_role_by_username(pool, username)
        .await
        .expect("Failed to query user")
        .expect("User not found")
        .role
}

/// Convert a response body to JSON, panicking with the raw body on failure.
pub async fn body_to_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();

    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        let preview = String::from_utf8_lossy(&bytes);
        panic!("Failed to parse response body as JSON: {e}\nBody: {preview}");
    })
}
