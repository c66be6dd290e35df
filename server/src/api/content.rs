//! Content API Handlers
//!
//! The role-gated demonstration endpoints. Bodies are fixed; the gate
//! wrapped around each route is the part under test.

use axum::Json;
use serde::Serialize;

use crate::guard::AuthorizedUser;

/// Response for POST /manage_content.
#[derive(Serialize)]
pub struct ManageContentResponse {
    message: &'static str,
}

/// Response for GET /view_content.
#[derive(Serialize)]
pub struct ViewContentResponse {
    content: &'static str,
}

/// Create, update, or delete content.
/// POST /manage_content (Editor)
#[tracing::instrument]
pub async fn manage_content(caller: AuthorizedUser) -> Json<ManageContentResponse> {
    tracing::debug!(caller = %caller.username, "Content changed");

    Json(ManageContentResponse {
        message: "Content created/updated/deleted",
    })
}

/// Fetch viewable content.
/// GET /view_content (Viewer)
#[tracing::instrument]
pub async fn view_content(caller: AuthorizedUser) -> Json<ViewContentResponse> {
    tracing::debug!(caller = %caller.username, "Content viewed");

    Json(ViewContentResponse {
        content: "Here is some viewable content",
    })
}
