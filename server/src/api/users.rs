//! User Directory API Handlers
//!
//! Creating users, reassigning roles, and the admin-gated user listing.
//! The create and reassign operations take no role check of their own; see
//! the README security model for why that asymmetry is kept.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    api::{ApiError, AppJson, AppState},
    directory,
    guard::AuthorizedUser,
};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /add_user and POST /assign_role.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRolePayload {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 50, message = "Role name must be 1-50 characters"))]
    pub role_name: String,
}

/// User entry in listing responses.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// Response for POST /add_user.
#[derive(Debug, Serialize)]
pub struct AddUserResponse {
    pub message: &'static str,
    pub user: UserSummary,
}

/// Response for POST /assign_role.
#[derive(Debug, Serialize)]
pub struct AssignRoleResponse {
    pub message: &'static str,
}

// ============================================================================
// Handlers
// ============================================================================

/// Create a user holding an existing role.
/// POST /add_user
#[tracing::instrument(skip(state))]
pub async fn add_user(
    State(state): State<AppState>,
    AppJson(body): AppJson<UserRolePayload>,
) -> Result<(StatusCode, Json<AddUserResponse>), ApiError> {
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let user = directory::create_user(&state.db, &body.username, &body.role_name).await?;

    tracing::info!(username = %user.username, role = %user.role, "User added");

    Ok((
        StatusCode::CREATED,
        Json(AddUserResponse {
            message: "User created successfully",
            user: UserSummary {
                id: user.id,
                username: user.username,
                role: user.role,
            },
        }),
    ))
}

/// Point an existing user at an existing role.
/// POST /assign_role
#[tracing::instrument(skip(state))]
pub async fn assign_role(
    State(state): State<AppState>,
    AppJson(body): AppJson<UserRolePayload>,
) -> Result<Json<AssignRoleResponse>, ApiError> {
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    directory::reassign_role(&state.db, &body.username, &body.role_name).await?;

    tracing::info!(username = %body.username, role = %body.role_name, "Role assigned");

    Ok(Json(AssignRoleResponse {
        message: "Role assigned successfully",
    }))
}

/// List every user with its role name.
/// GET /manage_users (Admin)
#[tracing::instrument(skip(state))]
pub async fn manage_users(
    State(state): State<AppState>,
    caller: AuthorizedUser,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = directory::list_users(&state.db).await?;

    tracing::debug!(caller = %caller.username, count = users.len(), "Listed users");

    Ok(Json(
        users
            .into_iter()
            .map(|u| UserSummary {
                id: u.id,
                username: u.username,
                role: u.role,
            })
            .collect(),
    ))
}
