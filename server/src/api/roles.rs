//! Role Listing API Handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    api::{ApiError, AppState},
    directory,
};

/// Role entry in listing responses.
#[derive(Debug, Serialize)]
pub struct RoleSummary {
    pub id: i64,
    pub name: String,
}

/// List every role in the directory, in seed order.
/// GET /check_roles
#[tracing::instrument(skip(state))]
pub async fn check_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoleSummary>>, ApiError> {
    let roles = directory::list_roles(&state.db).await?;

    Ok(Json(
        roles
            .into_iter()
            .map(|r| RoleSummary {
                id: r.id,
                name: r.name,
            })
            .collect(),
    ))
}
