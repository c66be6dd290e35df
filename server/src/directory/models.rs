//! Directory Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role model.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// User model.
///
/// Every user holds exactly one role; `role_id` is required.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
}

/// User row joined with the name of its assigned role.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserWithRole {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
