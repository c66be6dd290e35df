//! Directory Queries
//!
//! Runtime queries (no compile-time `DATABASE_URL` required).
//!
//! All query functions include error context logging to aid debugging.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{error, info};

use super::error::DirectoryError;
use super::models::{Role, User, UserWithRole};

/// Log and return a database error with context.
///
/// This helper ensures all database errors are logged with relevant context
/// before being propagated, making production debugging easier.
macro_rules! db_error {
    ($query:expr, $($field:tt)*) => {
        |e| {
            error!(query = $query, $($field)*, error = %e, "Database query failed");
            e
        }
    };
}

// ============================================================================
// Role Queries
// ============================================================================

/// Insert any missing role rows by name.
///
/// Existing rows are left untouched, so calling this on every boot is safe.
pub async fn seed_roles(pool: &SqlitePool, names: &[String]) -> sqlx::Result<()> {
    for name in names {
        let result = sqlx::query("INSERT INTO roles (name, created_at) VALUES (?1, ?2) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .bind(Utc::now())
            .execute(pool)
            .await
            .map_err(db_error!("seed_roles", role = %name))?;

        if result.rows_affected() > 0 {
            info!(role = %name, "Created role");
        }
    }

    Ok(())
}

/// Find role by name (exact, case-sensitive).
pub async fn find_role_by_name(pool: &SqlitePool, name: &str) -> sqlx::Result<Option<Role>> {
    sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE name = ?1")
        .bind(name)
        .fetch_optional(pool)
        .await
        .map_err(db_error!("find_role_by_name", role = %name))
}

/// List all roles in seed order.
pub async fn list_roles(pool: &SqlitePool) -> sqlx::Result<Vec<Role>> {
    sqlx::query_as::<_, Role>("SELECT * FROM roles ORDER BY id")
        .fetch_all(pool)
        .await
}

// ============================================================================
// User Queries
// ============================================================================

/// Find user by username.
pub async fn find_user_by_username(pool: &SqlitePool, username: &str) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?1")
        .bind(username)
        .fetch_optional(pool)
        .await
        .map_err(db_error!("find_user_by_username", username = %username))
}

/// Find user by username, joined with the name of the assigned role.
pub async fn find_user_with_role_by_username(
    pool: &SqlitePool,
    username: &str,
) -> sqlx::Result<Option<UserWithRole>> {
    sqlx::query_as::<_, UserWithRole>(
        r"
        SELECT users.id, users.username, roles.name AS role, users.created_at
        FROM users
        JOIN roles ON roles.id = users.role_id
        WHERE users.username = ?1
        ",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
    .map_err(db_error!("find_user_with_role_by_username", username = %username))
}

/// Check if username exists.
pub async fn username_exists(pool: &SqlitePool, username: &str) -> sqlx::Result<bool> {
    let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1)")
        .bind(username)
        .fetch_one(pool)
        .await?;

    Ok(result.0)
}

/// List all users with their role names, in creation order.
pub async fn list_users(pool: &SqlitePool) -> sqlx::Result<Vec<UserWithRole>> {
    sqlx::query_as::<_, UserWithRole>(
        r"
        SELECT users.id, users.username, roles.name AS role, users.created_at
        FROM users
        JOIN roles ON roles.id = users.role_id
        ORDER BY users.id
        ",
    )
    .fetch_all(pool)
    .await
}

/// Create a new user holding the named role.
///
/// The role must already exist; users are never created with a dangling or
/// missing role. The username is pre-checked, but the insert still maps
/// unique violations so a concurrent create of the same name cannot slip
/// past the check.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    role_name: &str,
) -> Result<UserWithRole, DirectoryError> {
    if username_exists(pool, username).await? {
        return Err(DirectoryError::DuplicateUser);
    }

    let Some(role) = find_role_by_name(pool, role_name).await? else {
        return Err(DirectoryError::UnknownRole(role_name.to_string()));
    };

    let user = sqlx::query_as::<_, User>(
        r"
        INSERT INTO users (username, role_id, created_at)
        VALUES (?1, ?2, ?3)
        RETURNING *
        ",
    )
    .bind(username)
    .bind(role.id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
            DirectoryError::DuplicateUser
        } else {
            error!(query = "create_user", username = %username, error = %e, "Database query failed");
            DirectoryError::Database(e)
        }
    })?;

    Ok(UserWithRole {
        id: user.id,
        username: user.username,
        role: role.name,
        created_at: user.created_at,
    })
}

/// Point `username` at the role named `role_name`.
///
/// Resolution and update happen in a single statement, so concurrent
/// reassignments of the same user serialize on the row write and the last
/// commit wins. Returns [`DirectoryError::NotFound`] when either name is
/// missing, without saying which side.
pub async fn reassign_role(
    pool: &SqlitePool,
    username: &str,
    role_name: &str,
) -> Result<(), DirectoryError> {
    let result = sqlx::query(
        r"
        UPDATE users
        SET role_id = (SELECT id FROM roles WHERE name = ?2)
        WHERE username = ?1
          AND EXISTS (SELECT 1 FROM roles WHERE name = ?2)
        ",
    )
    .bind(username)
    .bind(role_name)
    .execute(pool)
    .await
    .map_err(db_error!("reassign_role", username = %username, role = %role_name))?;

    if result.rows_affected() == 0 {
        return Err(DirectoryError::NotFound);
    }

    Ok(())
}
