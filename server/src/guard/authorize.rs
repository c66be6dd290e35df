//! Authorization decisions.
//!
//! One pure decision function with a single read side effect (a directory
//! lookup). The guard keeps no state of its own; identity is re-resolved
//! from scratch on every call.

use sqlx::SqlitePool;

use crate::directory::{find_user_with_role_by_username, UserWithRole};

use super::error::GuardError;

/// Caller admitted by the role gate, injected into request extensions.
///
/// Minimal struct holding only what handlers need about the caller.
#[derive(Debug, Clone)]
pub struct AuthorizedUser {
    /// User ID.
    pub id: i64,
    /// Username presented in the identity header.
    pub username: String,
    /// Role the user held when the decision was made.
    pub role: String,
}

impl From<UserWithRole> for AuthorizedUser {
    fn from(user: UserWithRole) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}

/// Why the gate refused a request.
///
/// Logged for operators; responses collapse every variant into the same
/// forbidden reply so callers cannot probe which usernames exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No identity header on the request.
    MissingIdentity,
    /// Identity header named a user the directory does not know.
    UnknownIdentity,
    /// User exists but holds a different role.
    RoleMismatch,
}

/// Outcome of an authorization check.
#[derive(Debug)]
pub enum Access {
    /// Caller holds the required role.
    Granted(AuthorizedUser),
    /// Caller refused.
    Denied(DenyReason),
}

/// Decide whether `claimed` may pass a gate requiring `required`.
///
/// The claimed username is taken at face value; there is no verification
/// step. Role names compare byte-for-byte, so `admin` does not pass a gate
/// requiring `Admin`, and no role implies another.
#[tracing::instrument(skip(pool))]
pub async fn authorize(
    pool: &SqlitePool,
    claimed: Option<&str>,
    required: &str,
) -> sqlx::Result<Access> {
    let Some(username) = claimed else {
        return Ok(Access::Denied(DenyReason::MissingIdentity));
    };

    let Some(user) = find_user_with_role_by_username(pool, username).await? else {
        return Ok(Access::Denied(DenyReason::UnknownIdentity));
    };

    if user.role != required {
        return Ok(Access::Denied(DenyReason::RoleMismatch));
    }

    Ok(Access::Granted(AuthorizedUser::from(user)))
}

/// Extractor for the admitted caller in gated handlers.
///
/// ```ignore
/// async fn gated_handler(user: AuthorizedUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.username)
/// }
/// ```
impl<S> axum::extract::FromRequestParts<S> for AuthorizedUser
where
    S: Send + Sync,
{
    type Rejection = GuardError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or(GuardError::Forbidden)
    }
}
