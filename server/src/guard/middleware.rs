//! Role gate middleware.
//!
//! Wraps protected routes with an authorization check parameterized by a
//! required-role name fixed at registration time. On deny the wrapped
//! handler never runs; on grant the request passes through untouched apart
//! from the injected [`AuthorizedUser`] extension.

use std::future::Future;
use std::pin::Pin;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::api::AppState;

use super::authorize::{authorize, Access};
use super::error::GuardError;

/// Header the caller's identity is read from.
///
/// A bare username, no signature and no session. Whoever sets this header is
/// that user as far as the gate is concerned; see the README threat model.
pub const IDENTITY_HEADER: &str = "username";

/// Build a middleware that only admits callers holding the `required` role.
///
/// # Usage
///
/// ```ignore
/// use axum::middleware::from_fn;
///
/// Router::new()
///     .route("/manage_users", get(manage_users))
///     .layer(from_fn(require_role(state.clone(), BuiltinRole::Admin.as_str())))
/// ```
pub fn require_role(
    state: AppState,
    required: &'static str,
) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Response> + Send>> + Clone + Send + 'static
{
    move |mut request: Request, next: Next| {
        let state = state.clone();
        Box::pin(async move {
            let claimed = request
                .headers()
                .get(IDENTITY_HEADER)
                .and_then(|h| h.to_str().ok())
                .map(str::to_owned);

            match authorize(&state.db, claimed.as_deref(), required).await {
                Ok(Access::Granted(user)) => {
                    request.extensions_mut().insert(user);
                    next.run(request).await
                }
                Ok(Access::Denied(reason)) => {
                    debug!(?reason, required, "Refused request at role gate");
                    GuardError::Forbidden.into_response()
                }
                Err(e) => GuardError::Database(e).into_response(),
            }
        })
    }
}
