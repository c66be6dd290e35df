//! Access Guard
//!
//! Admits or refuses requests by comparing the caller's stored role against
//! the role a route was registered with. Exact name match only; there is no
//! hierarchy and no caller-memory across requests.

mod authorize;
mod error;
pub mod middleware;

pub use authorize::{authorize, Access, AuthorizedUser, DenyReason};
pub use error::GuardError;
pub use middleware::{require_role, IDENTITY_HEADER};
