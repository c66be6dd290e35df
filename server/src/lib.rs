//! Doorman Server
//!
//! Minimal role-based access control service over HTTP. A directory of users
//! and roles backs a per-route gate that compares the caller's stored role
//! against the role each route was registered with.

pub mod api;
pub mod config;
pub mod directory;
pub mod guard;
