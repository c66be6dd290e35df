//! Server Configuration
//!
//! Loads configuration from environment variables.

use std::env;

use anyhow::{ensure, Result};

use crate::directory::BuiltinRole;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// `SQLite` connection URL
    pub database_url: String,

    /// Role names seeded at startup
    pub seed_roles: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let seed_roles = match env::var("SEED_ROLES") {
            Ok(list) => {
                let parsed: Vec<String> = list
                    .split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect();
                ensure!(!parsed.is_empty(), "SEED_ROLES must name at least one role");
                parsed
            }
            Err(_) => Self::default_seed_roles(),
        };

        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://doorman.db".into()),
            seed_roles,
        })
    }

    fn default_seed_roles() -> Vec<String> {
        BuiltinRole::all()
            .iter()
            .map(|r| r.as_str().to_string())
            .collect()
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            database_url: "sqlite::memory:".into(),
            seed_roles: Self::default_seed_roles(),
        }
    }
}
