//! Doorman Server - Main Entry Point
//!
//! Role-based access control service backend.

use anyhow::Result;
use tracing::info;

use doorman_server::{api, config, directory};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doorman_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Doorman Server"
    );

    // Initialize database
    let db_pool = directory::create_pool(&config.database_url).await?;
    directory::run_migrations(&db_pool).await?;

    // Seed roles before serving traffic; re-runs leave existing rows alone
    directory::seed_roles(&db_pool, &config.seed_roles).await?;
    info!(roles = ?config.seed_roles, "Role seed complete");

    // Build application state
    let state = api::AppState::new(db_pool, config.clone());

    // Build router
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
