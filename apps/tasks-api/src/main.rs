use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Probe the store with retry. An unreachable store is logged, not fatal:
    // the server starts anyway and requests fail at the store layer until it
    // recovers.
    let mongo_client =
        match database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await {
            Ok(client) => {
                info!(
                    "Successfully connected to MongoDB database: {}",
                    config.mongodb.database()
                );
                client
            }
            Err(err) => {
                warn!(
                    error = %err,
                    "MongoDB unreachable at startup; serving anyway, requests will fail until the store recovers"
                );
                database::mongodb::client_from_config(&config.mongodb).await?
            }
        };

    // Get the database
    let db = mongo_client.database(config.mongodb.database());

    // Initialize indexes (best effort while the store is down)
    if let Err(err) = api::tasks::init_indexes(&db).await {
        warn!(error = %err, "Skipping task index creation");
    }

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    info!("Starting Tasks API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            // MongoDB client closes automatically on drop
            drop(state.mongo_client);
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Tasks API shutdown complete");
    Ok(())
}
