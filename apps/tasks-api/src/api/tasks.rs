//! Tasks API routes
//!
//! This module wires up the tasks domain to HTTP routes.

use axum::Router;
use domain_tasks::{handlers, MongoTaskRepository, TaskService};
use tracing::info;

use crate::state::AppState;

/// Create tasks router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoTaskRepository::new(state.db.clone());

    // Create the service
    let service = TaskService::new(repository);

    // Return the domain's router
    handlers::router(service)
}

/// Initialize task indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoTaskRepository::new(db.clone());
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create task indexes: {}", e))?;
    info!("Task collection indexes created");
    Ok(())
}
