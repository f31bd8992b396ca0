//! Health check endpoints

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};

use crate::state::AppState;

/// Create a health check router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies the MongoDB connection
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(async {
            let status = database::mongodb::check_health_detailed(&state.mongo_client).await;
            if status.healthy {
                Ok(())
            } else {
                Err(status
                    .message
                    .unwrap_or_else(|| "unreachable".to_string()))
            }
        }),
    )];

    match run_health_checks(checks).await {
        Ok(ready) => ready.into_response(),
        Err(not_ready) => not_ready.into_response(),
    }
}
