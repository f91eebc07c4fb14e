use axum::{extract::State, Json};
use crate::{models::{DependencyStatus, HealthResponse}, state::AppState};
use tracing::debug;

/// Health check endpoint
///
/// Always reports "healthy". The database and redis fields only say whether
/// a URL is configured right now; no connection is attempted.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = DependencyStatus::from(state.dependencies.database_configured());
    let redis = DependencyStatus::from(state.dependencies.redis_configured());
    debug!(?database, ?redis, "Health check requested");
    Json(HealthResponse {
        status: "healthy".to_string(),
        database,
        redis,
    })
}
