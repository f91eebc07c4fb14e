use crate::{handlers::{health_check, home}, state::AppState};
use axum::{routing::get, Router};

/// Create API routes
pub fn create_api_routes(state: AppState) -> Router {
    Router::<AppState>::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .with_state(state)
}
