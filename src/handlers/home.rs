use axum::Json;
use crate::models::HomeResponse;
use tracing::debug;

/// Greeting endpoint
pub async fn home() -> Json<HomeResponse> {
    debug!("Home requested");
    Json(HomeResponse {
        message: "Hello World!".to_string(),
        status: "running".to_string(),
    })
}
