use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for the root endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub message: String,
    pub status: String,
}
