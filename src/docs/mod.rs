use utoipa::OpenApi;
use crate::models::*;

/// Greeting endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = HomeResponse)
    )
)]
#[allow(dead_code)]
pub async fn home_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        home_doc,
        health_check_doc,
    ),
    components(
        schemas(HomeResponse, HealthResponse, DependencyStatus)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
