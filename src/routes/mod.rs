pub mod api;

use crate::docs::ApiDoc;
use crate::state::AppState;
use api::create_api_routes;
use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the full application router.
///
/// The Swagger UI is only mounted in debug mode; otherwise anything but `/`
/// and `/health` falls through to the default 404.
pub fn create_app(state: AppState, debug: bool) -> Router {
    let mut app = create_api_routes(state);
    if debug {
        app = app.merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }
    with_layers(app)
}

// Request tracing, and a 500 instead of a dropped connection if a handler panics
fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
