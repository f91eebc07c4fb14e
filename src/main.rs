mod models;
mod handlers;
mod routes;
mod docs;
mod config;
mod services;
mod state;

use config::Config;
use routes::create_app;
use services::dependency_service::EnvDependencySource;
use state::AppState;
use tracing::{info, error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use std::panic;

#[tokio::main(flavor = "current_thread")]
async fn main() {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Load configuration before tracing, the debug flag picks the default filter
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.default_log_filter().into()))
        .init();

    match &loaded {
        Ok(_) => info!("✅ Configuration loaded successfully"),
        Err(e) => {
            error!("❌ Failed to load configuration: {}", e);
            warn!("Using default configuration");
        }
    }

    if config.debug_enabled() {
        info!("Debug mode enabled");
    }

    // Health checks read DATABASE_URL and REDIS_URL on every request
    let state = AppState::new(EnvDependencySource);
    let app = create_app(state, config.debug_enabled());

    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {e}", config.server_address()));

    info!("🚀 Server running on http://{}", config.server_address());
    if config.debug_enabled() {
        info!("📚 Swagger UI available at http://{}/swagger", config.server_address());
    }

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
