use std::sync::Arc;

use crate::services::dependency_service::DependencySource;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub dependencies: Arc<dyn DependencySource>,
}

impl AppState {
    pub fn new(dependencies: impl DependencySource + 'static) -> Self {
        Self {
            dependencies: Arc::new(dependencies),
        }
    }
}
