use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether connection settings for a backing service are present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DependencyStatus {
    #[serde(rename = "connected")]
    Connected,
    #[serde(rename = "not configured")]
    NotConfigured,
}

impl From<bool> for DependencyStatus {
    fn from(configured: bool) -> Self {
        if configured {
            DependencyStatus::Connected
        } else {
            DependencyStatus::NotConfigured
        }
    }
}

/// API response for health check
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: DependencyStatus,
    pub redis: DependencyStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_names() {
        assert_eq!(
            serde_json::to_string(&DependencyStatus::Connected).unwrap(),
            "\"connected\""
        );
        assert_eq!(
            serde_json::to_string(&DependencyStatus::NotConfigured).unwrap(),
            "\"not configured\""
        );
    }

    #[test]
    fn keys_keep_declaration_order() {
        let body = HealthResponse {
            status: "healthy".to_string(),
            database: DependencyStatus::from(true),
            redis: DependencyStatus::from(false),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"healthy","database":"connected","redis":"not configured"}"#
        );
    }
}
