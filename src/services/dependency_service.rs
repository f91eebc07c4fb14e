use std::env;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const REDIS_URL_VAR: &str = "REDIS_URL";

/// Answers whether connection settings for the backing services are present.
///
/// Implementations are queried on every health request, so a change to the
/// underlying source is visible without a restart. Nothing is ever connected to.
pub trait DependencySource: Send + Sync {
    /// True when a non-empty database URL is configured
    fn database_configured(&self) -> bool;

    /// True when a non-empty Redis URL is configured
    fn redis_configured(&self) -> bool;
}

/// Reads the process environment at call time
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvDependencySource;

impl DependencySource for EnvDependencySource {
    fn database_configured(&self) -> bool {
        is_set(DATABASE_URL_VAR)
    }

    fn redis_configured(&self) -> bool {
        is_set(REDIS_URL_VAR)
    }
}

// Unset and empty are both "not configured"
fn is_set(key: &str) -> bool {
    env::var_os(key).is_some_and(|v| !v.is_empty())
}

/// Held by every test that changes DATABASE_URL or REDIS_URL
#[cfg(test)]
pub static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Fixed answers, for wiring the router without touching the environment
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct StaticDependencySource {
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
}

#[cfg(test)]
impl DependencySource for StaticDependencySource {
    fn database_configured(&self) -> bool {
        self.database_url.as_deref().is_some_and(|v| !v.is_empty())
    }

    fn redis_configured(&self) -> bool {
        self.redis_url.as_deref().is_some_and(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_treats_empty_as_missing() {
        let source = StaticDependencySource {
            database_url: Some(String::new()),
            redis_url: None,
        };
        assert!(!source.database_configured());
        assert!(!source.redis_configured());
    }

    #[test]
    fn static_source_reports_present_values() {
        let source = StaticDependencySource {
            database_url: Some("postgres://x".to_string()),
            redis_url: Some("redis://y".to_string()),
        };
        assert!(source.database_configured());
        assert!(source.redis_configured());
    }

    #[test]
    fn env_source_reads_at_call_time() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let source = EnvDependencySource;
        let database: fn(&EnvDependencySource) -> bool = EnvDependencySource::database_configured;
        let redis: fn(&EnvDependencySource) -> bool = EnvDependencySource::redis_configured;

        for (key, value, check) in [
            (DATABASE_URL_VAR, "postgres://localhost/app", database),
            (REDIS_URL_VAR, "redis://localhost:6379", redis),
        ] {
            env::remove_var(key);
            assert!(!check(&source), "{key} unset");

            env::set_var(key, "");
            assert!(!check(&source), "{key} empty");

            env::set_var(key, value);
            assert!(check(&source), "{key} set");

            env::remove_var(key);
            assert!(!check(&source), "{key} removed");
        }
    }
}
