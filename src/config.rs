use serde::{Deserialize, Serialize};
use std::ffi::OsString;

/// Port the HTTP server always binds to
pub const PORT: u16 = 5000;

/// Application configuration, read once at startup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(rename = "flask_host", default = "default_host")]
    pub host: String,

    /// Raw debug flag, only "true" (any case) turns debug mode on
    #[serde(rename = "flask_debug")]
    pub debug: Option<String>,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        Self::from_vars(utf8_vars(std::env::vars_os()))
    }

    /// Build a configuration from key/value pairs named like environment variables
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(ConfigError::EnvError)
    }

    /// Get the full server address, an empty host binds the default one
    pub fn server_address(&self) -> String {
        if self.host.is_empty() {
            format!("{}:{}", default_host(), PORT)
        } else {
            format!("{}:{}", self.host, PORT)
        }
    }

    /// Check if debug mode is on
    pub fn debug_enabled(&self) -> bool {
        self.debug
            .as_deref()
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// Default tracing filter, more verbose in debug mode
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug_enabled() {
            "hello_health=debug,tower_http=debug,axum::rejection=trace,info"
        } else {
            "hello_health=info,tower_http=info,info"
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            debug: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EnvError(envy::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EnvError(e) => write!(f, "Environment variable error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

// Variables that are not valid UTF-8 can't be config keys, skip them
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}
