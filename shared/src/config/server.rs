//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{environment::Environment, non_empty, parse_or, Lookup};

/// Port the password reset service has always listened on
pub const DEFAULT_PORT: u16 = 5001;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,

    /// Maximum JSON payload size in bytes for requests carrying attachments
    #[serde(default = "default_max_attachment_payload_size")]
    pub max_attachment_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
            workers: 0,
            max_payload_size: default_max_payload_size(),
            max_attachment_payload_size: default_max_attachment_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(crate) fn from_lookup(lookup: Lookup<'_>) -> Self {
        let defaults = Self::default();
        let port = non_empty(lookup, "RESET_PORT")
            .or_else(|| non_empty(lookup, "SERVER_PORT"))
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            host: non_empty(lookup, "SERVER_HOST").unwrap_or(defaults.host),
            port,
            workers: parse_or(lookup, "SERVER_WORKERS", defaults.workers),
            max_payload_size: parse_or(lookup, "SERVER_MAX_PAYLOAD_SIZE", defaults.max_payload_size),
            max_attachment_payload_size: parse_or(
                lookup,
                "SERVER_MAX_ATTACHMENT_PAYLOAD_SIZE",
                defaults.max_attachment_payload_size,
            ),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create a permissive CORS configuration for development
    pub fn development() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            max_age: 3600,
        }
    }

    /// Whether any origin is accepted
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    pub(crate) fn from_lookup(lookup: Lookup<'_>, env: Environment) -> Self {
        let mut config = if env.is_production() {
            Self::default()
        } else {
            Self::development()
        };

        if let Some(origins) = non_empty(lookup, "ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect();
        }
        config.max_age = parse_or(lookup, "CORS_MAX_AGE", config.max_age);
        config
    }
}

fn default_max_payload_size() -> usize {
    64 * 1024  // 64 KB
}

fn default_max_attachment_payload_size() -> usize {
    50 * 1024 * 1024  // 50 MB, room for a base64 encoded PDF
}

fn default_max_age() -> usize {
    86400  // 24 hours
}
