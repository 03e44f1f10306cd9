//! Server configuration.

const DEFAULT_MAX_BODY_SIZE: usize = 100 * 1024 * 1024; // 100MB

/// Server configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// API key required on /analyze; `None` disables the check (local demo)
    pub api_key: Option<String>,
    /// Max request body size (covers the multipart upload)
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            api_key: None,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("FACETRACE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("FACETRACE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            api_key: std::env::var("FACETRACE_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            max_body_size: std::env::var("FACETRACE_MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),
        }
    }
}
