//! Console configuration
//!
//! All settings come from environment variables with defaults:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | FRONTDESK_API_URL | http://127.0.0.1:5000/api/v1 | API base URL |
//! | REQUEST_TIMEOUT_SECS | 30 | HTTP request timeout |
//! | TICK_MS | 100 | UI poll interval |

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub tick_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults when unset or unparseable
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("FRONTDESK_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000/api/v1".into()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            tick_ms: std::env::var("TICK_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
