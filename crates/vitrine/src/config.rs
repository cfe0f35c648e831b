use std::{env, time::Duration};

/// Runtime tunables loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Image proxy endpoint (default: "http://localhost:3000/api/unsplash/random")
    pub image_proxy_url: String,
    /// Whether missing images are fetched from the proxy (default: false)
    pub image_fetch_enabled: bool,
    /// How long one render waits for its images, in milliseconds (default: 1,500)
    pub image_wait_ms: u64,
    /// Request timeout in seconds, for inbound requests and proxy calls (default: 10)
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `IMAGE_PROXY_URL` - Image proxy endpoint
    /// - `IMAGE_FETCH_ENABLED` - `true` to fetch missing images (default: false)
    /// - `IMAGE_WAIT_MS` - Per-render image wait budget (default: 1,500)
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            image_proxy_url: env::var("IMAGE_PROXY_URL")
                .unwrap_or_else(|_| "http://localhost:3000/api/unsplash/random".to_string()),
            image_fetch_enabled: env::var("IMAGE_FETCH_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            image_wait_ms: env::var("IMAGE_WAIT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_500),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    pub fn image_wait(&self) -> Duration {
        Duration::from_millis(self.image_wait_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
