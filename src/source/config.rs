/// Upstream API used when `FESTIDEX_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://groupietrackers.herokuapp.com/api";

/// Where and how the four catalog collections are fetched, loaded from
/// environment variables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the upstream API; endpoints are appended to it.
    pub api_url: String,
    /// Per-request timeout for each of the four fetches (seconds).
    pub fetch_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            fetch_timeout_secs: 30,
        }
    }
}

impl CatalogConfig {
    /// Load config from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("FESTIDEX_API_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            fetch_timeout_secs: std::env::var("FESTIDEX_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.fetch_timeout_secs),
        }
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Full URL for one upstream resource, e.g. `endpoint("artists")`.
    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), resource)
    }
}
