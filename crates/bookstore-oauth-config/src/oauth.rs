use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_MS: u64 = 100;

/// Settings for the client that talks to the authorization backend.
///
/// Built once at startup and handed to the client by value; nothing reads the
/// environment after that.
///
/// # Environment Variables
///
/// - `OAUTH_API_BASE_URL`: backend base URL (default: `http://localhost:8080`)
/// - `OAUTH_API_TIMEOUT_MS`: per-request timeout in milliseconds (default: `100`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl OAuthConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("OAUTH_API_BASE_URL")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_millis(
                lookup("OAUTH_API_TIMEOUT_MS")
                    .and_then(|s| s.trim().parse().ok())
                    .filter(|ms| *ms > 0)
                    .unwrap_or(DEFAULT_TIMEOUT_MS),
            ),
        }
    }
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}
