//! HTTP transport configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

pub(crate) const DEFAULT_USER_AGENT: &str = "feed-loader/0.1";

/// Settings for the `reqwest`-backed [`HttpClient`] adapter.
///
/// Values are layered from defaults, configuration files, `FEED_HTTP_*`
/// environment variables, and command-line arguments.
///
/// [`HttpClient`]: crate::domain::ports::HttpClient
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FEED_HTTP")]
pub struct HttpClientSettings {
    /// Whole-request timeout in seconds.
    #[ortho_config(default = 30)]
    pub timeout_seconds: u64,
    /// User agent sent with every request.
    pub user_agent: Option<String>,
}

impl HttpClientSettings {
    /// Return the request timeout.
    ///
    /// A configured value of zero is clamped to one second.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    /// Return the user agent, falling back to the default.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
