//! Reqwest-backed HTTP client adapter.
//!
//! This adapter owns transport details only: request headers, timeout, and
//! error mapping. Status codes and bodies are handed to the domain untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::{DEFAULT_USER_AGENT, HttpClientSettings};
use crate::domain::ports::{HttpClient, HttpClientError, HttpResponse};

/// Outbound identity sent with every request.
pub struct HttpIdentity {
    /// HTTP user-agent header value.
    pub user_agent: String,
}

impl Default for HttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// HTTP client adapter performing GET requests with `reqwest`.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let client = ReqwestHttpClient::new(Duration::from_secs(10))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(timeout, HttpIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    /// ```rust,ignore
    /// let identity = HttpIdentity { user_agent: "photo-wall/2.1".to_owned() };
    /// let client = ReqwestHttpClient::with_identity(timeout, identity)?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(timeout: Duration, identity: HttpIdentity) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(identity.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Build an adapter from layered configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn from_settings(settings: &HttpClientSettings) -> Result<Self, reqwest::Error> {
        Self::with_identity(
            settings.timeout(),
            HttpIdentity {
                user_agent: settings.user_agent().to_owned(),
            },
        )
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(url = %url, status, bytes = body.len(), "http exchange completed");
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

fn map_transport_error(error: reqwest::Error) -> HttpClientError {
    debug!(%error, "http exchange failed");
    if error.is_timeout() {
        HttpClientError::timeout(error.to_string())
    } else {
        HttpClientError::transport(error.to_string())
    }
}
