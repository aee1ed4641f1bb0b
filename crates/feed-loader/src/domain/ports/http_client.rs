//! Driven port for issuing HTTP GET requests.
//!
//! The domain owns the response contract so the loader stays independent of
//! any particular HTTP stack. A completed exchange is always reported as a
//! response, whatever its status; only failures to complete the exchange are
//! errors.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Completed HTTP exchange as seen by the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Build a response from a status code and body bytes.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Errors surfaced when an HTTP exchange does not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The connection failed or the body could not be read.
    #[error("http transport failed: {message}")]
    Transport {
        /// Underlying transport diagnostic.
        message: String,
    },
    /// The request exceeded the client timeout.
    #[error("http request timed out: {message}")]
    Timeout {
        /// Underlying timeout diagnostic.
        message: String,
    },
}

impl HttpClientError {
    /// Build a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }
}

/// Port for fetching a resource by URL.
///
/// Implementations complete each call exactly once and are responsible for
/// their own synchronisation when shared.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue one GET request against `url`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use feed_loader::domain::ports::HttpClient;
    /// use url::Url;
    ///
    /// let url = Url::parse("https://feed.example.test/items")?;
    /// let response = client.get(&url).await?;
    /// assert_eq!(response.status, 200);
    /// ```
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError>;
}
