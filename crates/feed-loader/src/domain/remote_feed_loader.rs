//! Feed loading service.
//!
//! Classifies one HTTP exchange into a [`LoadResult`]:
//! - transport failures become [`LoadError::Connectivity`];
//! - any status other than 200 becomes [`LoadError::InvalidData`];
//! - a 200 body is decoded, with decode failures becoming
//!   [`LoadError::InvalidData`].

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::debug;
use url::Url;

use crate::domain::ports::{FeedLoader, HttpClient, HttpClientError, HttpResponse};
use crate::domain::{LoadError, LoadResult, decode_feed_items};

const OK_200: u16 = 200;

/// Domain service loading the feed at one fixed URL through an [`HttpClient`].
///
/// The URL and client are bound at construction and never change. The loader
/// keeps no state between calls; constructing it issues no request.
pub struct RemoteFeedLoader<C: ?Sized> {
    url: Url,
    client: Arc<C>,
}

impl<C: ?Sized> RemoteFeedLoader<C> {
    /// Create a loader for `url` backed by `client`.
    #[must_use]
    pub const fn new(url: Url, client: Arc<C>) -> Self {
        Self { url, client }
    }

    /// URL every load is issued against.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl<C> RemoteFeedLoader<C>
where
    C: HttpClient + ?Sized + 'static,
{
    /// Load the feed on a spawned Tokio task and hand the outcome to
    /// `completion`.
    ///
    /// The task holds only a weak reference to the loader. If every strong
    /// reference is dropped before the transport answers, the outcome is
    /// discarded and `completion` is never called.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let loader = Arc::new(RemoteFeedLoader::new(url, client));
    /// let handle = loader.load_with(|result| {
    ///     tracing::info!(ok = result.is_ok(), "feed load finished");
    /// });
    /// handle.await?;
    /// ```
    pub fn load_with<F>(self: &Arc<Self>, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(LoadResult) + Send + 'static,
    {
        let loader = Arc::downgrade(self);
        let client = Arc::clone(&self.client);
        let url = self.url.clone();
        tokio::spawn(async move {
            debug!(url = %url, "requesting feed");
            let outcome = client.get(&url).await;
            if loader.upgrade().is_none() {
                debug!(url = %url, "feed loader dropped before transport completed; discarding outcome");
                return;
            }
            completion(map_outcome(outcome));
        })
    }
}

#[async_trait]
impl<C> FeedLoader for RemoteFeedLoader<C>
where
    C: HttpClient + ?Sized,
{
    async fn load(&self) -> LoadResult {
        debug!(url = %self.url, "requesting feed");
        map_outcome(self.client.get(&self.url).await)
    }
}

fn map_outcome(outcome: Result<HttpResponse, HttpClientError>) -> LoadResult {
    match outcome {
        Ok(response) => map_response(&response),
        Err(error) => {
            debug!(%error, "feed transport failed");
            Err(LoadError::Connectivity)
        }
    }
}

fn map_response(response: &HttpResponse) -> LoadResult {
    if response.status != OK_200 {
        debug!(status = response.status, "feed responded with unexpected status");
        return Err(LoadError::InvalidData);
    }

    decode_feed_items(&response.body).map_err(|error| {
        debug!(%error, "feed payload rejected");
        LoadError::InvalidData
    })
}

#[cfg(test)]
#[path = "remote_feed_loader_tests.rs"]
mod tests;
