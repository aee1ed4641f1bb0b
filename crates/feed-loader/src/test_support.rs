//! Test utilities for the feed-loader crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled for tests or when the
//! `test-support` feature is enabled.

pub mod fixtures {
    //! Typed fixture builders for feed payloads.
    //!
    //! Each builder yields the expected domain item together with its wire
    //! JSON so the two cannot drift apart.

    use serde_json::{Map, Value, json};
    use url::Url;
    use uuid::Uuid;

    use crate::FeedItem;

    /// Builder for one feed item and its JSON representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use feed_loader::decode_feed_items;
    /// use feed_loader::test_support::fixtures::{FeedItemFixture, items_json};
    /// use url::Url;
    /// use uuid::Uuid;
    ///
    /// let image_url = Url::parse("https://cdn.example.test/a.png")?;
    /// let (item, json) = FeedItemFixture::new(Uuid::new_v4(), image_url)
    ///     .with_location("Braga")
    ///     .build();
    ///
    /// let decoded = decode_feed_items(&items_json(&[json]))?;
    /// assert_eq!(decoded, vec![item]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[derive(Debug, Clone)]
    pub struct FeedItemFixture {
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
        explicit_nulls: bool,
    }

    impl FeedItemFixture {
        /// Start a fixture with only the required fields.
        #[must_use]
        pub const fn new(id: Uuid, image_url: Url) -> Self {
            Self {
                id,
                description: None,
                location: None,
                image_url,
                explicit_nulls: false,
            }
        }

        /// Set the description.
        #[must_use]
        pub fn with_description(mut self, description: impl Into<String>) -> Self {
            self.description = Some(description.into());
            self
        }

        /// Set the location.
        #[must_use]
        pub fn with_location(mut self, location: impl Into<String>) -> Self {
            self.location = Some(location.into());
            self
        }

        /// Emit absent optional fields as JSON `null` instead of omitting them.
        #[must_use]
        pub const fn with_explicit_nulls(mut self) -> Self {
            self.explicit_nulls = true;
            self
        }

        /// Produce the expected item and its wire JSON.
        #[must_use]
        pub fn build(self) -> (FeedItem, Value) {
            let mut fields = Map::new();
            fields.insert("id".to_owned(), json!(self.id.to_string()));
            for (key, value) in [
                ("description", &self.description),
                ("location", &self.location),
            ] {
                match value {
                    Some(text) => {
                        fields.insert(key.to_owned(), json!(text));
                    }
                    None if self.explicit_nulls => {
                        fields.insert(key.to_owned(), Value::Null);
                    }
                    None => {}
                }
            }
            fields.insert("image".to_owned(), json!(self.image_url.as_str()));

            let item = FeedItem::new(self.id, self.description, self.location, self.image_url);
            (item, Value::Object(fields))
        }
    }

    /// Wrap item JSON values in the `{"items": [...]}` envelope and encode it.
    #[must_use]
    pub fn items_json(items: &[Value]) -> Vec<u8> {
        json!({ "items": items }).to_string().into_bytes()
    }
}

pub mod http_client_spy {
    //! Controllable [`HttpClient`] that parks every request until a test
    //! completes it.

    use std::sync::{Mutex, MutexGuard, PoisonError};

    use async_trait::async_trait;
    use thiserror::Error;
    use tokio::sync::oneshot;
    use url::Url;

    use crate::domain::ports::{HttpClient, HttpClientError, HttpResponse};

    type Completion = oneshot::Sender<Result<HttpResponse, HttpClientError>>;

    struct PendingRequest {
        url: Url,
        completion: Option<Completion>,
    }

    /// Errors raised when a test drives the spy incorrectly.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum SpyError {
        /// No request was issued at the index.
        #[error("no request recorded at index {index}")]
        NoRequest {
            /// Requested index.
            index: usize,
        },
        /// The request at the index was already completed.
        #[error("request at index {index} was already completed")]
        AlreadyCompleted {
            /// Requested index.
            index: usize,
        },
        /// The caller stopped waiting for the request at the index.
        #[error("request at index {index} was abandoned by its caller")]
        Abandoned {
            /// Requested index.
            index: usize,
        },
    }

    /// HTTP client spy recording requested URLs in issuance order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    ///
    /// use feed_loader::test_support::http_client_spy::HttpClientSpy;
    /// use feed_loader::{FeedLoader, LoadError, RemoteFeedLoader};
    /// use url::Url;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Arc::new(HttpClientSpy::new());
    /// let loader = RemoteFeedLoader::new(Url::parse("https://a-url.test")?, Arc::clone(&client));
    ///
    /// let (result, ()) = tokio::join!(loader.load(), async {
    ///     tokio::task::yield_now().await;
    ///     client.complete_with_status(404, b"".to_vec(), 0).expect("pending request");
    /// });
    /// assert_eq!(result, Err(LoadError::InvalidData));
    /// # Ok(())
    /// # }
    /// ```
    #[derive(Default)]
    pub struct HttpClientSpy {
        messages: Mutex<Vec<PendingRequest>>,
    }

    impl HttpClientSpy {
        /// Create a spy with no recorded requests.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// URLs of every request issued so far, in issuance order.
        #[must_use]
        pub fn requested_urls(&self) -> Vec<Url> {
            self.lock_messages()
                .iter()
                .map(|request| request.url.clone())
                .collect()
        }

        /// Number of requests issued so far.
        #[must_use]
        pub fn request_count(&self) -> usize {
            self.lock_messages().len()
        }

        /// Fail the request at `index` with a transport error.
        ///
        /// # Errors
        ///
        /// Returns [`SpyError`] when the request does not exist, was already
        /// completed, or its caller stopped waiting.
        pub fn complete_with_error(
            &self,
            error: HttpClientError,
            index: usize,
        ) -> Result<(), SpyError> {
            self.complete(index, Err(error))
        }

        /// Answer the request at `index` with a status code and body.
        ///
        /// # Errors
        ///
        /// Returns [`SpyError`] when the request does not exist, was already
        /// completed, or its caller stopped waiting.
        pub fn complete_with_status(
            &self,
            status: u16,
            body: impl Into<Vec<u8>>,
            index: usize,
        ) -> Result<(), SpyError> {
            self.complete(index, Ok(HttpResponse::new(status, body)))
        }

        fn complete(
            &self,
            index: usize,
            outcome: Result<HttpResponse, HttpClientError>,
        ) -> Result<(), SpyError> {
            let completion = {
                let mut messages = self.lock_messages();
                let request = messages
                    .get_mut(index)
                    .ok_or(SpyError::NoRequest { index })?;
                request
                    .completion
                    .take()
                    .ok_or(SpyError::AlreadyCompleted { index })?
            };
            completion
                .send(outcome)
                .map_err(|_| SpyError::Abandoned { index })
        }

        fn lock_messages(&self) -> MutexGuard<'_, Vec<PendingRequest>> {
            self.messages
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
        }
    }

    #[async_trait]
    impl HttpClient for HttpClientSpy {
        async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError> {
            let (sender, receiver) = oneshot::channel();
            self.lock_messages().push(PendingRequest {
                url: url.clone(),
                completion: Some(sender),
            });
            receiver.await.unwrap_or_else(|_| {
                Err(HttpClientError::transport(
                    "spy dropped the pending request",
                ))
            })
        }
    }
}
