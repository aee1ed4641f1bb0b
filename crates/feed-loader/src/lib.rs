//! Remote feed loading over HTTP.
//!
//! The crate fetches a JSON feed from one URL, classifies the transport
//! outcome, and decodes the payload into [`FeedItem`] records. Every load
//! resolves to exactly one [`LoadResult`]: the decoded items, or one of the
//! two [`LoadError`] kinds.
//!
//! # Layout
//!
//! - [`domain`] owns the feed model, the item decoder, the loader service, and
//!   the ports it depends on.
//! - [`outbound`] provides the `reqwest`-backed implementation of the
//!   [`domain::ports::HttpClient`] port.
//! - [`config`] loads transport settings through OrthoConfig.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use feed_loader::{FeedLoader, RemoteFeedLoader, outbound::http::ReqwestHttpClient};
//! use url::Url;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(ReqwestHttpClient::new(Duration::from_secs(10))?);
//! let loader = RemoteFeedLoader::new(Url::parse("https://feed.example.test/items")?, client);
//!
//! match loader.load().await {
//!     Ok(items) => println!("loaded {} items", items.len()),
//!     Err(error) => eprintln!("feed unavailable: {error}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use domain::ports::FeedLoader;
pub use domain::{
    FeedDecodeError, FeedItem, LoadError, LoadResult, RemoteFeedLoader, decode_feed_items,
};
