//! Domain ports for the hexagonal boundary.

mod feed_loader;
mod http_client;

pub use feed_loader::FeedLoader;
#[cfg(test)]
pub use http_client::MockHttpClient;
pub use http_client::{HttpClient, HttpClientError, HttpResponse};
