//! Driving port for loading a feed.

use async_trait::async_trait;

use crate::domain::LoadResult;

/// Loads the feed bound to an implementation.
///
/// Each call performs its own fetch and resolves exactly once. Concurrent
/// calls are independent and may resolve in any order.
#[async_trait]
pub trait FeedLoader: Send + Sync {
    /// Fetch and decode the feed.
    async fn load(&self) -> LoadResult;
}
