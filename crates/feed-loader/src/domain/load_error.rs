//! Failure taxonomy surfaced by feed loads.

use thiserror::Error;

use super::FeedItem;

/// Outcome of one feed load: the decoded items in payload order, or a
/// classified failure.
pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Errors surfaced to callers of a feed load.
///
/// Every underlying cause collapses into one of these two kinds. Transport
/// detail, status codes, and JSON diagnostics are not forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LoadError {
    /// The transport failed before an HTTP response was received.
    #[error("feed could not be reached")]
    Connectivity,
    /// A response arrived but was not a decodable 200 feed payload.
    #[error("feed responded with invalid data")]
    InvalidData,
}
