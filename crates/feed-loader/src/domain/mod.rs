//! Feed domain model, decoding, and the loader service.
//!
//! Purpose: turn one HTTP exchange into one [`LoadResult`]. Types here are
//! immutable values; transport concerns stay behind the
//! [`ports::HttpClient`] port.
//!
//! Public surface:
//! - `FeedItem` — decoded feed entry.
//! - `LoadError` / `LoadResult` — the two-kind failure taxonomy and outcome.
//! - `decode_feed_items` / `FeedDecodeError` — pure payload decoding.
//! - `RemoteFeedLoader` — classification service implementing
//!   [`ports::FeedLoader`].

mod feed_item;
mod feed_item_decoder;
mod load_error;
pub mod ports;
mod remote_feed_loader;

pub use self::feed_item::FeedItem;
pub use self::feed_item_decoder::{FeedDecodeError, decode_feed_items};
pub use self::load_error::{LoadError, LoadResult};
pub use self::remote_feed_loader::RemoteFeedLoader;
