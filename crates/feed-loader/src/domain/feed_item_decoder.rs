//! Decoding of feed payloads into domain items.
//!
//! The payload is decoded into transport DTOs first, then mapped into
//! [`FeedItem`] records in one pass. Decoding is all-or-nothing: one invalid
//! entry rejects the whole payload.
//!
//! Serde derive accepts a JSON array wherever it expects a struct, so the
//! object structure is checked on a parsed [`Value`] before the DTOs are read
//! straight from the bytes. Reading from the bytes keeps serde's duplicate
//! field detection.

use serde::Deserialize;
use serde_json::error::Category;
use serde_json::Value;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use super::FeedItem;

/// Errors raised while decoding a feed payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedDecodeError {
    /// The payload is not well-formed JSON.
    #[error("feed payload is not valid JSON: {message}")]
    Syntax {
        /// Parser diagnostic.
        message: String,
    },
    /// The payload is JSON but does not match the feed shape.
    #[error("feed payload has an unexpected shape: {message}")]
    Shape {
        /// Description of the mismatch.
        message: String,
    },
}

impl FeedDecodeError {
    /// Build a syntax error.
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }

    /// Build a shape error.
    #[must_use]
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }

    fn from_json(error: &serde_json::Error) -> Self {
        match error.classify() {
            Category::Data => Self::shape(error.to_string()),
            Category::Syntax | Category::Eof | Category::Io => Self::syntax(error.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeedPayloadDto {
    items: Vec<FeedItemDto>,
}

#[derive(Debug, Deserialize)]
struct FeedItemDto {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl FeedPayloadDto {
    fn into_domain_items(self) -> Vec<FeedItem> {
        self.items
            .into_iter()
            .map(FeedItemDto::into_domain_item)
            .collect()
    }
}

impl FeedItemDto {
    fn into_domain_item(self) -> FeedItem {
        FeedItem::new(self.id, self.description, self.location, self.image)
    }
}

/// Decode a feed payload into items, preserving payload order.
///
/// The payload must be a JSON object with an `items` array. Each entry is an
/// object carrying a UUID `id` and an absolute `image` URL; `description` and
/// `location` are optional strings and may be `null`. Unknown keys are
/// ignored; a key repeated within one object is rejected.
///
/// # Errors
///
/// Returns [`FeedDecodeError::Syntax`] when the bytes are not JSON and
/// [`FeedDecodeError::Shape`] when the JSON does not match the feed shape,
/// including any single invalid entry.
///
/// # Examples
///
/// ```
/// use feed_loader::decode_feed_items;
///
/// let body = br#"{"items": [{
///     "id": "8f2b7a8e-36a6-4c8e-9a55-0d1f6b1f5c3e",
///     "location": "Porto",
///     "image": "https://cdn.example.test/porto.png"
/// }]}"#;
///
/// let items = decode_feed_items(body).expect("payload decodes");
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].location(), Some("Porto"));
/// ```
pub fn decode_feed_items(body: &[u8]) -> Result<Vec<FeedItem>, FeedDecodeError> {
    let root: Value =
        serde_json::from_slice(body).map_err(|error| FeedDecodeError::from_json(&error))?;
    ensure_objects(&root)?;
    let payload: FeedPayloadDto =
        serde_json::from_slice(body).map_err(|error| FeedDecodeError::from_json(&error))?;
    Ok(payload.into_domain_items())
}

fn ensure_objects(root: &Value) -> Result<(), FeedDecodeError> {
    let Value::Object(fields) = root else {
        return Err(FeedDecodeError::shape("top-level value must be an object"));
    };
    let misplaced = fields
        .get("items")
        .and_then(Value::as_array)
        .and_then(|entries| entries.iter().position(|entry| !entry.is_object()));
    match misplaced {
        Some(index) => Err(FeedDecodeError::shape(format!(
            "item {index} must be an object"
        ))),
        None => Ok(()),
    }
}
