//! Feed item value type.

use url::Url;
use uuid::Uuid;

/// One entry of a remote feed.
///
/// Items are immutable once built and compare structurally. The image URL is
/// always present; description and location are optional.
///
/// # Examples
///
/// ```
/// use feed_loader::FeedItem;
/// use url::Url;
/// use uuid::Uuid;
///
/// let image_url = Url::parse("https://cdn.example.test/a.png").expect("valid url");
/// let item = FeedItem::new(Uuid::nil(), None, Some("Lisbon".to_owned()), image_url);
///
/// assert_eq!(item.location(), Some("Lisbon"));
/// assert!(item.description().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image_url: Url,
}

impl FeedItem {
    /// Build an item from its parts.
    #[must_use]
    pub const fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }

    /// Item identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Optional free-text description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Optional free-text location.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Image URL for the item.
    #[must_use]
    pub const fn image_url(&self) -> &Url {
        &self.image_url
    }
}
