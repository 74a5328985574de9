//! Core data types for the in-memory feed.

use std::fmt;

/// Label given to freshly submitted posts.
pub const NOW_LABEL: &str = "now";

// ============================================================================
// Identifiers
// ============================================================================

/// Unique post identifier, assigned from a monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Image References
// ============================================================================

/// Prefix shared by all embedded image references.
const DATA_URI_PREFIX: &str = "data:";

/// Prefix of the static placeholder images used by seed content.
const PLACEHOLDER_PREFIX: &str = "/api/placeholder/";

/// Reference to an image: either a placeholder path or an embedded `data:` URI.
///
/// The reference is opaque to the feed store. Only the renderer looks inside
/// it, to produce a short description for the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Placeholder reference of the given pixel size.
    pub fn placeholder(width: u32, height: u32) -> Self {
        Self(format!("{}{}/{}", PLACEHOLDER_PREFIX, width, height))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_data_uri(&self) -> bool {
        self.0.starts_with(DATA_URI_PREFIX)
    }

    /// MIME type of an embedded image, if this is a `data:` URI.
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix(DATA_URI_PREFIX)?;
        let end = rest.find([';', ','])?;
        Some(&rest[..end])
    }

    /// Approximate decoded size of an embedded image in bytes.
    ///
    /// Derived from the base64 payload length, so no decoding is needed.
    pub fn embedded_size(&self) -> Option<usize> {
        if !self.is_data_uri() {
            return None;
        }
        let (_, payload) = self.0.split_once(',')?;
        let padding = payload.bytes().rev().take_while(|&b| b == b'=').count();
        Some((payload.len() / 4 * 3).saturating_sub(padding))
    }

    /// Short, human-readable label for terminal display.
    pub fn describe(&self) -> String {
        if let Some(dims) = self.0.strip_prefix(PLACEHOLDER_PREFIX) {
            return format!("image {}", dims.replace('/', "x"));
        }
        match (self.mime_type(), self.embedded_size()) {
            (Some(mime), Some(size)) => format!("{} · {}", mime, format_size(size)),
            _ => "image".to_string(),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Author block shown on a post card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub avatar: ImageRef,
}

/// A single feed entry.
///
/// `likes` and `liked` are private so the only way to change them is
/// [`Post::toggle_like`], which keeps the pair consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub image: ImageRef,
    pub caption: String,
    likes: u32,
    /// Never mutated by the UI.
    pub comments: u32,
    liked: bool,
    pub tags: Vec<String>,
    /// Free-text relative label ("2h", "now"), not a clock value.
    pub timestamp: String,
}

impl Post {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PostId,
        author: Author,
        image: ImageRef,
        caption: impl Into<String>,
        likes: u32,
        comments: u32,
        liked: bool,
        tags: Vec<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author,
            image,
            caption: caption.into(),
            likes,
            comments,
            liked,
            tags,
            timestamp: timestamp.into(),
        }
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Flip the liked flag and move the counter by one in the same direction.
    ///
    /// Returns the new liked state.
    pub fn toggle_like(&mut self) -> bool {
        if self.liked {
            self.liked = false;
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.liked = true;
            self.likes = self.likes.saturating_add(1);
        }
        self.liked
    }
}

/// The current user. Static for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub avatar: ImageRef,
    pub followers: u32,
    pub following: u32,
}

impl UserProfile {
    pub fn as_author(&self) -> Author {
        Author {
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// In-progress post being composed in the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub image: Option<ImageRef>,
    pub caption: String,
    /// Raw comma-separated tag text, split only on submit.
    pub tags: String,
}

impl UploadDraft {
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.caption.is_empty() && self.tags.is_empty()
    }

    /// Both an image and a non-empty caption are required to publish.
    ///
    /// Whitespace-only captions count as non-empty.
    pub fn is_ready(&self) -> bool {
        self.image.is_some() && !self.caption.is_empty()
    }
}

// ============================================================================
// Tabs
// ============================================================================

/// The two mutually exclusive feed views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    ForYou,
    Following,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::ForYou, Tab::Following];

    pub fn title(self) -> &'static str {
        match self {
            Self::ForYou => "For You",
            Self::Following => "Following",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::ForYou => 0,
            Self::Following => 1,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::ForYou => Self::Following,
            Self::Following => Self::ForYou,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(likes: u32, liked: bool) -> Post {
        Post::new(
            PostId(1),
            Author {
                name: "Test".to_string(),
                avatar: ImageRef::placeholder(40, 40),
            },
            ImageRef::placeholder(400, 300),
            "caption",
            likes,
            0,
            liked,
            Vec::new(),
            "1h",
        )
    }

    #[test]
    fn toggle_like_increments_when_unliked() {
        let mut p = post(5, false);
        assert!(p.toggle_like());
        assert_eq!(p.likes(), 6);
    }

    #[test]
    fn toggle_like_decrements_when_liked() {
        let mut p = post(5, true);
        assert!(!p.toggle_like());
        assert_eq!(p.likes(), 4);
    }

    #[test]
    fn toggle_like_saturates_at_zero() {
        let mut p = post(0, true);
        p.toggle_like();
        assert_eq!(p.likes(), 0);
        assert!(!p.is_liked());
    }

    #[test]
    fn placeholder_description() {
        assert_eq!(ImageRef::placeholder(400, 300).describe(), "image 400x300");
    }

    #[test]
    fn data_uri_mime_and_size() {
        // "hello!" is 6 bytes -> 8 base64 chars, no padding
        let img = ImageRef::new("data:image/png;base64,aGVsbG8h");
        assert!(img.is_data_uri());
        assert_eq!(img.mime_type(), Some("image/png"));
        assert_eq!(img.embedded_size(), Some(6));
        assert_eq!(img.describe(), "image/png · 6 B");
    }

    #[test]
    fn embedded_size_accounts_for_padding() {
        // "hi" -> "aGk="
        let img = ImageRef::new("data:image/gif;base64,aGk=");
        assert_eq!(img.embedded_size(), Some(2));
    }

    #[test]
    fn placeholder_has_no_mime() {
        let img = ImageRef::placeholder(40, 40);
        assert_eq!(img.mime_type(), None);
        assert_eq!(img.embedded_size(), None);
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn draft_readiness() {
        let mut draft = UploadDraft::default();
        assert!(draft.is_empty());
        assert!(!draft.is_ready());

        draft.caption = " ".to_string();
        assert!(!draft.is_ready());

        draft.image = Some(ImageRef::placeholder(1, 1));
        assert!(draft.is_ready());
    }

    #[test]
    fn tab_cycles() {
        assert_eq!(Tab::default(), Tab::ForYou);
        assert_eq!(Tab::ForYou.next(), Tab::Following);
        assert_eq!(Tab::Following.next(), Tab::ForYou);
        assert_eq!(Tab::Following.index(), 1);
    }
}
