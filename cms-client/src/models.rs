use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Reduced post shape used on listing pages.
pub struct PostSummary {
    /// Unique document identifier.
    pub uid: String,
    /// First publication timestamp (UTC).
    pub published_at: DateTime<Utc>,
    /// Post title.
    pub title: String,
    /// Post subtitle.
    pub subtitle: String,
    /// Author display name.
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One rich-text fragment of a content section body.
pub struct RichTextBlock {
    /// Rich-text source for the fragment; rendered to markup downstream.
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A content section: heading plus an ordered list of body fragments.
pub struct ContentGroup {
    /// Section heading.
    pub heading: String,
    /// Body fragments, in document order.
    pub body: Vec<RichTextBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Full post document as used on detail pages.
pub struct PostDocument {
    /// Unique document identifier.
    pub uid: String,
    /// First publication timestamp (UTC).
    pub published_at: DateTime<Utc>,
    /// Last edit timestamp (UTC).
    pub edited_at: DateTime<Utc>,
    /// Post title.
    pub title: String,
    /// Post subtitle.
    pub subtitle: String,
    /// Banner image URL, when the post has one.
    pub banner_url: Option<String>,
    /// Author display name.
    pub author: String,
    /// Ordered content sections.
    pub content: Vec<ContentGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One page of post summaries plus the cursor to the next page.
///
/// `next_page` is an opaque URL minted by the CMS; `None` means the result
/// set is exhausted.
pub struct PostPage {
    /// Summaries on this page, in query order.
    pub results: Vec<PostSummary>,
    /// Cursor URL for the next page, if more results exist.
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Lightweight reference to a neighbouring post (previous/next navigation).
pub struct AdjacentPost {
    /// Unique document identifier.
    pub uid: String,
    /// Post title.
    pub title: String,
}

#[derive(Debug, Clone)]
/// Options for a paged post query.
pub struct QueryOptions {
    /// Number of documents per page.
    pub page_size: u32,
    /// Content snapshot ref; `None` reads the published snapshot.
    pub snapshot_ref: Option<String>,
}

impl QueryOptions {
    /// Query options for the published snapshot with the given page size.
    pub fn published(page_size: u32) -> Self {
        Self {
            page_size,
            snapshot_ref: None,
        }
    }

    /// Sets the snapshot ref (preview mode), when one is present.
    pub fn with_ref(mut self, snapshot_ref: Option<String>) -> Self {
        self.snapshot_ref = snapshot_ref;
        self
    }
}
