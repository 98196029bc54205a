use crate::error::CmsResult;
use crate::http::CmsClient;
use crate::models::{PostPage, PostSummary};

#[derive(Debug, Clone)]
/// Accumulated "load more" state over the paged post listing.
///
/// Holds the summaries fetched so far (append-only, query order preserved,
/// no de-duplication) and the cursor to the next page. When the cursor is
/// absent the result set is exhausted and the load-more control disappears.
pub struct PostFeed {
    posts: Vec<PostSummary>,
    next_page: Option<String>,
}

impl PostFeed {
    /// Seeds the feed from the first page of a query.
    pub fn new(page: PostPage) -> Self {
        Self {
            posts: page.results,
            next_page: page.next_page,
        }
    }

    /// Summaries accumulated so far, in fetch order.
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    /// Whether a further page exists.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Current cursor URL, if any.
    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    /// Fetches the next page and appends it to the feed.
    ///
    /// Returns `Ok(false)` without a request when no cursor is stored. A
    /// failed fetch is surfaced as an error and leaves the feed untouched.
    pub async fn load_more(&mut self, client: &CmsClient) -> CmsResult<bool> {
        let Some(cursor) = self.next_page.clone() else {
            return Ok(false);
        };

        let page = client.fetch_page(&cursor).await?;
        self.append_page(page);
        Ok(true)
    }

    /// Appends one fetched page: new summaries go to the tail, the cursor is
    /// replaced with the page's cursor (possibly none).
    pub fn append_page(&mut self, page: PostPage) {
        self.posts.extend(page.results);
        self.next_page = page.next_page;
    }
}
