use cms_client::{CmsResult, PostFeed, PostPage};

use crate::data::content_source::ContentSource;

/// Builds the listing page data and serves the load-more pagination.
pub(crate) struct ListingService<S: ContentSource> {
    source: S,
    page_size: u32,
}

impl<S: ContentSource> ListingService<S> {
    pub(crate) fn new(source: S, page_size: u32) -> Self {
        Self { source, page_size }
    }

    /// First page of the feed; the caller renders the load-more control when
    /// the feed still has a cursor.
    pub(crate) async fn first_page(&self, snapshot_ref: Option<&str>) -> CmsResult<PostFeed> {
        let page = self.source.first_page(self.page_size, snapshot_ref).await?;
        Ok(PostFeed::new(page))
    }

    /// One further page behind a cursor, for the load-more endpoint.
    pub(crate) async fn next_page(&self, cursor: &str) -> CmsResult<PostPage> {
        self.source.page_at(cursor).await
    }
}
