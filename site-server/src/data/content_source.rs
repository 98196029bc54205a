use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cms_client::{AdjacentPost, CmsClient, CmsResult, PostDocument, PostPage, QueryOptions};

/// Seam between the page-generation services and the content API.
///
/// The production implementation delegates to `cms_client::CmsClient`; tests
/// substitute a fake.
#[async_trait]
pub(crate) trait ContentSource: Send + Sync {
    /// First listing page, ordered by last publication date descending.
    async fn first_page(&self, page_size: u32, snapshot_ref: Option<&str>)
    -> CmsResult<PostPage>;

    /// Page behind an opaque cursor URL.
    async fn page_at(&self, cursor: &str) -> CmsResult<PostPage>;

    /// Full document by uid.
    async fn document(&self, uid: &str, snapshot_ref: Option<&str>) -> CmsResult<PostDocument>;

    /// Latest post published strictly before the timestamp.
    async fn latest_before(
        &self,
        published_at: DateTime<Utc>,
        snapshot_ref: Option<&str>,
    ) -> CmsResult<Option<AdjacentPost>>;

    /// Earliest post published strictly after the timestamp.
    async fn earliest_after(
        &self,
        published_at: DateTime<Utc>,
        snapshot_ref: Option<&str>,
    ) -> CmsResult<Option<AdjacentPost>>;
}

#[derive(Debug, Clone)]
pub(crate) struct CmsContentSource {
    client: CmsClient,
}

impl CmsContentSource {
    pub(crate) fn new(client: CmsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for CmsContentSource {
    async fn first_page(
        &self,
        page_size: u32,
        snapshot_ref: Option<&str>,
    ) -> CmsResult<PostPage> {
        let opts =
            QueryOptions::published(page_size).with_ref(snapshot_ref.map(str::to_string));
        self.client.query_posts(&opts).await
    }

    async fn page_at(&self, cursor: &str) -> CmsResult<PostPage> {
        self.client.fetch_page(cursor).await
    }

    async fn document(&self, uid: &str, snapshot_ref: Option<&str>) -> CmsResult<PostDocument> {
        self.client.get_by_uid(uid, snapshot_ref).await
    }

    async fn latest_before(
        &self,
        published_at: DateTime<Utc>,
        snapshot_ref: Option<&str>,
    ) -> CmsResult<Option<AdjacentPost>> {
        self.client.first_before(published_at, snapshot_ref).await
    }

    async fn earliest_after(
        &self,
        published_at: DateTime<Utc>,
        snapshot_ref: Option<&str>,
    ) -> CmsResult<Option<AdjacentPost>> {
        self.client.first_after(published_at, snapshot_ref).await
    }
}
