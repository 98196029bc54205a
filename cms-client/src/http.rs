use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{CmsError, CmsResult};
use crate::models::{
    AdjacentPost, ContentGroup, PostDocument, PostPage, PostSummary, QueryOptions, RichTextBlock,
};

/// Document type queried on every listing call.
const DOCUMENT_TYPE: &str = "posts";

/// Orderings expression for listings: newest edits first.
const LISTING_ORDERINGS: &str = "[document.last_publication_date desc]";

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageDto {
    results: Vec<DocumentDto>,
    next_page: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentDto {
    uid: String,
    first_publication_date: DateTime<Utc>,
    last_publication_date: DateTime<Utc>,
    data: DocumentDataDto,
}

#[derive(Debug, Deserialize)]
struct DocumentDataDto {
    title: String,
    #[serde(default)]
    subtitle: String,
    author: String,
    banner: Option<BannerDto>,
    #[serde(default)]
    content: Vec<ContentGroupDto>,
}

#[derive(Debug, Deserialize)]
struct BannerDto {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ContentGroupDto {
    heading: String,
    #[serde(default)]
    body: Vec<RichTextBlockDto>,
}

#[derive(Debug, Deserialize)]
struct RichTextBlockDto {
    text: String,
}

impl From<DocumentDto> for PostSummary {
    fn from(value: DocumentDto) -> Self {
        Self {
            uid: value.uid,
            published_at: value.first_publication_date,
            title: value.data.title,
            subtitle: value.data.subtitle,
            author: value.data.author,
        }
    }
}

impl From<DocumentDto> for PostDocument {
    fn from(value: DocumentDto) -> Self {
        Self {
            uid: value.uid,
            published_at: value.first_publication_date,
            edited_at: value.last_publication_date,
            title: value.data.title,
            subtitle: value.data.subtitle,
            banner_url: value.data.banner.map(|banner| banner.url),
            author: value.data.author,
            content: value
                .data
                .content
                .into_iter()
                .map(ContentGroup::from)
                .collect(),
        }
    }
}

impl From<DocumentDto> for AdjacentPost {
    fn from(value: DocumentDto) -> Self {
        Self {
            uid: value.uid,
            title: value.data.title,
        }
    }
}

impl From<ContentGroupDto> for ContentGroup {
    fn from(value: ContentGroupDto) -> Self {
        Self {
            heading: value.heading,
            body: value
                .body
                .into_iter()
                .map(|block| RichTextBlock { text: block.text })
                .collect(),
        }
    }
}

impl From<PageDto> for PostPage {
    fn from(value: PageDto) -> Self {
        Self {
            results: value.results.into_iter().map(PostSummary::from).collect(),
            next_page: value.next_page,
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP client for the content API.
pub struct CmsClient {
    base_url: String,
    client: Client,
}

impl CmsClient {
    /// Creates a client with the CMS base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> CmsError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body
                .error
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        CmsError::from_http_status(status, Some(message))
    }

    /// GET helper: sends the request and decodes a JSON body.
    async fn get_json<T>(&self, url: &str, query: &[(&str, String)]) -> CmsResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(CmsError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response.json::<T>().await.map_err(CmsError::from_reqwest)
    }

    /// Returns the first page of posts, ordered by last publication date
    /// descending.
    pub async fn query_posts(&self, opts: &QueryOptions) -> CmsResult<PostPage> {
        let url = self.endpoint("/documents");
        let mut query = vec![
            ("type", DOCUMENT_TYPE.to_string()),
            ("page_size", opts.page_size.to_string()),
            ("orderings", LISTING_ORDERINGS.to_string()),
        ];
        if let Some(snapshot_ref) = &opts.snapshot_ref {
            query.push(("ref", snapshot_ref.clone()));
        }

        let dto: PageDto = self.get_json(&url, &query).await?;
        Ok(dto.into())
    }

    /// Follows an opaque `next_page` cursor URL and decodes the page.
    ///
    /// The cursor already carries the query, snapshot ref included, so it is
    /// fetched as-is.
    pub async fn fetch_page(&self, url: &str) -> CmsResult<PostPage> {
        let dto: PageDto = self.get_json(url, &[]).await?;
        Ok(dto.into())
    }

    /// Returns the full document for a uid, or `CmsError::NotFound`.
    pub async fn get_by_uid(
        &self,
        uid: &str,
        snapshot_ref: Option<&str>,
    ) -> CmsResult<PostDocument> {
        let url = self.endpoint(&format!("/documents/{uid}"));
        let mut query = Vec::new();
        if let Some(snapshot_ref) = snapshot_ref {
            query.push(("ref", snapshot_ref.to_string()));
        }

        let dto: DocumentDto = self.get_json(&url, &query).await?;
        Ok(dto.into())
    }

    /// Latest post published strictly before `published_at`, if any.
    pub async fn first_before(
        &self,
        published_at: DateTime<Utc>,
        snapshot_ref: Option<&str>,
    ) -> CmsResult<Option<AdjacentPost>> {
        self.first_adjacent(
            ("published_before", published_at),
            "[document.first_publication_date desc]",
            snapshot_ref,
        )
        .await
    }

    /// Earliest post published strictly after `published_at`, if any.
    pub async fn first_after(
        &self,
        published_at: DateTime<Utc>,
        snapshot_ref: Option<&str>,
    ) -> CmsResult<Option<AdjacentPost>> {
        self.first_adjacent(
            ("published_after", published_at),
            "[document.first_publication_date]",
            snapshot_ref,
        )
        .await
    }

    async fn first_adjacent(
        &self,
        predicate: (&str, DateTime<Utc>),
        orderings: &str,
        snapshot_ref: Option<&str>,
    ) -> CmsResult<Option<AdjacentPost>> {
        let url = self.endpoint("/documents");
        let mut query = vec![
            ("type", DOCUMENT_TYPE.to_string()),
            ("page_size", "1".to_string()),
            ("orderings", orderings.to_string()),
            (predicate.0, predicate.1.to_rfc3339()),
        ];
        if let Some(snapshot_ref) = snapshot_ref {
            query.push(("ref", snapshot_ref.to_string()));
        }

        let dto: PageDto = self.get_json(&url, &query).await?;
        Ok(dto.results.into_iter().next().map(AdjacentPost::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_document(uid: &str, published_secs: i64) -> DocumentDto {
        DocumentDto {
            uid: uid.to_string(),
            first_publication_date: Utc
                .timestamp_opt(published_secs, 0)
                .single()
                .expect("valid ts"),
            last_publication_date: Utc
                .timestamp_opt(published_secs + 60, 0)
                .single()
                .expect("valid ts"),
            data: DocumentDataDto {
                title: "Title".to_string(),
                subtitle: "Subtitle".to_string(),
                author: "Author".to_string(),
                banner: Some(BannerDto {
                    url: "https://images.example/banner.png".to_string(),
                }),
                content: vec![ContentGroupDto {
                    heading: "Heading".to_string(),
                    body: vec![RichTextBlockDto {
                        text: "body text".to_string(),
                    }],
                }],
            },
        }
    }

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = CmsClient::new("https://cms.example/api/v2/");
        let full = client.endpoint("/documents");
        assert_eq!(full, "https://cms.example/api/v2/documents");
    }

    #[test]
    fn document_maps_to_summary() {
        let summary = PostSummary::from(sample_document("my-post", 100));
        assert_eq!(summary.uid, "my-post");
        assert_eq!(summary.title, "Title");
        assert_eq!(summary.subtitle, "Subtitle");
        assert_eq!(summary.author, "Author");
        assert_eq!(summary.published_at.timestamp(), 100);
    }

    #[test]
    fn document_maps_to_detail_with_content() {
        let document = PostDocument::from(sample_document("my-post", 100));
        assert_eq!(document.uid, "my-post");
        assert_eq!(document.published_at.timestamp(), 100);
        assert_eq!(document.edited_at.timestamp(), 160);
        assert_eq!(
            document.banner_url.as_deref(),
            Some("https://images.example/banner.png")
        );
        assert_eq!(document.content.len(), 1);
        assert_eq!(document.content[0].heading, "Heading");
        assert_eq!(document.content[0].body[0].text, "body text");
    }

    #[test]
    fn page_keeps_order_and_cursor() {
        let dto = PageDto {
            results: vec![sample_document("a", 100), sample_document("b", 50)],
            next_page: Some("https://cms.example/api/v2/documents?page=2".to_string()),
        };

        let page = PostPage::from(dto);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].uid, "a");
        assert_eq!(page.results[1].uid, "b");
        assert!(page.next_page.is_some());
    }

    #[test]
    fn missing_subtitle_and_content_default_to_empty() {
        let raw = r#"{
            "uid": "bare",
            "first_publication_date": "2023-03-15T14:30:00Z",
            "last_publication_date": "2023-03-15T14:30:00Z",
            "data": { "title": "Bare", "author": "A", "banner": null }
        }"#;

        let dto: DocumentDto = serde_json::from_str(raw).expect("document must decode");
        let document = PostDocument::from(dto);
        assert_eq!(document.subtitle, "");
        assert!(document.banner_url.is_none());
        assert!(document.content.is_empty());
    }
}
