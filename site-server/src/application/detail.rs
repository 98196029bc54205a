use cms_client::{AdjacentPost, CmsResult, ContentGroup, PostDocument};

use crate::application::render::{RenderedSection, render_sections};
use crate::data::content_source::ContentSource;

/// Words per minute used for the reading-time estimate.
const WORDS_PER_MINUTE: u32 = 250;

/// A post document resolved for rendering: adjacent navigation, reading
/// time and the content sections converted to HTML.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedPost {
    pub(crate) document: PostDocument,
    pub(crate) previous: Option<AdjacentPost>,
    pub(crate) next: Option<AdjacentPost>,
    pub(crate) reading_minutes: u32,
    pub(crate) sections: Vec<RenderedSection>,
}

/// Resolves a single post for the detail page.
pub(crate) struct DetailService<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> DetailService<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches the document and its neighbours by publish date.
    ///
    /// "Previous" is the latest post published strictly before this one,
    /// "next" the earliest published strictly after; ties are left to the
    /// backend's ordering. A missing uid propagates as `CmsError::NotFound`.
    pub(crate) async fn resolve(
        &self,
        uid: &str,
        snapshot_ref: Option<&str>,
    ) -> CmsResult<ResolvedPost> {
        let document = self.source.document(uid, snapshot_ref).await?;
        let previous = self
            .source
            .latest_before(document.published_at, snapshot_ref)
            .await?;
        let next = self
            .source
            .earliest_after(document.published_at, snapshot_ref)
            .await?;

        let reading_minutes = reading_minutes(&document.content);
        let sections = render_sections(&document.content);

        Ok(ResolvedPost {
            document,
            previous,
            next,
            reading_minutes,
            sections,
        })
    }
}

/// Estimated reading time in whole minutes.
///
/// Counts whitespace-separated words across every heading and body fragment
/// and divides by the reading speed, rounding up. Non-empty content always
/// yields at least one minute; empty content yields zero.
pub(crate) fn reading_minutes(content: &[ContentGroup]) -> u32 {
    let words: usize = content
        .iter()
        .flat_map(|group| {
            std::iter::once(group.heading.as_str())
                .chain(group.body.iter().map(|block| block.text.as_str()))
        })
        .map(|text| text.split_whitespace().count())
        .sum();

    (words as u32).div_ceil(WORDS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use cms_client::{
        AdjacentPost, CmsError, CmsResult, ContentGroup, PostDocument, PostPage, RichTextBlock,
    };

    use super::{DetailService, reading_minutes};
    use crate::data::content_source::ContentSource;

    #[derive(Clone)]
    struct FakeContentSource {
        document_result: Arc<Mutex<Option<PostDocument>>>,
        before_call: Arc<Mutex<Option<DateTime<Utc>>>>,
        after_call: Arc<Mutex<Option<DateTime<Utc>>>>,
        before_result: Arc<Mutex<Option<AdjacentPost>>>,
        after_result: Arc<Mutex<Option<AdjacentPost>>>,
    }

    impl FakeContentSource {
        fn new() -> Self {
            Self {
                document_result: Arc::new(Mutex::new(None)),
                before_call: Arc::new(Mutex::new(None)),
                after_call: Arc::new(Mutex::new(None)),
                before_result: Arc::new(Mutex::new(None)),
                after_result: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl ContentSource for FakeContentSource {
        async fn first_page(
            &self,
            _page_size: u32,
            _snapshot_ref: Option<&str>,
        ) -> CmsResult<PostPage> {
            Ok(PostPage {
                results: vec![],
                next_page: None,
            })
        }

        async fn page_at(&self, _cursor: &str) -> CmsResult<PostPage> {
            Ok(PostPage {
                results: vec![],
                next_page: None,
            })
        }

        async fn document(
            &self,
            _uid: &str,
            _snapshot_ref: Option<&str>,
        ) -> CmsResult<PostDocument> {
            self.document_result
                .lock()
                .expect("document_result mutex poisoned")
                .clone()
                .ok_or(CmsError::NotFound)
        }

        async fn latest_before(
            &self,
            published_at: DateTime<Utc>,
            _snapshot_ref: Option<&str>,
        ) -> CmsResult<Option<AdjacentPost>> {
            *self
                .before_call
                .lock()
                .expect("before_call mutex poisoned") = Some(published_at);
            Ok(self
                .before_result
                .lock()
                .expect("before_result mutex poisoned")
                .clone())
        }

        async fn earliest_after(
            &self,
            published_at: DateTime<Utc>,
            _snapshot_ref: Option<&str>,
        ) -> CmsResult<Option<AdjacentPost>> {
            *self.after_call.lock().expect("after_call mutex poisoned") = Some(published_at);
            Ok(self
                .after_result
                .lock()
                .expect("after_result mutex poisoned")
                .clone())
        }
    }

    fn document(uid: &str, published_secs: i64, content: Vec<ContentGroup>) -> PostDocument {
        PostDocument {
            uid: uid.to_string(),
            published_at: Utc
                .timestamp_opt(published_secs, 0)
                .single()
                .expect("valid ts"),
            edited_at: Utc
                .timestamp_opt(published_secs + 60, 0)
                .single()
                .expect("valid ts"),
            title: "title".to_string(),
            subtitle: "subtitle".to_string(),
            banner_url: None,
            author: "author".to_string(),
            content,
        }
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn group(heading: &str, body_words: usize) -> ContentGroup {
        ContentGroup {
            heading: heading.to_string(),
            body: vec![RichTextBlock {
                text: words(body_words),
            }],
        }
    }

    #[tokio::test]
    async fn resolve_queries_neighbours_at_the_publish_timestamp() {
        let source = FakeContentSource::new();
        let published = Utc.timestamp_opt(5_000, 0).single().expect("valid ts");
        *source
            .document_result
            .lock()
            .expect("document_result mutex poisoned") =
            Some(document("current", published.timestamp(), vec![]));
        *source
            .before_result
            .lock()
            .expect("before_result mutex poisoned") = Some(AdjacentPost {
            uid: "older".to_string(),
            title: "older title".to_string(),
        });

        let service = DetailService::new(source.clone());
        let resolved = service
            .resolve("current", None)
            .await
            .expect("resolve must succeed");

        assert_eq!(resolved.document.uid, "current");
        assert_eq!(resolved.previous.as_ref().map(|p| p.uid.as_str()), Some("older"));
        assert!(resolved.next.is_none());

        // Both neighbour queries pivot on the post's own publish timestamp.
        assert_eq!(
            *source
                .before_call
                .lock()
                .expect("before_call mutex poisoned"),
            Some(published)
        );
        assert_eq!(
            *source.after_call.lock().expect("after_call mutex poisoned"),
            Some(published)
        );
    }

    #[tokio::test]
    async fn resolve_propagates_not_found() {
        let source = FakeContentSource::new();
        let service = DetailService::new(source);

        let err = service
            .resolve("missing", None)
            .await
            .expect_err("missing uid must fail");
        assert!(matches!(err, CmsError::NotFound));
    }

    #[test]
    fn reading_time_counts_headings_and_bodies() {
        // 2 heading words + 498 body words = 500 words -> exactly 2 minutes.
        let content = vec![group("two words", 498)];
        assert_eq!(reading_minutes(&content), 2);
    }

    #[test]
    fn reading_time_rounds_up() {
        let content = vec![group("h", 250)]; // 251 words
        assert_eq!(reading_minutes(&content), 2);
    }

    #[test]
    fn reading_time_is_at_least_one_minute_for_non_empty_content() {
        let content = vec![group("tiny", 2)];
        assert_eq!(reading_minutes(&content), 1);
    }

    #[test]
    fn reading_time_is_zero_for_empty_content() {
        assert_eq!(reading_minutes(&[]), 0);
    }

    #[test]
    fn reading_time_is_monotonic_in_content_length() {
        let mut last = 0;
        for body_words in [0, 10, 249, 250, 251, 600, 1_200] {
            let minutes = reading_minutes(&[group("heading", body_words)]);
            assert!(minutes >= last, "reading time must not decrease");
            last = minutes;
        }
    }
}
