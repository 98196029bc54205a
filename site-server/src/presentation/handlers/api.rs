//! JSON endpoint behind the listing page's load-more control.

use axum::{
    Json,
    extract::{Query, State},
};
use cms_client::PostPage;
use serde::{Deserialize, Serialize};

use crate::helpers::date;
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub(crate) struct NextPageQuery {
    cursor: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct NextPageDto {
    results: Vec<PostCardDto>,
    next_page: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostCardDto {
    uid: String,
    title: String,
    subtitle: String,
    author: String,
    published: String,
}

impl From<PostPage> for NextPageDto {
    fn from(page: PostPage) -> Self {
        Self {
            results: page
                .results
                .into_iter()
                .map(|summary| PostCardDto {
                    published: date::short_date(&summary.published_at),
                    uid: summary.uid,
                    title: summary.title,
                    subtitle: summary.subtitle,
                    author: summary.author,
                })
                .collect(),
            next_page: page.next_page,
        }
    }
}

pub(crate) async fn next_posts(
    State(state): State<AppState>,
    Query(query): Query<NextPageQuery>,
) -> AppResult<Json<NextPageDto>> {
    if !cursor_is_trusted(&query.cursor, &state.settings.cms_api_url) {
        return Err(AppError::BadRequest(
            "cursor does not point at the content api".to_string(),
        ));
    }

    let page = state.listing.next_page(&query.cursor).await?;
    Ok(Json(NextPageDto::from(page)))
}

/// The cursor is an opaque URL minted by the CMS; the server only follows it
/// when it stays under the configured API base.
fn cursor_is_trusted(cursor: &str, api_base: &str) -> bool {
    cursor.starts_with(api_base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use cms_client::{PostPage, PostSummary};

    use super::{NextPageDto, cursor_is_trusted};

    #[test]
    fn cursors_outside_the_api_base_are_rejected() {
        let base = "https://cms.example/api/v2/";
        assert!(cursor_is_trusted(
            "https://cms.example/api/v2/documents?page=2",
            base
        ));
        assert!(!cursor_is_trusted("https://evil.example/documents", base));
        assert!(!cursor_is_trusted("", base));
    }

    #[test]
    fn page_payload_keeps_cursor_and_formats_dates() {
        let page = PostPage {
            results: vec![PostSummary {
                uid: "my-post".to_string(),
                published_at: Utc
                    .with_ymd_and_hms(2023, 3, 15, 14, 30, 0)
                    .single()
                    .expect("valid ts"),
                title: "Title".to_string(),
                subtitle: "Subtitle".to_string(),
                author: "Author".to_string(),
            }],
            next_page: Some("https://cms.example/api/v2/documents?page=3".to_string()),
        };

        let dto = NextPageDto::from(page);
        let value = serde_json::to_value(&dto).expect("dto must serialize");
        assert_eq!(value["results"][0]["uid"], "my-post");
        assert_eq!(value["results"][0]["published"], "15 mar 2023");
        assert_eq!(
            value["next_page"],
            "https://cms.example/api/v2/documents?page=3"
        );
    }
}
