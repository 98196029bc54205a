use std::time::Duration;

use askama::Template;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Html,
};
use cms_client::PostSummary;

use crate::helpers::date;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::handlers::preview::preview_ref_from_headers;
use crate::presentation::templates::{HomeTemplate, NavLink, PostCard, PostTemplate, SectionView};

const HOME_CACHE_KEY: &str = "home";

pub(crate) async fn home(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Html<String>> {
    let preview_ref = preview_ref_from_headers(&headers);
    let preview = preview_ref.is_some();

    if !preview {
        if let Some(html) = state.cache.get(HOME_CACHE_KEY) {
            return Ok(Html(html));
        }
    }

    let feed = state.listing.first_page(preview_ref.as_deref()).await?;
    let template = HomeTemplate {
        posts: feed.posts().iter().map(post_card).collect(),
        next_page: feed.next_page().map(str::to_string),
        preview,
    };
    let html = template.render().map_err(anyhow::Error::from)?;

    if !preview {
        state.cache.put(
            HOME_CACHE_KEY,
            html.clone(),
            Duration::from_secs(state.settings.listing_revalidate_secs),
        );
    }

    Ok(Html(html))
}

pub(crate) async fn post_detail(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    headers: HeaderMap,
) -> AppResult<Html<String>> {
    let preview_ref = preview_ref_from_headers(&headers);
    let preview = preview_ref.is_some();
    let cache_key = format!("post/{uid}");

    if !preview {
        if let Some(html) = state.cache.get(&cache_key) {
            return Ok(Html(html));
        }
    }

    let resolved = state.detail.resolve(&uid, preview_ref.as_deref()).await?;
    let template = PostTemplate {
        title: resolved.document.title,
        author: resolved.document.author,
        published: date::short_date(&resolved.document.published_at),
        edited_date: date::short_date(&resolved.document.edited_at),
        edited_time: date::hour_minute(&resolved.document.edited_at),
        reading_minutes: resolved.reading_minutes,
        banner_url: resolved.document.banner_url,
        sections: resolved
            .sections
            .into_iter()
            .map(|section| SectionView {
                heading: section.heading,
                body: section.body_html,
            })
            .collect(),
        previous: resolved.previous.map(|post| NavLink {
            uid: post.uid,
            title: post.title,
        }),
        next: resolved.next.map(|post| NavLink {
            uid: post.uid,
            title: post.title,
        }),
        preview,
        comments_repo: state.settings.comments_repo.clone(),
        comments_theme: state.settings.comments_theme.clone(),
    };
    let html = template.render().map_err(anyhow::Error::from)?;

    if !preview {
        state.cache.put(
            cache_key,
            html.clone(),
            Duration::from_secs(state.settings.detail_revalidate_secs),
        );
    }

    Ok(Html(html))
}

fn post_card(summary: &PostSummary) -> PostCard {
    PostCard {
        uid: summary.uid.clone(),
        title: summary.title.clone(),
        subtitle: summary.subtitle.clone(),
        author: summary.author.clone(),
        published: date::short_date(&summary.published_at),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use cms_client::PostSummary;

    use super::post_card;

    #[test]
    fn post_card_formats_the_publish_date() {
        let summary = PostSummary {
            uid: "my-post".to_string(),
            published_at: Utc
                .with_ymd_and_hms(2023, 3, 15, 14, 30, 0)
                .single()
                .expect("valid ts"),
            title: "Title".to_string(),
            subtitle: "Subtitle".to_string(),
            author: "Author".to_string(),
        };

        let card = post_card(&summary);
        assert_eq!(card.uid, "my-post");
        assert_eq!(card.published, "15 mar 2023");
    }
}
