//! Preview mode: two endpoints toggling the preview cookie.
//!
//! Entering preview stores the draft snapshot ref in a cookie; the page
//! handlers read it back and pass it to the content API so draft content is
//! served instead of the published snapshot.

use axum::{
    extract::Query,
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use crate::presentation::app_error::{AppError, AppResult};

pub(crate) const PREVIEW_COOKIE: &str = "preview_ref";

#[derive(Debug, Deserialize)]
pub(crate) struct PreviewQuery {
    /// Draft snapshot ref handed over by the CMS preview toolbar.
    token: String,
    /// Optional post-activation destination, restricted to local paths.
    redirect: Option<String>,
}

pub(crate) async fn enter_preview(
    Query(query): Query<PreviewQuery>,
) -> AppResult<impl IntoResponse> {
    if !is_valid_token(&query.token) {
        return Err(AppError::BadRequest("invalid preview token".to_string()));
    }

    let cookie = format!(
        "{PREVIEW_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        query.token
    );
    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| AppError::BadRequest("invalid preview token".to_string()))?,
    );

    let target = local_redirect(query.redirect.as_deref());
    Ok((headers, Redirect::to(&target)))
}

pub(crate) async fn exit_preview() -> AppResult<impl IntoResponse> {
    let cookie = format!("{PREVIEW_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax");
    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("invalid clear-cookie header")))?,
    );

    Ok((headers, Redirect::to("/")))
}

/// Extracts the preview snapshot ref from the request cookies, if present.
pub(crate) fn preview_ref_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            pair.strip_prefix(PREVIEW_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(str::to_string)
        .filter(|value| !value.is_empty())
}

/// Tokens end up in a cookie value; reject anything that cannot live there.
fn is_valid_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_graphic() && c != ';' && c != ',')
}

/// Only local paths are accepted as redirect targets.
fn local_redirect(redirect: Option<&str>) -> String {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => "/".to_string(),
    }
}
