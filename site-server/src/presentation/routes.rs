use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::{api, pages, preview};

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/post/{uid}", get(pages::post_detail))
        .route("/api/posts/next", get(api::next_posts))
        .route("/api/preview", get(preview::enter_preview))
        .route("/api/exit-preview", get(preview::exit_preview))
        .with_state(state)
}
