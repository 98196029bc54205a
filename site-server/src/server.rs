use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::infrastructure::settings::Settings;
use crate::presentation::{AppState, routes};

pub(crate) async fn run(settings: &Settings, state: AppState) -> anyhow::Result<()> {
    let app = build_router(settings, state);

    let listener = TcpListener::bind(&settings.http_addr).await?;

    info!("site server listening on {}", settings.http_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) fn build_router(settings: &Settings, state: AppState) -> Router {
    routes::routes(state)
        .nest_service("/static", ServeDir::new(&settings.static_dir))
        .layer(TraceLayer::new_for_http())
}
