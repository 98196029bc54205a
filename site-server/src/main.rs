use anyhow::Result;
use cms_client::CmsClient;

mod application;
mod data;
mod helpers;
mod infrastructure;
mod presentation;
mod server;

use data::content_source::CmsContentSource;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let client = CmsClient::new(settings.cms_api_url.clone());
    let source = CmsContentSource::new(client);
    let state = AppState::new(settings.clone(), source);

    server::run(&settings, state).await
}
