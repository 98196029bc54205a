use std::sync::Arc;

use crate::application::detail::DetailService;
use crate::application::listing::ListingService;
use crate::data::content_source::CmsContentSource;
use crate::infrastructure::settings::Settings;
use crate::presentation::cache::PageCache;

pub(crate) mod app_error;
pub(crate) mod cache;
pub(crate) mod handlers;
pub(crate) mod routes;
pub(crate) mod templates;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) settings: Arc<Settings>,
    pub(crate) listing: Arc<ListingService<CmsContentSource>>,
    pub(crate) detail: Arc<DetailService<CmsContentSource>>,
    pub(crate) cache: Arc<PageCache>,
}

impl AppState {
    pub(crate) fn new(settings: Settings, source: CmsContentSource) -> Self {
        let listing = Arc::new(ListingService::new(
            source.clone(),
            settings.listing_page_size,
        ));
        let detail = Arc::new(DetailService::new(source));

        Self {
            settings: Arc::new(settings),
            listing,
            detail,
            cache: Arc::new(PageCache::new()),
        }
    }
}
