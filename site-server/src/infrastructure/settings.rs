use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) cms_api_url: String,
    pub(crate) http_addr: String,
    pub(crate) log_level: String,
    pub(crate) listing_page_size: u32,
    pub(crate) listing_revalidate_secs: u64,
    pub(crate) detail_revalidate_secs: u64,
    pub(crate) comments_repo: String,
    pub(crate) comments_theme: String,
    pub(crate) static_dir: String,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let cms_api_url = get_required("CMS_API_URL").context("CMS_API_URL is required")?;

        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());

        let listing_page_size = parse_u32_env("LISTING_PAGE_SIZE", 20)?;
        // Listing pages revalidate daily, detail pages on a longer interval.
        let listing_revalidate_secs = parse_u64_env("LISTING_REVALIDATE_SECS", 60 * 60 * 24)?;
        let detail_revalidate_secs = parse_u64_env("DETAIL_REVALIDATE_SECS", 60 * 60 * 30)?;

        let comments_repo =
            std::env::var("COMMENTS_REPO").unwrap_or_else(|_| "example/blog-comments".to_string());
        let comments_theme =
            std::env::var("COMMENTS_THEME").unwrap_or_else(|_| "github-dark".to_string());
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Ok(Self {
            cms_api_url,
            http_addr,
            log_level,
            listing_page_size,
            listing_revalidate_secs,
            detail_revalidate_secs,
            comments_repo,
            comments_theme,
            static_dir,
        })
    }
}

fn get_required(key: &str) -> Result<String> {
    let value = std::env::var(key)?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn parse_u32_env(key: &str, default: u32) -> Result<u32> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u32>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
