use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// In-memory cache of rendered pages, keyed by route.
///
/// Stands in for the hosting framework's revalidation policy: a rendered
/// page is served as-is until its interval elapses, then the next request
/// re-renders it. Preview requests never touch the cache.
#[derive(Debug, Default)]
pub(crate) struct PageCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

#[derive(Debug)]
struct CacheEntry {
    rendered_at: Instant,
    ttl: Duration,
    html: String,
}

impl PageCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the cached page while it is still fresh.
    pub(crate) fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().expect("page cache mutex poisoned");
        match entries.get(key) {
            Some(entry) if entry.rendered_at.elapsed() < entry.ttl => Some(entry.html.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores a rendered page with its revalidation interval.
    pub(crate) fn put(&self, key: impl Into<String>, html: String, ttl: Duration) {
        let mut entries = self.entries.lock().expect("page cache mutex poisoned");
        entries.insert(
            key.into(),
            CacheEntry {
                rendered_at: Instant::now(),
                ttl,
                html,
            },
        );
    }
}
