//! Locale-aware date formatting for the rendered pages.

use chrono::{DateTime, Locale, Utc};

/// Locale used across the site.
const SITE_LOCALE: Locale = Locale::pt_BR;

/// Formats a timestamp as `dd MMM yyyy`, e.g. `15 mar 2023`.
pub(crate) fn short_date(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .format_localized("%d %b %Y", SITE_LOCALE)
        .to_string()
}

/// Formats the time-of-day portion as `HH:mm`, e.g. `14:30`.
pub(crate) fn hour_minute(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}
