pub(crate) mod content_source;
