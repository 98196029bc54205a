pub(crate) mod detail;
pub(crate) mod listing;
pub(crate) mod render;
