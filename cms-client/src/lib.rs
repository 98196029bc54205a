//! Client library for the headless content API that backs the blog.
//!
//! Exposes a typed HTTP client (`CmsClient`) over the CMS REST endpoints:
//! - paged post queries with an opaque `next_page` cursor
//! - single-document lookup by uid
//! - date-predicate queries used for previous/next navigation
//!
//! `PostFeed` keeps the accumulated "load more" state on top of the client:
//! an append-only list of post summaries plus the current cursor.
//!
//! All queries accept an optional snapshot `ref` so preview mode can read
//! draft content instead of the published snapshot.
#![warn(missing_docs)]

mod error;
mod feed;
mod http;
mod models;

pub use error::{CmsError, CmsResult};
pub use feed::PostFeed;
pub use http::CmsClient;
pub use models::{
    AdjacentPost, ContentGroup, PostDocument, PostPage, PostSummary, QueryOptions, RichTextBlock,
};
