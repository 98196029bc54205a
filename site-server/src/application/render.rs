//! Rich-text to HTML conversion.
//!
//! Body fragments arrive from the CMS as rich-text source and are converted
//! to HTML with pulldown-cmark. The conversion itself is treated as an
//! external capability; nothing here inspects the produced markup.

use cms_client::ContentGroup;
use pulldown_cmark::{Options, Parser, html};

/// One content section with its body fragments rendered to HTML.
#[derive(Debug, Clone)]
pub(crate) struct RenderedSection {
    pub(crate) heading: String,
    pub(crate) body_html: Vec<String>,
}

/// Converts one rich-text fragment to an HTML fragment.
pub(crate) fn render_rich_text(text: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;
    let parser = Parser::new_ext(text, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Renders every section body, preserving section and fragment order.
pub(crate) fn render_sections(content: &[ContentGroup]) -> Vec<RenderedSection> {
    content
        .iter()
        .map(|group| RenderedSection {
            heading: group.heading.clone(),
            body_html: group
                .body
                .iter()
                .map(|block| render_rich_text(&block.text))
                .collect(),
        })
        .collect()
}
