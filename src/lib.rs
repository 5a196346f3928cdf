//! notemark converts lightweight article markup into typed display nodes,
//! and optionally renders those nodes to HTML.
//!
//! The dialect is line-oriented: every line (or fenced group of lines) maps
//! to exactly one [`DisplayNode`], and the output order always matches the
//! input line order. Parsing is a pure function of the input text and never
//! fails; malformed markup degrades to a plainer classification.

mod config;
mod html;
mod inline;
mod node;
mod parser;

pub use config::Config;
pub use node::{DisplayNode, InlineSpan};

/// Parse article text into a flat ordered sequence of display nodes.
pub fn render(content: &str) -> Vec<DisplayNode> {
    parser::parse(content)
}

/// Parse possibly-absent article text. Missing content renders as nothing.
pub fn render_opt(content: Option<&str>) -> Vec<DisplayNode> {
    render(content.unwrap_or_default())
}

/// Parse a single line of text into inline spans.
pub fn render_inline(line: &str) -> Vec<InlineSpan> {
    inline::parse_inline(line)
}

/// Convert article text to an HTML fragment.
pub fn render_to_html(content: &str, config: &Config) -> String {
    html::nodes_to_html(&render(content), config)
}

/// Convert article text to a complete HTML document when the config asks for
/// one, or a fragment otherwise.
pub fn render_to_document(content: &str, config: &Config) -> String {
    let body = render_to_html(content, config);
    if config.document.standalone {
        html::wrap_standalone(&body, config)
    } else {
        body
    }
}
