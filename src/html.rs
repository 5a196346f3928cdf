use crate::config::Config;
use crate::node::{DisplayNode, InlineSpan};

/// Convert display nodes to an HTML fragment.
///
/// List items and checklist items arrive as individual nodes; consecutive
/// runs of the same kind are grouped under one list element here so the
/// markup stays valid.
pub fn nodes_to_html(nodes: &[DisplayNode], config: &Config) -> String {
    let mut out = String::new();

    let mut i = 0;
    while i < nodes.len() {
        match &nodes[i] {
            DisplayNode::ListItem { ordered, .. } => {
                let ordered = *ordered;
                let tag = if ordered { "ol" } else { "ul" };
                out.push('<');
                out.push_str(tag);
                out.push_str(">\n");
                while let Some(DisplayNode::ListItem { ordered: o, content }) = nodes.get(i) {
                    if *o != ordered {
                        break;
                    }
                    out.push_str("  <li>");
                    spans_to_html(content, config, &mut out);
                    out.push_str("</li>\n");
                    i += 1;
                }
                out.push_str("</");
                out.push_str(tag);
                out.push_str(">\n");
            }
            DisplayNode::ChecklistItem { .. } => {
                out.push_str("<ul class=\"checklist\">\n");
                while let Some(DisplayNode::ChecklistItem { checked, text }) = nodes.get(i) {
                    out.push_str("  <li><input type=\"checkbox\" disabled");
                    if *checked {
                        out.push_str(" checked");
                    }
                    out.push('>');
                    escape_text(text, &mut out);
                    out.push_str("</li>\n");
                    i += 1;
                }
                out.push_str("</ul>\n");
            }
            node => {
                emit_node(node, config, &mut out);
                i += 1;
            }
        }
    }

    out
}

/// Wrap a rendered fragment in a minimal complete document.
pub fn wrap_standalone(body: &str, config: &Config) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    escape_text(&config.document.title, &mut out);
    out.push_str("</title>\n</head>\n<body>\n");
    out.push_str(body);
    out.push_str("</body>\n</html>\n");
    out
}

fn emit_node(node: &DisplayNode, config: &Config, out: &mut String) {
    match node {
        DisplayNode::Heading { level, content } => {
            out.push_str(&format!("<h{level}>"));
            spans_to_html(content, config, out);
            out.push_str(&format!("</h{level}>\n"));
        }
        DisplayNode::Paragraph { content } => {
            out.push_str("<p>");
            spans_to_html(content, config, out);
            out.push_str("</p>\n");
        }
        DisplayNode::CodeBlock { language, code } => {
            out.push_str("<pre><code");
            if !language.is_empty() {
                out.push_str(" class=\"");
                escape_attr(&config.code.class_prefix, out);
                escape_attr(language, out);
                out.push('"');
            }
            out.push('>');
            escape_text(code, out);
            out.push_str("</code></pre>\n");
        }
        DisplayNode::Callout { heading } => {
            out.push_str("<aside class=\"callout\"><h3>");
            escape_text(heading, out);
            out.push_str("</h3></aside>\n");
        }
        DisplayNode::Metric { raw } => {
            out.push_str("<p class=\"metric\">");
            escape_text(raw, out);
            out.push_str("</p>\n");
        }
        DisplayNode::Spacer => {
            out.push_str("<div class=\"spacer\"></div>\n");
        }
        // Grouped by the caller.
        DisplayNode::ListItem { .. } | DisplayNode::ChecklistItem { .. } => {}
    }
}

fn spans_to_html(spans: &[InlineSpan], config: &Config, out: &mut String) {
    for span in spans {
        span_to_html(span, config, out);
    }
}

fn span_to_html(span: &InlineSpan, config: &Config, out: &mut String) {
    match span {
        InlineSpan::Text(text) => escape_text(text, out),
        InlineSpan::Bold(text) => {
            out.push_str("<strong>");
            escape_text(text, out);
            out.push_str("</strong>");
        }
        InlineSpan::Italic(text) => {
            out.push_str("<em>");
            escape_text(text, out);
            out.push_str("</em>");
        }
        InlineSpan::Code(text) => {
            out.push_str("<code>");
            escape_text(text, out);
            out.push_str("</code>");
        }
        InlineSpan::Link {
            text,
            url,
            external,
        } => {
            out.push_str("<a href=\"");
            escape_attr(url, out);
            out.push('"');
            if *external && config.links.external_new_tab {
                out.push_str(" target=\"_blank\" rel=\"noopener\"");
            }
            out.push('>');
            escape_text(text, out);
            out.push_str("</a>");
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
