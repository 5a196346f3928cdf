/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link {
        text: String,
        url: String,
        /// True when the url carries an http(s) scheme, i.e. points off-site.
        external: bool,
    },
}

impl InlineSpan {
    /// The visible characters of this span, markup delimiters stripped.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Text(t)
            | InlineSpan::Bold(t)
            | InlineSpan::Italic(t)
            | InlineSpan::Code(t) => t,
            InlineSpan::Link { text, .. } => text,
        }
    }
}

/// Block-level elements classified from article text.
///
/// The output of a parse is a flat ordered sequence of these; list items are
/// emitted individually rather than grouped, and grouping (if any) is left to
/// the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNode {
    Heading {
        level: u8,
        content: Vec<InlineSpan>,
    },
    Paragraph {
        content: Vec<InlineSpan>,
    },
    ListItem {
        ordered: bool,
        content: Vec<InlineSpan>,
    },
    ChecklistItem {
        checked: bool,
        text: String,
    },
    CodeBlock {
        /// Declared language tag, possibly empty.
        language: String,
        code: String,
    },
    /// A recognized resource-list heading, rendered as a highlighted aside.
    Callout {
        heading: String,
    },
    /// A before/after measurement line, kept verbatim.
    Metric {
        raw: String,
    },
    /// A blank source line, preserved so vertical rhythm survives rendering.
    Spacer,
}
