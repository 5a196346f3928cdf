//! Line-oriented block segmenter.
//!
//! One pass over the input lines, classifying each line (or fenced group of
//! lines) into exactly one [`DisplayNode`]. The only state carried between
//! lines is whether the cursor is inside an open code fence, held as a tagged
//! mode so the fence transitions stay explicit.

use tracing::{debug, warn};

use crate::inline::parse_inline;
use crate::node::DisplayNode;

/// Resource-list titles that render as callouts instead of plain headings.
const CALLOUT_TITLES: [&str; 3] = [
    "Essential Watching",
    "Must-Watch Resources",
    "Video References",
];

enum Mode {
    Normal,
    Fence { language: String, buffer: Vec<String> },
}

/// Parse article text into a flat ordered sequence of display nodes.
///
/// Empty input yields an empty sequence. Classification is best-effort and
/// this never fails: malformed markup degrades to a plainer node, never to an
/// error.
pub fn parse(text: &str) -> Vec<DisplayNode> {
    let mut nodes = Vec::new();
    let mut mode = Mode::Normal;

    for line in text.lines() {
        mode = match mode {
            Mode::Normal => {
                if let Some(rest) = line.strip_prefix("```") {
                    Mode::Fence {
                        language: rest.trim().to_string(),
                        buffer: Vec::new(),
                    }
                } else {
                    classify_line(line, &mut nodes);
                    Mode::Normal
                }
            }
            Mode::Fence {
                language,
                mut buffer,
            } => {
                if line.starts_with("```") {
                    nodes.push(DisplayNode::CodeBlock {
                        language,
                        code: buffer.join("\n"),
                    });
                    Mode::Normal
                } else {
                    buffer.push(line.to_string());
                    Mode::Fence { language, buffer }
                }
            }
        };
    }

    // A fence opened but never closed emits nothing; partial code blocks
    // would misrender worse than a missing one.
    if let Mode::Fence { language, buffer } = mode {
        warn!(
            language = %language,
            buffered_lines = buffer.len(),
            "unterminated code fence, discarding buffered content"
        );
    }

    nodes
}

/// Classify a single line outside any fence. First matching rule wins.
fn classify_line(line: &str, nodes: &mut Vec<DisplayNode>) {
    if let Some(rest) = line.strip_prefix("- [ ] ") {
        nodes.push(DisplayNode::ChecklistItem {
            checked: false,
            text: rest.to_string(),
        });
    } else if let Some(rest) = line
        .strip_prefix("- [x] ")
        .or_else(|| line.strip_prefix("- [✓] "))
    {
        nodes.push(DisplayNode::ChecklistItem {
            checked: true,
            text: rest.to_string(),
        });
    } else if let Some(rest) = line.strip_prefix("#### ") {
        nodes.push(heading(4, rest));
    } else if let Some(rest) = line.strip_prefix("### ") {
        // Known resource-list titles outrank the generic level-3 heading.
        if CALLOUT_TITLES.contains(&rest) {
            nodes.push(DisplayNode::Callout {
                heading: rest.to_string(),
            });
        } else {
            nodes.push(heading(3, rest));
        }
    } else if let Some(rest) = line.strip_prefix("## ") {
        nodes.push(heading(2, rest));
    } else if let Some(rest) = line.strip_prefix("# ") {
        nodes.push(heading(1, rest));
    } else if let Some(rest) = split_ordered_marker(line) {
        nodes.push(DisplayNode::ListItem {
            ordered: true,
            content: parse_inline(rest),
        });
    } else if let Some(rest) = line.strip_prefix("- ") {
        nodes.push(DisplayNode::ListItem {
            ordered: false,
            content: parse_inline(rest),
        });
    } else if line.contains("Before optimization") || line.contains("After optimization") {
        nodes.push(DisplayNode::Metric {
            raw: line.to_string(),
        });
    } else if line.trim().is_empty() {
        nodes.push(DisplayNode::Spacer);
    } else if line.starts_with("//") || line.starts_with('*') {
        // Comment-like lines produce no node.
        debug!(line, "dropping comment-like line");
    } else {
        nodes.push(DisplayNode::Paragraph {
            content: parse_inline(line),
        });
    }
}

fn heading(level: u8, text: &str) -> DisplayNode {
    DisplayNode::Heading {
        level,
        content: parse_inline(text),
    }
}

/// Strip an ordered-list marker (digits then a period), returning the item
/// text with leading whitespace removed.
fn split_ordered_marker(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix('.').map(str::trim_start)
}
