//! Inline span extraction for a single line of article text.
//!
//! One left-to-right scan over the characters, emitting span boundaries
//! directly. Delimiters pair with the nearest closer (shortest match), and an
//! opener with no closer falls through as literal text. Code spans are taken
//! as soon as a backtick is reached, so `*` inside inline code is never read
//! as emphasis.

use crate::node::InlineSpan;

/// Parse one line into an ordered sequence of inline spans.
///
/// Concatenating the visible text of the result reproduces the line minus the
/// stripped delimiters. Never fails; malformed markup stays literal.
pub fn parse_inline(line: &str) -> Vec<InlineSpan> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '`' => {
                if let Some(close) = find_char(&chars, i + 1, '`') {
                    flush_plain(&mut plain, &mut spans);
                    spans.push(InlineSpan::Code(collect(&chars, i + 1, close)));
                    i = close + 1;
                } else {
                    plain.push('`');
                    i += 1;
                }
            }
            '*' if chars.get(i + 1) == Some(&'*') => {
                if let Some(close) = find_pair(&chars, i + 2) {
                    flush_plain(&mut plain, &mut spans);
                    spans.push(InlineSpan::Bold(collect(&chars, i + 2, close)));
                    i = close + 2;
                } else {
                    plain.push_str("**");
                    i += 2;
                }
            }
            '*' => {
                if let Some(close) = find_char(&chars, i + 1, '*') {
                    flush_plain(&mut plain, &mut spans);
                    spans.push(InlineSpan::Italic(collect(&chars, i + 1, close)));
                    i = close + 1;
                } else {
                    plain.push('*');
                    i += 1;
                }
            }
            '[' => {
                if let Some((text, url, next)) = match_link(&chars, i) {
                    flush_plain(&mut plain, &mut spans);
                    let external = url.starts_with("http://") || url.starts_with("https://");
                    spans.push(InlineSpan::Link {
                        text,
                        url,
                        external,
                    });
                    i = next;
                } else {
                    plain.push('[');
                    i += 1;
                }
            }
            c => {
                plain.push(c);
                i += 1;
            }
        }
    }

    flush_plain(&mut plain, &mut spans);
    spans
}

fn flush_plain(plain: &mut String, spans: &mut Vec<InlineSpan>) {
    if !plain.is_empty() {
        spans.push(InlineSpan::Text(std::mem::take(plain)));
    }
}

fn collect(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}

/// Index of the next `needle` at or after `start`.
fn find_char(chars: &[char], start: usize, needle: char) -> Option<usize> {
    chars[start..]
        .iter()
        .position(|&c| c == needle)
        .map(|p| start + p)
}

/// Index of the first `**` at or after `start`.
fn find_pair(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '*' {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Match `[text](url)` starting at `open`. Returns the text, the url, and the
/// index just past the closing parenthesis.
fn match_link(chars: &[char], open: usize) -> Option<(String, String, usize)> {
    let text_end = find_char(chars, open + 1, ']')?;
    if chars.get(text_end + 1) != Some(&'(') {
        return None;
    }
    let url_end = find_char(chars, text_end + 2, ')')?;
    let text = collect(chars, open + 1, text_end);
    let url = collect(chars, text_end + 2, url_end);
    Some((text, url, url_end + 1))
}
