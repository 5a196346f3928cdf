//! Prints an outline of an article: each heading with a rough estimate of the
//! rendered lines in its section.

use notemark::DisplayNode;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("usage: debug_lines <article.txt>");
    let text = std::fs::read_to_string(&path).expect("Failed to read file");
    let nodes = notemark::render(&text);

    for (i, node) in nodes.iter().enumerate() {
        if let DisplayNode::Heading { level, content } = node {
            let lines = count_section_lines(&nodes, i, *level);
            let text: String = content.iter().map(|s| s.text()).collect();
            println!(
                "H{} {:30} -> {} lines",
                level,
                text.chars().take(30).collect::<String>(),
                lines
            );
        }
    }
}

fn count_section_lines(nodes: &[DisplayNode], start: usize, start_level: u8) -> usize {
    let mut lines = 0;
    for node in nodes.iter().skip(start + 1) {
        match node {
            DisplayNode::Heading { level, .. } if *level <= start_level => break,
            DisplayNode::Heading { .. } => {
                lines += 2;
            }
            DisplayNode::Paragraph { content } => {
                let char_count: usize = content.iter().map(|s| s.text().len()).sum();
                lines += (char_count / 80).max(1);
            }
            DisplayNode::CodeBlock { code, .. } => {
                lines += code.lines().count();
            }
            DisplayNode::ListItem { .. }
            | DisplayNode::ChecklistItem { .. }
            | DisplayNode::Callout { .. }
            | DisplayNode::Metric { .. }
            | DisplayNode::Spacer => {
                lines += 1;
            }
        }
    }
    lines
}
