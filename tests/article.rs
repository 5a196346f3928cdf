use notemark::{Config, DisplayNode, InlineSpan, render, render_to_document, render_to_html};

const ARTICLE: &str = "\
# Profiling a React App

Rendering was slow on the dashboard page. This walkthrough shows the fix.

## Measure first

Before optimization: 420ms per render
After optimization: 38ms per render

### Steps

1. Record a trace with the profiler
2. Find components that re-render on every keystroke
3. Memoize the expensive ones

```js
const Rows = memo(function Rows({ items }) {
  return items.map((item) => <Row key={item.id} {...item} />);
});
```

Key points to remember:

- Wrap *pure* components in `memo`
- Keep **stable** props, see [the docs](https://react.dev/reference/react/memo)

### Essential Watching

- [ ] Profiler deep dive
- [x] Rendering fundamentals

// internal note, not for publication
* draft bullet that never shipped
";

#[test]
fn article_node_sequence() {
    let nodes = render(ARTICLE);

    assert!(matches!(&nodes[0], DisplayNode::Heading { level: 1, .. }));

    // One node per input line, in input order, minus the two dropped
    // comment-like lines and the three fenced-away source lines.
    let headings: Vec<u8> = nodes
        .iter()
        .filter_map(|n| match n {
            DisplayNode::Heading { level, .. } => Some(*level),
            _ => None,
        })
        .collect();
    assert_eq!(headings, vec![1, 2, 3]);

    let metrics: Vec<&str> = nodes
        .iter()
        .filter_map(|n| match n {
            DisplayNode::Metric { raw } => Some(raw.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        metrics,
        vec![
            "Before optimization: 420ms per render",
            "After optimization: 38ms per render",
        ]
    );

    let ordered: Vec<bool> = nodes
        .iter()
        .filter_map(|n| match n {
            DisplayNode::ListItem { ordered, .. } => Some(*ordered),
            _ => None,
        })
        .collect();
    assert_eq!(ordered, vec![true, true, true, false, false]);

    let code_blocks: Vec<(&str, &str)> = nodes
        .iter()
        .filter_map(|n| match n {
            DisplayNode::CodeBlock { language, code } => {
                Some((language.as_str(), code.as_str()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(code_blocks.len(), 1);
    assert_eq!(code_blocks[0].0, "js");
    assert!(code_blocks[0].1.starts_with("const Rows = memo"));
    assert!(code_blocks[0].1.ends_with("});"));

    assert!(nodes.iter().any(|n| matches!(
        n,
        DisplayNode::Callout { heading } if heading == "Essential Watching"
    )));

    let checks: Vec<bool> = nodes
        .iter()
        .filter_map(|n| match n {
            DisplayNode::ChecklistItem { checked, .. } => Some(*checked),
            _ => None,
        })
        .collect();
    assert_eq!(checks, vec![false, true]);

    // The two comment-like lines near the end produce no nodes; after the
    // checklist only the blank-line spacers remain.
    assert!(matches!(nodes.last(), Some(DisplayNode::Spacer)));
}

#[test]
fn article_inline_details() {
    let nodes = render(ARTICLE);
    let memo_item = nodes
        .iter()
        .find_map(|n| match n {
            DisplayNode::ListItem { ordered: false, content }
                if matches!(content.first(), Some(InlineSpan::Text(t)) if t.starts_with("Wrap")) =>
            {
                Some(content)
            }
            _ => None,
        })
        .expect("memo list item");
    assert!(memo_item.contains(&InlineSpan::Italic("pure".into())));
    assert!(memo_item.contains(&InlineSpan::Code("memo".into())));

    let link = nodes.iter().find_map(|n| match n {
        DisplayNode::ListItem { content, .. } => content.iter().find_map(|s| match s {
            InlineSpan::Link { url, external, .. } => Some((url.clone(), *external)),
            _ => None,
        }),
        _ => None,
    });
    assert_eq!(
        link,
        Some(("https://react.dev/reference/react/memo".to_string(), true))
    );
}

#[test]
fn article_html_fragment() {
    let html = render_to_html(ARTICLE, &Config::default());

    assert!(html.starts_with("<h1>Profiling a React App</h1>\n"));
    assert!(html.contains("<p class=\"metric\">Before optimization: 420ms per render</p>"));
    assert!(html.contains("<ol>\n  <li>Record a trace with the profiler</li>"));
    assert!(html.contains("<pre><code class=\"language-js\">"));
    // JSX angle brackets inside the fence must be escaped.
    assert!(html.contains("&lt;Row key={item.id} {...item} /&gt;"));
    assert!(html.contains("<aside class=\"callout\"><h3>Essential Watching</h3></aside>"));
    assert!(html.contains(
        "<a href=\"https://react.dev/reference/react/memo\" target=\"_blank\" rel=\"noopener\">"
    ));
    assert!(!html.contains("internal note"));
    assert!(!html.contains("draft bullet"));
}

#[test]
fn standalone_document_wraps_fragment() {
    let mut config = Config::default();
    config.document.standalone = true;
    config.document.title = "Profiling".to_string();

    let doc = render_to_document(ARTICLE, &config);
    assert!(doc.starts_with("<!doctype html>"));
    assert!(doc.contains("<title>Profiling</title>"));
    assert!(doc.contains("<h1>Profiling a React App</h1>"));
}
