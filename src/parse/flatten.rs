use ego_tree::iter::Edge;
use scraper::Html;

/// Elements that start a new line in the flattened text stream.
const BLOCK_TAGS: [&str; 14] = [
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "div", "table", "tr",
    "blockquote",
];

/// Flatten an HTML fragment into a plain text stream.
///
/// Text nodes are appended verbatim in document order; block-level elements
/// break the line both when they open and when they close, `<br>` when it
/// opens. Entities are decoded by the HTML parser. The stream carries no
/// trailing newline.
#[must_use]
pub fn flatten_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();

    for edge in fragment.root_element().traverse() {
        match edge {
            Edge::Open(node) => {
                if let Some(text) = node.value().as_text() {
                    out.push_str(text);
                } else if let Some(element) = node.value().as_element() {
                    let name = element.name();
                    if name == "br" || BLOCK_TAGS.contains(&name) {
                        break_line(&mut out);
                    }
                }
            }
            Edge::Close(node) => {
                if let Some(element) = node.value().as_element() {
                    if BLOCK_TAGS.contains(&element.name()) {
                        break_line(&mut out);
                    }
                }
            }
        }
    }

    if out.ends_with('\n') {
        out.pop();
    }
    out
}

fn break_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
