//! HTML flattening and fixed-width wrapping for radio replies

use scraper::{ElementRef, Html, node::Node};

/// Elements whose boundaries separate words in the rendered text.
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "br", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6",
    "tr", "td", "th", "table", "blockquote", "section", "article",
];

/// Elements whose text content is never shown.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style"];

/// Convert an HTML fragment into plain text with collapsed whitespace.
///
/// Markup, attributes and comments are dropped; entities are decoded.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut text = String::new();
    collect_text(fragment.root_element(), &mut text);

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                if HIDDEN_ELEMENTS.contains(&el.name()) {
                    continue;
                }
                let block = BLOCK_ELEMENTS.contains(&el.name());
                if block {
                    out.push(' ');
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

/// Greedy word wrap to at most `width` characters per line.
///
/// Lines break only at whitespace. A single word longer than `width` cannot
/// fit anywhere and is cut into `width`-sized pieces.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut word_len = word.chars().count();

        while word_len > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let split = word
                .char_indices()
                .nth(width)
                .map_or(word.len(), |(idx, _)| idx);
            lines.push(word[..split].to_string());
            word = &word[split..];
            word_len -= width;
        }
        if word_len == 0 {
            continue;
        }

        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
