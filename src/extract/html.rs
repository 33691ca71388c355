//! Reduce HTML renderings to plain text.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};

static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

/// Elements whose text is never part of the narrative.
const SKIPPED_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Whether a response body looks like an HTML document rather than plain text.
pub fn looks_like_html(body: &str) -> bool {
    let head: String = body
        .trim_start()
        .chars()
        .take(512)
        .collect::<String>()
        .to_ascii_lowercase();
    head.starts_with("<!doctype html")
        || head.starts_with("<html")
        || head.starts_with("<pre")
        || head.starts_with("<body")
}

/// Text of a narrative rendering with markup removed.
///
/// Plain text is returned unchanged. For HTML, the text nodes of `<body>` are
/// concatenated in document order, which keeps the line structure of `<pre>`
/// blocks. Script and style content is skipped.
pub fn narrative_text(body: &str) -> String {
    if !looks_like_html(body) {
        return body.to_string();
    }
    let document = Html::parse_document(body);
    let root = document
        .select(&BODY)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut text = String::new();
    push_visible_text(root, &mut text);
    text
}

fn push_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) if SKIPPED_ELEMENTS.contains(&e.name()) => {}
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child) {
                    push_visible_text(el, out);
                }
            }
            _ => {}
        }
    }
}
