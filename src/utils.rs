// Utility functions for reading listing markup
use scraper::{ElementRef, Node, Selector};

/// Direct child elements of `el`, skipping text and comment nodes.
pub fn child_elements<'a>(el: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap).collect()
}

/// Concatenated text of an element and its descendants.
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

fn non_blank_text(node: &Node) -> Option<String> {
    match node {
        Node::Text(text) if !text.trim().is_empty() => Some(text.text.to_string()),
        _ => None,
    }
}

/// First non-blank text node of `el` itself, falling back to nested
/// elements when the element has no text of its own.
pub fn first_text_node(el: &ElementRef<'_>) -> Option<String> {
    el.children()
        .find_map(|node| non_blank_text(node.value()))
        .or_else(|| el.descendants().find_map(|node| non_blank_text(node.value())))
}

/// Text of the `nth` element matching `selector` inside `el`.
pub fn nth_text(el: &ElementRef<'_>, selector: &Selector, nth: usize) -> Option<String> {
    el.select(selector).nth(nth).map(|found| element_text(&found))
}
