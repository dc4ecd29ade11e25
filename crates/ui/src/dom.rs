//! Small DOM lookup helpers

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

fn collect(list: &NodeList) -> Vec<Element> {
    let mut found = Vec::new();
    for i in 0..list.length() {
        if let Some(node) = list.get(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                found.push(el);
            }
        }
    }
    found
}

/// Collect every element matching `selector` in the document.
///
/// Selector errors and absent matches both collapse to an empty list;
/// callers treat missing page structure as a no-op.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| collect(&list))
        .unwrap_or_default()
}

/// Collect every element matching `selector` under `root`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| collect(&list))
        .unwrap_or_default()
}
