#![allow(dead_code)]

use confirm_core::{ElementId, PresentationSurface};
use confirm_dom::{Document, Element, Page};
use std::time::Duration;

pub const DELETE: ElementId = ElementId::from_raw(1);
pub const PLAIN: ElementId = ElementId::from_raw(2);

/// A page with a declarative "Delete" button and an unrelated link.
pub fn delete_page() -> Page {
    let mut doc = Document::new();
    doc.insert(
        Element::button(DELETE, "Delete")
            .with_attr("class", "btn")
            .with_attr("data-toggle", "double-confirm"),
    );
    doc.insert(Element::new(PLAIN, "a").with_label("Home").with_attr("href", "/"));
    Page::new(doc)
}

pub fn label(page: &Page, id: ElementId) -> String {
    page.element(id)
        .map(|el| el.label().to_string())
        .unwrap_or_default()
}

pub fn classes(page: &Page, id: ElementId) -> Vec<String> {
    page.element(id).map(Element::classes).unwrap_or_default()
}

pub fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

pub fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
