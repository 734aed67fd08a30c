//! Small DOM helpers.
//!
//! Lookups return `Option` and callers short-circuit on `None`: a missing
//! element is never an error on this page.

use servanda_core::{SectionBounds, SectionId, ViewportGeometry};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

/// The global window.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The global document.
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Element by id.
pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Every element matching `selector` under `root`.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every element matching `selector` in the document.
pub fn query_document(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.document_element())
        .map(|root| query_all(&root, selector))
        .unwrap_or_default()
}

/// Toggle the `hidden` attribute.
pub fn set_hidden(element: &Element, hidden: bool) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        element.set_hidden(hidden);
    }
}

/// Add or remove one class.
pub fn toggle_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Current layout of the page and its sections.
pub fn viewport_geometry() -> Option<ViewportGeometry> {
    let window = window()?;
    let document = window.document()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = document
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(viewport_height);
    let sections = SectionId::ORDER
        .into_iter()
        .filter_map(|section| {
            let rect = document.get_element_by_id(section.id())?.get_bounding_client_rect();
            Some((
                section,
                SectionBounds {
                    top: rect.top(),
                    bottom: rect.bottom(),
                },
            ))
        })
        .collect();

    Some(ViewportGeometry {
        scroll_y,
        viewport_height,
        document_height,
        sections,
    })
}

/// Scroll the window to `top`.
pub fn scroll_window_to(top: f64, smooth: bool) {
    if let Some(window) = window() {
        window.scroll_to_with_scroll_to_options(&scroll_options(None, Some(top), smooth));
    }
}

/// Smooth-scroll to a section. No-op when the section is missing.
pub fn scroll_to_section(section: SectionId) {
    if let Some(top) = viewport_geometry().and_then(|geometry| geometry.scroll_offset_of(section)) {
        scroll_window_to(top, true);
    }
}

/// Scroll an element horizontally.
pub fn scroll_element_to(element: &Element, left: f64, smooth: bool) {
    element.scroll_to_with_scroll_to_options(&scroll_options(Some(left), None, smooth));
}

fn scroll_options(left: Option<f64>, top: Option<f64>, smooth: bool) -> ScrollToOptions {
    let options = ScrollToOptions::new();
    if let Some(left) = left {
        options.set_left(left);
    }
    if let Some(top) = top {
        options.set_top(top);
    }
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    options
}

/// Log to the browser console.
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Warn in the browser console with the JS error attached.
pub fn warn(message: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(message), err);
}
