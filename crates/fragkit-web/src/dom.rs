//! Small DOM access helpers shared by the glue modules.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList, Window};

/// Marker attribute set on elements that already carry our handlers, so a
/// reload cycle never double-binds.
pub const BOUND_ATTR: &str = "data-fragkit-bound";

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First match for `selector` under `scope`, swallowing selector errors.
pub fn query(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
}

/// First match for `selector` in the whole document.
pub fn query_document(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Iterate a `NodeList` as elements.
pub fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length()).filter_map(|i| list.item(i).and_then(|n| n.dyn_into::<Element>().ok()))
}

/// Whether the element already carries our handlers; marks it if not.
/// Returns `true` when binding should proceed.
pub fn claim_binding(element: &Element) -> bool {
    if element.get_attribute(BOUND_ATTR).is_some() {
        return false;
    }
    element.set_attribute(BOUND_ATTR, "true").is_ok()
}

/// Add or remove a single class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    if on {
        list.add_1(class).ok();
    } else {
        list.remove_1(class).ok();
    }
}

/// Current viewport width, when the window reports one.
pub fn viewport_width() -> Option<u32> {
    window()?
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|w| w as u32)
}

/// Current vertical scroll offset.
pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}
