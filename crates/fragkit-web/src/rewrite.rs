//! Sub-path link rewriting over an injected fragment.
//!
//! Runs only when the hosting context is multi-tenant with a non-empty
//! prefix; the rule itself lives in fragkit-core.

use fragkit_core::rewrite_href;
use tracing::debug;
use web_sys::Element;

use crate::dom;

/// Rewrite every qualifying anchor under `container` in place.
pub fn apply(container: &Element, prefix: &str) {
    let Ok(anchors) = container.query_selector_all("a[href]") else {
        return;
    };
    for anchor in dom::elements(&anchors) {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        if let Some(rewritten) = rewrite_href(&href, prefix) {
            debug!(from = %href, to = %rewritten, "rewriting anchor");
            anchor.set_attribute("href", &rewritten).ok();
        }
    }
}
