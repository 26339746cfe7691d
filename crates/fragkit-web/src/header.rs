//! Header behaviors: mobile nav panel, active-link marking, scrolled class.
//!
//! Injection can race the initializer, so element discovery runs through
//! the bounded retry ladder: poll by id, fall back to class lookup, then
//! construct minimal markup, then give the feature up silently.
//!
//! Element-scoped handlers rebind per injection (fresh elements carry no
//! bound marker); window-scoped handlers bind once and look their targets
//! up at event time, so reloads never stack listeners.

use std::cell::Cell;

use fragkit_core::{
    fallback_nav, is_active, matches_page_id, retry, transition, PanelEvent, PanelState,
    SiteConfig, NAV_CLOSE_CLASS, NAV_LINK_CLASS, NAV_MENU_CLASS, NAV_MENU_ID, NAV_OVERLAY_CLASS,
    NAV_TOGGLE_CLASS, NAV_TOGGLE_ID,
};
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, warn};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;

/// Class applied to the toggle, panel, and overlay while the panel is open,
/// and to the matching navigation link.
const ACTIVE_CLASS: &str = "active";
/// Class applied to the page header region past the scroll threshold.
const SCROLLED_CLASS: &str = "scrolled";
/// Region that receives the scrolled class.
const HEADER_REGION_SELECTOR: &str = ".site-header";

thread_local! {
    static PANEL_STATE: Cell<PanelState> = const { Cell::new(PanelState::Closed) };
    static WINDOW_BOUND: Cell<bool> = const { Cell::new(false) };
}

/// Wire the header fragment after injection.
pub async fn init(config: &SiteConfig, container: &Element) {
    let Some((toggle, menu)) = locate_nav(config, container).await else {
        debug!("nav elements unavailable, header features disabled");
        return;
    };

    // A freshly injected panel always starts closed.
    PANEL_STATE.set(PanelState::Closed);
    apply_panel(PanelState::Closed);

    bind_nav(config, &toggle, &menu);
    bind_window(config);
    mark_active_links(&menu);
}

/// Mark the link matching a caller-supplied page identifier as active.
pub fn set_active_link(page_id: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(links) = document.query_selector_all(&format!(".{NAV_LINK_CLASS}, #{NAV_MENU_ID} a"))
    else {
        return;
    };
    for link in dom::elements(&links) {
        let href = link.get_attribute("href").unwrap_or_default();
        let data_page = link.get_attribute("data-page");
        dom::set_class(
            &link,
            ACTIVE_CLASS,
            matches_page_id(&href, data_page.as_deref(), page_id),
        );
    }
}

async fn locate_nav(config: &SiteConfig, container: &Element) -> Option<(Element, Element)> {
    let scope = container.clone();
    let found = retry(
        config.retry,
        move |_| {
            let scope = scope.clone();
            async move { find_nav(&scope) }
        },
        |interval| TimeoutFuture::new(interval.as_millis() as u32),
    )
    .await;
    if found.is_some() {
        return found;
    }

    warn!("nav elements never appeared, constructing fallback markup");
    container
        .insert_adjacent_html("beforeend", &fallback_nav())
        .ok()?;
    find_nav(container)
}

/// Id lookup first, class lookup second, for both elements.
fn find_nav(scope: &Element) -> Option<(Element, Element)> {
    let toggle = dom::query(scope, &format!("#{NAV_TOGGLE_ID}"))
        .or_else(|| dom::query(scope, &format!(".{NAV_TOGGLE_CLASS}")))?;
    let menu = dom::query(scope, &format!("#{NAV_MENU_ID}"))
        .or_else(|| dom::query(scope, &format!(".{NAV_MENU_CLASS}")))?;
    Some((toggle, menu))
}

fn dispatch(event: PanelEvent, breakpoint_px: u32) {
    let next = transition(PANEL_STATE.get(), event, breakpoint_px);
    PANEL_STATE.set(next);
    apply_panel(next);
}

/// Reflect the panel state onto the DOM. Elements are looked up at event
/// time so handlers survive a fragment reload.
fn apply_panel(state: PanelState) {
    let open = state.is_open();

    if let Some(toggle) = dom::query_document(&format!("#{NAV_TOGGLE_ID}"))
        .or_else(|| dom::query_document(&format!(".{NAV_TOGGLE_CLASS}")))
    {
        dom::set_class(&toggle, ACTIVE_CLASS, open);
        toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" })
            .ok();
    }
    if let Some(menu) = dom::query_document(&format!("#{NAV_MENU_ID}"))
        .or_else(|| dom::query_document(&format!(".{NAV_MENU_CLASS}")))
    {
        dom::set_class(&menu, ACTIVE_CLASS, open);
    }
    if let Some(overlay) = dom::query_document(&format!(".{NAV_OVERLAY_CLASS}")) {
        dom::set_class(&overlay, ACTIVE_CLASS, open);
    }

    // Guard body scroll while the panel is open.
    if let Some(body) = dom::document().and_then(|d| d.body()) {
        if open {
            body.style().set_property("overflow", "hidden").ok();
        } else {
            body.style().remove_property("overflow").ok();
        }
    }
}

fn bind_nav(config: &SiteConfig, toggle: &Element, menu: &Element) {
    let breakpoint = config.breakpoint_px;

    if dom::claim_binding(toggle) {
        on_click(toggle, move || {
            dispatch(PanelEvent::ToggleActivated, breakpoint)
        });
    }

    if let Ok(links) = menu.query_selector_all("a") {
        for link in dom::elements(&links) {
            if dom::claim_binding(&link) {
                on_click(&link, move || dispatch(PanelEvent::LinkActivated, breakpoint));
            }
        }
    }

    if let Some(overlay) = dom::query_document(&format!(".{NAV_OVERLAY_CLASS}")) {
        if dom::claim_binding(&overlay) {
            on_click(&overlay, move || {
                dispatch(PanelEvent::OverlayActivated, breakpoint)
            });
        }
    }

    if let Some(close) = dom::query_document(&format!(".{NAV_CLOSE_CLASS}")) {
        if dom::claim_binding(&close) {
            on_click(&close, move || dispatch(PanelEvent::CloseActivated, breakpoint));
        }
    }
}

fn bind_window(config: &SiteConfig) {
    if WINDOW_BOUND.get() {
        return;
    }
    WINDOW_BOUND.set(true);

    let Some(window) = dom::window() else {
        return;
    };

    let breakpoint = config.breakpoint_px;
    let resize = Closure::<dyn FnMut()>::new(move || {
        if let Some(width_px) = dom::viewport_width() {
            dispatch(PanelEvent::Resized { width_px }, breakpoint);
        }
    });
    window
        .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
        .ok();
    resize.forget();

    let threshold = config.header_scroll_threshold_px as f64;
    let scroll = Closure::<dyn FnMut()>::new(move || {
        if let Some(region) = dom::query_document(HEADER_REGION_SELECTOR) {
            dom::set_class(&region, SCROLLED_CLASS, dom::scroll_offset() > threshold);
        }
    });
    window
        .add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())
        .ok();
    scroll.forget();
}

fn mark_active_links(menu: &Element) {
    let current_path = match dom::window() {
        Some(window) => window.location().pathname().unwrap_or_default(),
        None => return,
    };
    if let Ok(links) = menu.query_selector_all("a") {
        for link in dom::elements(&links) {
            let href = link.get_attribute("href").unwrap_or_default();
            dom::set_class(&link, ACTIVE_CLASS, is_active(&href, &current_path));
        }
    }
}

fn on_click<F: FnMut() + 'static>(target: &Element, mut handler: F) {
    let closure =
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| handler());
    target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .ok();
    // Handlers live for the page lifetime.
    closure.forget();
}
