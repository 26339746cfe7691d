//! Footer behaviors: copyright year, back-to-top, newsletter form.
//!
//! Every hook element is optional; a missing one silently disables only
//! its own feature.

use std::cell::Cell;

use fragkit_core::{is_valid_email, year_label, SiteConfig};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

const VISIBLE_CLASS: &str = "visible";
const CONFIRM_MESSAGE: &str = "Thanks for subscribing!";
const REJECT_MESSAGE: &str = "Please enter a valid email address.";

thread_local! {
    static SCROLL_BOUND: Cell<bool> = const { Cell::new(false) };
}

/// Wire the footer fragment after injection.
pub fn init(config: &SiteConfig, container: &Element) {
    set_year_markers(container);
    bind_back_to_top(config);
    bind_newsletter(container);
}

/// Every `[data-year]` element shows the current calendar year.
fn set_year_markers(container: &Element) {
    let year = year_label(js_sys::Date::now());
    if let Ok(markers) = container.query_selector_all("[data-year]") {
        for marker in dom::elements(&markers) {
            marker.set_text_content(Some(&year));
        }
    }
}

fn bind_back_to_top(config: &SiteConfig) {
    if let Some(button) = find_back_to_top() {
        if dom::claim_binding(&button) {
            let click = Closure::<dyn FnMut(Event)>::new(move |_: Event| scroll_to_top());
            button
                .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
                .ok();
            click.forget();
        }
    }

    // The visibility handler binds once and re-resolves the control per
    // event, so a footer reload swaps buttons transparently.
    if SCROLL_BOUND.get() {
        return;
    }
    SCROLL_BOUND.set(true);

    let Some(window) = dom::window() else {
        return;
    };
    let threshold = config.back_to_top_threshold_px as f64;
    let scroll = Closure::<dyn FnMut()>::new(move || {
        if let Some(button) = find_back_to_top() {
            dom::set_class(&button, VISIBLE_CLASS, dom::scroll_offset() > threshold);
        }
    });
    window
        .add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())
        .ok();
    scroll.forget();
}

fn find_back_to_top() -> Option<Element> {
    dom::query_document("#back-to-top").or_else(|| dom::query_document(".back-to-top"))
}

fn scroll_to_top() {
    let Some(window) = dom::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn bind_newsletter(container: &Element) {
    let Some(form) = dom::query(container, "form[data-newsletter]")
        .or_else(|| dom::query(container, "#newsletter-form"))
    else {
        return;
    };
    if !dom::claim_binding(&form) {
        return;
    }
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        return;
    };

    let handler_form = form.clone();
    let submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        handle_submit(&handler_form);
    });
    form.add_event_listener_with_callback("submit", submit.as_ref().unchecked_ref())
        .ok();
    submit.forget();
}

fn handle_submit(form: &HtmlFormElement) {
    let email = form
        .query_selector("input[type='email']")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default();

    let slot = message_slot(form);
    if is_valid_email(&email) {
        if let Some(slot) = slot {
            slot.set_text_content(Some(CONFIRM_MESSAGE));
        }
        form.reset();
    } else if let Some(slot) = slot {
        slot.set_text_content(Some(REJECT_MESSAGE));
    }
}

/// The form's message element, created on first use.
fn message_slot(form: &HtmlFormElement) -> Option<Element> {
    if let Some(existing) = form.query_selector(".form-message").ok().flatten() {
        return Some(existing);
    }
    let slot = dom::document()?.create_element("p").ok()?;
    slot.set_class_name("form-message");
    form.append_child(&slot).ok()?;
    Some(slot)
}
