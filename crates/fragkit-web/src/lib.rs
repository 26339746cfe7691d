//! FragKit browser glue.
//!
//! Compiled for `wasm32` only; on other targets this crate is empty so the
//! workspace builds and tests on the host. At module start the loader runs
//! for the header and footer fragments concurrently; each injection then
//! wires its own page behaviors.
//!
//! External surface (reachable from JS):
//! - `reload_header()` / `reload_footer()` - force a refresh of one
//!   fragment, e.g. after an authentication state change; resolves to a
//!   boolean success flag
//! - `set_active_link(page_id)` - manually mark a navigation link active

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod fetcher;
#[cfg(target_arch = "wasm32")]
mod footer;
#[cfg(target_arch = "wasm32")]
mod header;
#[cfg(target_arch = "wasm32")]
mod inject;
#[cfg(target_arch = "wasm32")]
mod rewrite;

#[cfg(target_arch = "wasm32")]
pub use wasm_entry::*;

#[cfg(target_arch = "wasm32")]
mod wasm_entry {
    use fragkit_core::FragmentKind;
    use wasm_bindgen::prelude::*;

    use crate::{app, header, inject};

    /// Module entry point: install diagnostics, then load both fragments.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        let config = app::config();
        if config.debug {
            tracing_wasm::set_as_global_default();
        }
        wasm_bindgen_futures::spawn_local(app::boot());
    }

    /// Reload the header fragment. Resolves to `true` on success.
    #[wasm_bindgen]
    pub fn reload_header() -> js_sys::Promise {
        reload(FragmentKind::Header)
    }

    /// Reload the footer fragment. Resolves to `true` on success.
    #[wasm_bindgen]
    pub fn reload_footer() -> js_sys::Promise {
        reload(FragmentKind::Footer)
    }

    /// Mark the navigation link matching `page_id` as active, overriding
    /// the automatic current-path match.
    #[wasm_bindgen]
    pub fn set_active_link(page_id: &str) {
        header::set_active_link(page_id);
    }

    fn reload(kind: FragmentKind) -> js_sys::Promise {
        wasm_bindgen_futures::future_to_promise(async move {
            let config = app::config();
            let ok = inject::load_fragment(&config, kind).await;
            Ok::<_, JsValue>(JsValue::from_bool(ok))
        })
    }
}
