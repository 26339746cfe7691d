//! `Fetch` implementation over the browser fetch API.

use async_trait::async_trait;
use fragkit_core::{Fetch, FetchError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetches fragment candidates with `window.fetch`. Relative candidate URLs
/// resolve against the document base, exactly like a hand-written script.
pub struct DomFetcher;

#[async_trait(?Send)]
impl Fetch for DomFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let window = web_sys::window().ok_or_else(|| no_window())?;

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(js_error)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| FetchError::Network("fetch did not yield a Response".to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        Ok(text.as_string().unwrap_or_default())
    }
}

fn no_window() -> FetchError {
    FetchError::Network("no window object".to_string())
}

fn js_error(value: JsValue) -> FetchError {
    FetchError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}
