//! Boot sequence and one-time configuration detection.
//!
//! The configuration is computed exactly once: defaults, overridden by an
//! optional inline JSON block, with the hosting context detected from the
//! page location unless the override supplies one. Everything downstream
//! receives the value explicitly.

use std::cell::OnceCell;
use std::rc::Rc;

use fragkit_core::{FragmentKind, HostingContext, SiteConfig};
use tracing::debug;

use crate::{dom, inject};

/// Element id of the optional inline JSON configuration block.
const CONFIG_BLOCK_ID: &str = "fragkit-config";

thread_local! {
    static CONFIG: OnceCell<Rc<SiteConfig>> = const { OnceCell::new() };
}

/// The session configuration, detected on first use.
pub fn config() -> Rc<SiteConfig> {
    CONFIG.with(|cell| cell.get_or_init(|| Rc::new(detect_config())).clone())
}

/// Load both fragments; the two loads are independent and run concurrently.
pub async fn boot() {
    let config = config();
    debug!("starting component loading");
    let (header_ok, footer_ok) = futures::join!(
        inject::load_fragment(&config, FragmentKind::Header),
        inject::load_fragment(&config, FragmentKind::Footer),
    );
    debug!(header_ok, footer_ok, "component loading completed");
}

fn detect_config() -> SiteConfig {
    let detected = detect_hosting();

    let (mut config, hosting_overridden) = match config_block_text() {
        Some(raw) => SiteConfig::from_json_override(&raw),
        None => (SiteConfig::default(), false),
    };

    if !hosting_overridden {
        config.hosting = detected;
    }
    config
}

fn config_block_text() -> Option<String> {
    dom::document()?
        .get_element_by_id(CONFIG_BLOCK_ID)?
        .text_content()
}

fn detect_hosting() -> HostingContext {
    let location = match dom::window() {
        Some(window) => window.location(),
        None => return HostingContext::local(),
    };
    let host = location.host().unwrap_or_default();
    let path = location.pathname().unwrap_or_default();
    HostingContext::detect(&host, &path)
}

/// Directory of the script element that loaded the bundle, trailing slash
/// included. Module scripts leave `document.currentScript` null, so a tagged
/// `<script data-fragkit src=…>` is honored as a fallback.
pub fn script_dir() -> Option<String> {
    let document = dom::document()?;
    let src = document
        .current_script()
        .map(|script| script.src())
        .filter(|src| !src.is_empty())
        .or_else(|| {
            document
                .query_selector("script[data-fragkit]")
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("src"))
        })?;
    let cut = src.rfind('/')?;
    Some(src[..=cut].to_string())
}
