//! Fragment loading and injection.
//!
//! One container is mutated per load. A per-container in-flight flag
//! serializes reloads: a second call while one is outstanding is refused
//! and logged rather than racing on the container content.

use std::cell::RefCell;
use std::collections::HashSet;

use fragkit_core::{
    error_block, fetch_first, loading_block, FragmentKind, FragmentRequest, LoadError, SiteConfig,
};
use tracing::{debug, warn};
use web_sys::Element;

use crate::fetcher::DomFetcher;
use crate::{app, dom, footer, header, rewrite};

thread_local! {
    static IN_FLIGHT: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Load one fragment into its placeholder. Returns `true` on success.
///
/// A missing container is a logged no-op; total candidate exhaustion leaves
/// a diagnostic block in the container. Neither throws.
pub async fn load_fragment(config: &SiteConfig, kind: FragmentKind) -> bool {
    let request = FragmentRequest::new(config, kind, app::script_dir().as_deref());

    let container = match dom::document().and_then(|d| d.get_element_by_id(&request.container_id)) {
        Some(container) => container,
        None => {
            warn!(
                fragment = %kind,
                "{}",
                LoadError::MissingContainer(request.container_id.clone())
            );
            return false;
        }
    };

    if !begin(&request.container_id) {
        warn!(fragment = %kind, "reload already in flight, refusing");
        return false;
    }
    let ok = run(config, &request, &container).await;
    finish(&request.container_id);
    ok
}

async fn run(config: &SiteConfig, request: &FragmentRequest, container: &Element) -> bool {
    container.set_inner_html(&loading_block(request.kind.as_str()));

    match fetch_first(&DomFetcher, &request.candidates).await {
        Ok(loaded) => {
            debug!(fragment = %request.kind, url = %loaded.url, attempts = loaded.attempts, "loaded");
            container.set_inner_html(&loaded.body);

            if config.hosting.multi_tenant && !config.hosting.path_prefix.is_empty() {
                rewrite::apply(container, &config.hosting.path_prefix);
            }

            match request.kind {
                FragmentKind::Header => header::init(config, container).await,
                FragmentKind::Footer => footer::init(config, container),
            }
            true
        }
        Err(err) => {
            warn!(fragment = %request.kind, error = %err, "all candidates failed");
            let tried = match err {
                LoadError::Exhausted { tried } => tried,
                LoadError::MissingContainer(_) => Vec::new(),
            };
            container.set_inner_html(&error_block(&request.filename, &tried));
            false
        }
    }
}

fn begin(container_id: &str) -> bool {
    IN_FLIGHT.with(|set| set.borrow_mut().insert(container_id.to_string()))
}

fn finish(container_id: &str) {
    IN_FLIGHT.with(|set| {
        set.borrow_mut().remove(container_id);
    });
}
