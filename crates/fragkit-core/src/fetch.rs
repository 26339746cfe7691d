//! Fetch seam and the ordered-fallback loop.
//!
//! The loader never talks to the network directly; it walks an ordered
//! candidate list through the `Fetch` trait and stops at the first success.
//! The web crate implements `Fetch` over the browser fetch API, tests
//! implement it with scripted responses.

use async_trait::async_trait;
use tracing::debug;

use crate::error::LoadError;

/// A single fetch attempt failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The response carried a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
}

/// Text fetcher for fragment candidates.
#[async_trait(?Send)]
pub trait Fetch {
    /// Fetch `url` and return the response body on a success status.
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Outcome of a successful fallback walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    /// The candidate that succeeded.
    pub url: String,
    /// Response body.
    pub body: String,
    /// Number of fetch attempts made, including the successful one.
    pub attempts: usize,
}

/// Try `candidates` strictly in order, short-circuiting on the first success.
///
/// Per-candidate failures are logged and swallowed; only full exhaustion is
/// an error, and it carries every URL tried for the diagnostic block.
pub async fn fetch_first<F>(fetcher: &F, candidates: &[String]) -> Result<Loaded, LoadError>
where
    F: Fetch + ?Sized,
{
    for (index, url) in candidates.iter().enumerate() {
        debug!(url = %url, "trying candidate");
        match fetcher.get_text(url).await {
            Ok(body) => {
                debug!(url = %url, "candidate succeeded");
                return Ok(Loaded {
                    url: url.clone(),
                    body,
                    attempts: index + 1,
                });
            }
            Err(err) => {
                debug!(url = %url, error = %err, "candidate failed, advancing");
            }
        }
    }

    Err(LoadError::Exhausted {
        tried: candidates.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    /// Scripted fetcher: one canned result per expected URL, in call order.
    struct ScriptedFetch {
        script: Vec<Result<String, FetchError>>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedFetch {
        fn new(script: Vec<Result<String, FetchError>>) -> Self {
            Self {
                script,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Fetch for ScriptedFetch {
        async fn get_text(&self, url: &str) -> Result<String, FetchError> {
            let index = self.calls.borrow().len();
            self.calls.borrow_mut().push(url.to_string());
            self.script[index].clone()
        }
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // === Fallback Loop Tests ===

    #[test]
    fn test_first_candidate_succeeds() {
        let fetcher = ScriptedFetch::new(vec![Ok("<header/>".to_string())]);
        let candidates = urls(&["header.html", "/header.html"]);

        let loaded = block_on(fetch_first(&fetcher, &candidates)).unwrap();

        assert_eq!(loaded.url, "header.html");
        assert_eq!(loaded.body, "<header/>");
        assert_eq!(loaded.attempts, 1);
        assert_eq!(fetcher.calls(), vec!["header.html"]);
    }

    #[test]
    fn test_nth_candidate_succeeds_after_exactly_n_attempts() {
        let fetcher = ScriptedFetch::new(vec![
            Err(FetchError::Status(404)),
            Err(FetchError::Network("connection refused".to_string())),
            Ok("<footer/>".to_string()),
        ]);
        let candidates = urls(&["footer.html", "components/footer.html", "/footer.html", "./footer.html"]);

        let loaded = block_on(fetch_first(&fetcher, &candidates)).unwrap();

        assert_eq!(loaded.attempts, 3);
        assert_eq!(loaded.url, "/footer.html");
        assert_eq!(loaded.body, "<footer/>");
        // The fourth candidate must never be touched.
        assert_eq!(fetcher.calls().len(), 3);
    }

    #[test]
    fn test_exhaustion_reports_every_url_tried() {
        let fetcher = ScriptedFetch::new(vec![
            Err(FetchError::Status(404)),
            Err(FetchError::Status(500)),
            Err(FetchError::Network("dns".to_string())),
        ]);
        let candidates = urls(&["a.html", "b/a.html", "/a.html"]);

        let err = block_on(fetch_first(&fetcher, &candidates)).unwrap_err();

        assert_eq!(
            err,
            LoadError::Exhausted {
                tried: candidates.clone()
            }
        );
        assert_eq!(fetcher.calls(), candidates);
    }

    #[test]
    fn test_empty_candidate_list_is_exhaustion() {
        let fetcher = ScriptedFetch::new(vec![]);

        let err = block_on(fetch_first(&fetcher, &[])).unwrap_err();

        assert_eq!(err, LoadError::Exhausted { tried: vec![] });
    }
}
