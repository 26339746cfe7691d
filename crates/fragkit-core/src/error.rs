//! Error types for fragment loading.

use thiserror::Error;

/// Errors surfaced by a fragment load.
///
/// Per-candidate fetch failures are not here: they are swallowed by the
/// fallback loop and only reappear inside `Exhausted`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The placeholder container is absent from the page.
    #[error("container #{0} not found, skipping")]
    MissingContainer(String),

    /// Every candidate URL failed.
    #[error("no candidate url succeeded after {} attempts", .tried.len())]
    Exhausted {
        /// Every URL attempted, in order.
        tried: Vec<String>,
    },
}
