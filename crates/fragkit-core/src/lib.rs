//! FragKit core logic.
//!
//! Everything in this crate is host-testable: no DOM, no browser APIs.
//! The wasm glue in `fragkit-web` drives these pieces:
//!
//! - `SiteConfig` - explicit configuration, computed once and passed in
//! - `HostingContext` - local server vs. sub-path static hosting
//! - `FragmentRequest` - ordered candidate URLs for one fragment load
//! - `Fetch` / `fetch_first` - sequential first-success fallback over a seam
//! - `RetryPolicy` / `retry` - bounded fixed-interval retry combinator
//! - link classification, active-link matching, email validation, the
//!   mobile nav panel state machine, and the injected markup builders

pub mod prelude;

mod config;
mod error;
mod fetch;
mod fragment;
mod hosting;
mod links;
mod markup;
mod nav;
mod retry;
mod validate;

pub use config::*;
pub use error::*;
pub use fetch::*;
pub use fragment::*;
pub use hosting::*;
pub use links::*;
pub use markup::*;
pub use nav::*;
pub use retry::*;
pub use validate::*;
