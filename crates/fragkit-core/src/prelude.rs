//! Convenient re-exports for consumers of fragkit-core.

pub use crate::config::SiteConfig;
pub use crate::error::LoadError;
pub use crate::fetch::{fetch_first, Fetch, FetchError, Loaded};
pub use crate::fragment::{FragmentKind, FragmentRequest};
pub use crate::hosting::HostingContext;
pub use crate::retry::{retry, RetryPolicy};
