//! Hosting context detection.
//!
//! Static multi-tenant hosts (user pages on github.io and friends) publish a
//! site under a sub-path, which breaks root-relative URLs. The context is
//! derived once from the page location at boot and read-only afterwards.

use serde::{Deserialize, Serialize};

/// Host suffixes that publish sites under a per-project sub-path.
const MULTI_TENANT_SUFFIXES: &[&str] = &[".github.io", ".gitlab.io", ".pages.dev"];

/// Where the page is being served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostingContext {
    /// True when the host serves many sites under path prefixes.
    pub multi_tenant: bool,
    /// Leading path segment the site lives under, e.g. `/my-project`.
    /// Empty when the site is at the host root.
    pub path_prefix: String,
}

impl Default for HostingContext {
    fn default() -> Self {
        Self::local()
    }
}

impl HostingContext {
    /// A local or single-tenant host: no prefix, no rewriting.
    pub fn local() -> Self {
        Self {
            multi_tenant: false,
            path_prefix: String::new(),
        }
    }

    /// A multi-tenant host with an explicit sub-path prefix.
    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            multi_tenant: true,
            path_prefix: normalize_prefix(&prefix.into()),
        }
    }

    /// Detect the hosting context from the page host and path.
    ///
    /// A host ending in a known multi-tenant suffix is treated as sub-path
    /// hosting; the prefix is the first path segment, unless that segment is
    /// itself a document (`*.html`), in which case the site sits at the root.
    pub fn detect(host: &str, path: &str) -> Self {
        let host = host.to_ascii_lowercase();
        let multi_tenant = MULTI_TENANT_SUFFIXES.iter().any(|s| host.ends_with(s));
        if !multi_tenant {
            return Self::local();
        }

        let first_segment = path
            .split('/')
            .find(|s| !s.is_empty())
            .unwrap_or_default();
        let path_prefix = if first_segment.is_empty() || first_segment.ends_with(".html") {
            String::new()
        } else {
            format!("/{first_segment}")
        };

        Self {
            multi_tenant: true,
            path_prefix,
        }
    }
}

/// Force a single leading slash and no trailing slash.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Detection Tests ===

    #[test]
    fn test_detect_local_host() {
        let ctx = HostingContext::detect("localhost:8080", "/about.html");

        assert!(!ctx.multi_tenant);
        assert!(ctx.path_prefix.is_empty());
    }

    #[test]
    fn test_detect_custom_domain() {
        let ctx = HostingContext::detect("www.example.com", "/docs/intro.html");

        assert!(!ctx.multi_tenant);
        assert!(ctx.path_prefix.is_empty());
    }

    #[test]
    fn test_detect_multi_tenant_with_sub_path() {
        let ctx = HostingContext::detect("alice.github.io", "/my-project/about.html");

        assert!(ctx.multi_tenant);
        assert_eq!(ctx.path_prefix, "/my-project");
    }

    #[test]
    fn test_detect_multi_tenant_without_sub_path() {
        // User-root site: first segment is a document, not a project prefix.
        let ctx = HostingContext::detect("alice.github.io", "/index.html");

        assert!(ctx.multi_tenant);
        assert!(ctx.path_prefix.is_empty());
    }

    #[test]
    fn test_detect_multi_tenant_root_path() {
        let ctx = HostingContext::detect("alice.pages.dev", "/");

        assert!(ctx.multi_tenant);
        assert!(ctx.path_prefix.is_empty());
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        let ctx = HostingContext::detect("Alice.GitHub.IO", "/site/");

        assert!(ctx.multi_tenant);
        assert_eq!(ctx.path_prefix, "/site");
    }

    // === Constructor Tests ===

    #[test]
    fn test_prefixed_normalizes_slashes() {
        assert_eq!(HostingContext::prefixed("docs/").path_prefix, "/docs");
        assert_eq!(HostingContext::prefixed("/docs").path_prefix, "/docs");
        assert_eq!(HostingContext::prefixed("/").path_prefix, "");
    }
}
