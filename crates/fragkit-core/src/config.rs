//! Site configuration.
//!
//! One explicit value, built once at boot and passed by reference into the
//! loader and the behavior initializers. Nothing reads ambient globals.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::hosting::HostingContext;
use crate::retry::RetryPolicy;

/// Configuration for the component loader and page behaviors.
///
/// Every field has a sensible default; the web crate merges an optional
/// JSON override block over `SiteConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Filename of the header fragment.
    pub header_file: String,
    /// Filename of the footer fragment.
    pub footer_file: String,
    /// Element id of the header placeholder.
    pub header_container: String,
    /// Element id of the footer placeholder.
    pub footer_container: String,
    /// Subfolder also tried when resolving fragment URLs.
    pub asset_dir: String,
    /// Viewport width above which the mobile panel force-closes.
    pub breakpoint_px: u32,
    /// Scroll offset past which the page header gets a "scrolled" class.
    pub header_scroll_threshold_px: u32,
    /// Scroll offset past which the back-to-top control becomes visible.
    pub back_to_top_threshold_px: u32,
    /// Emit diagnostic logging.
    pub debug: bool,
    /// Hosting context, detected once from the page location.
    pub hosting: HostingContext,
    /// Polling policy for late-arriving fragment elements.
    pub retry: RetryPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_file: "header.html".to_string(),
            footer_file: "footer.html".to_string(),
            header_container: "header-container".to_string(),
            footer_container: "footer-container".to_string(),
            asset_dir: "components".to_string(),
            breakpoint_px: 768,
            header_scroll_threshold_px: 50,
            back_to_top_threshold_px: 300,
            debug: false,
            hosting: HostingContext::local(),
            retry: RetryPolicy::default(),
        }
    }
}

impl SiteConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fragment filenames.
    pub fn with_files(mut self, header: impl Into<String>, footer: impl Into<String>) -> Self {
        self.header_file = header.into();
        self.footer_file = footer.into();
        self
    }

    /// Set the placeholder container ids.
    pub fn with_containers(mut self, header: impl Into<String>, footer: impl Into<String>) -> Self {
        self.header_container = header.into();
        self.footer_container = footer.into();
        self
    }

    /// Set the asset subfolder tried when resolving fragment URLs.
    pub fn with_asset_dir(mut self, dir: impl Into<String>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Set the hosting context.
    pub fn with_hosting(mut self, hosting: HostingContext) -> Self {
        self.hosting = hosting;
        self
    }

    /// Set the polling policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Enable or disable diagnostic logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Parse an inline JSON override block, falling back to defaults when
    /// the block is malformed.
    ///
    /// The second value reports whether the override supplied its own
    /// hosting context, and is only `true` when the parse succeeded; a
    /// rejected block must not suppress detected hosting.
    pub fn from_json_override(raw: &str) -> (Self, bool) {
        let value = match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "config block is not valid JSON, using defaults");
                return (Self::default(), false);
            }
        };
        let has_hosting = value.get("hosting").is_some();
        match serde_json::from_value::<Self>(value) {
            Ok(parsed) => (parsed, has_hosting),
            Err(err) => {
                warn!(error = %err, "invalid config block, using defaults");
                (Self::default(), false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === SiteConfig Tests ===

    #[test]
    fn test_config_defaults() {
        let config = SiteConfig::default();

        assert_eq!(config.header_file, "header.html");
        assert_eq!(config.footer_file, "footer.html");
        assert_eq!(config.header_container, "header-container");
        assert_eq!(config.footer_container, "footer-container");
        assert_eq!(config.asset_dir, "components");
        assert_eq!(config.breakpoint_px, 768);
        assert!(!config.debug);
        assert!(!config.hosting.multi_tenant);
    }

    #[test]
    fn test_config_builder_chain() {
        let config = SiteConfig::new()
            .with_files("top.html", "bottom.html")
            .with_containers("top-slot", "bottom-slot")
            .with_asset_dir("partials")
            .with_debug(true);

        assert_eq!(config.header_file, "top.html");
        assert_eq!(config.footer_file, "bottom.html");
        assert_eq!(config.header_container, "top-slot");
        assert_eq!(config.footer_container, "bottom-slot");
        assert_eq!(config.asset_dir, "partials");
        assert!(config.debug);
    }

    #[test]
    fn test_config_partial_json_override() {
        // Partial documents deserialize with the remaining defaults.
        let (config, hosting_overridden) =
            SiteConfig::from_json_override(r#"{ "header_file": "nav.html", "debug": true }"#);

        assert_eq!(config.header_file, "nav.html");
        assert!(config.debug);
        assert_eq!(config.footer_file, "footer.html");
        assert_eq!(config.retry, RetryPolicy::default());
        assert!(!hosting_overridden);
    }

    #[test]
    fn test_config_override_with_hosting() {
        let (config, hosting_overridden) = SiteConfig::from_json_override(
            r#"{ "hosting": { "multi_tenant": true, "path_prefix": "/site" } }"#,
        );

        assert!(hosting_overridden);
        assert!(config.hosting.multi_tenant);
        assert_eq!(config.hosting.path_prefix, "/site");
    }

    #[test]
    fn test_config_invalid_json_keeps_defaults() {
        let (config, hosting_overridden) = SiteConfig::from_json_override("{ hosting: nope");

        assert_eq!(config.header_file, "header.html");
        assert!(!hosting_overridden);
    }

    #[test]
    fn test_config_rejected_block_does_not_claim_hosting() {
        // The block names hosting but fails to parse as a whole; detected
        // hosting must still win, so the override flag stays off.
        let (config, hosting_overridden) =
            SiteConfig::from_json_override(r#"{ "hosting": 5, "debug": true }"#);

        assert_eq!(config.hosting, HostingContext::local());
        assert!(!config.debug);
        assert!(!hosting_overridden);
    }
}
