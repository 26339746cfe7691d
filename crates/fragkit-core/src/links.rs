//! Anchor classification, sub-path rewriting, and active-link matching.
//!
//! Rewriting rule: only root-relative targets (single leading `/`) are
//! rewritten, by prefixing the hosting path. Document-relative targets
//! already resolve correctly under a sub-path; rewriting them would
//! double-apply the prefix on nested pages.

/// Schemes and forms that are never rewritten.
const SKIP_PREFIXES: &[&str] = &[
    "http://",
    "https://",
    "//",
    "#",
    "mailto:",
    "tel:",
    "javascript:",
    "data:",
];

/// Whether `href` should be rewritten for a site served under `prefix`.
pub fn should_rewrite(href: &str, prefix: &str) -> bool {
    if prefix.is_empty() || href.is_empty() {
        return false;
    }
    if SKIP_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return false;
    }
    // Root-relative only, and not already carrying the prefix.
    href.starts_with('/') && href != prefix && !href.starts_with(&format!("{prefix}/"))
}

/// Rewrite `href` by prefixing the hosting path, when the rule applies.
pub fn rewrite_href(href: &str, prefix: &str) -> Option<String> {
    should_rewrite(href, prefix).then(|| format!("{prefix}{href}"))
}

/// The final path segment used for active-link matching.
///
/// Query and hash are stripped; an empty segment (root, or a trailing
/// slash) normalizes to `index.html`.
pub fn page_segment(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    if segment.is_empty() {
        "index.html"
    } else {
        segment
    }
}

/// Whether an anchor target points at the current page.
///
/// Deliberately segment-equality only: the original's substring matching
/// marked `/about` active on `/about-us`.
pub fn is_active(href: &str, current_path: &str) -> bool {
    if href.is_empty() || SKIP_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return false;
    }
    page_segment(href) == page_segment(current_path)
}

/// Whether an anchor matches a manually supplied page identifier.
///
/// Used by the external `set_active_link` operation: the identifier is
/// compared against the anchor's `data-page` value first, then against the
/// target's final segment with any `.html` suffix ignored.
pub fn matches_page_id(href: &str, data_page: Option<&str>, page_id: &str) -> bool {
    if let Some(data_page) = data_page {
        return data_page == page_id;
    }
    let segment = page_segment(href);
    segment == page_id || segment.strip_suffix(".html") == Some(page_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Rewrite Rule Tests ===

    #[test]
    fn test_rewrites_root_relative() {
        assert_eq!(
            rewrite_href("/about.html", "/my-project"),
            Some("/my-project/about.html".to_string())
        );
    }

    #[test]
    fn test_leaves_document_relative_alone() {
        assert_eq!(rewrite_href("about.html", "/my-project"), None);
        assert_eq!(rewrite_href("./about.html", "/my-project"), None);
        assert_eq!(rewrite_href("../about.html", "/my-project"), None);
    }

    #[test]
    fn test_skips_absolute_and_special_schemes() {
        for href in [
            "https://example.com/x",
            "http://example.com/x",
            "//cdn.example.com/x.js",
            "#top",
            "mailto:hi@example.com",
            "tel:+15551234",
            "javascript:void(0)",
            "data:text/plain,hi",
        ] {
            assert_eq!(rewrite_href(href, "/my-project"), None, "href: {href}");
        }
    }

    #[test]
    fn test_skips_already_prefixed() {
        assert_eq!(rewrite_href("/my-project/about.html", "/my-project"), None);
        assert_eq!(rewrite_href("/my-project", "/my-project"), None);
        // A sibling path that merely shares the string start is still rewritten.
        assert_eq!(
            rewrite_href("/my-project-docs/x.html", "/my-project"),
            Some("/my-project/my-project-docs/x.html".to_string())
        );
    }

    #[test]
    fn test_empty_prefix_never_rewrites() {
        assert_eq!(rewrite_href("/about.html", ""), None);
    }

    // === Active Link Tests ===

    #[test]
    fn test_page_segment_normalization() {
        assert_eq!(page_segment("/"), "index.html");
        assert_eq!(page_segment(""), "index.html");
        assert_eq!(page_segment("/docs/"), "index.html");
        assert_eq!(page_segment("/docs/intro.html"), "intro.html");
        assert_eq!(page_segment("intro.html?x=1#top"), "intro.html");
    }

    #[test]
    fn test_active_on_matching_segment() {
        assert!(is_active("about.html", "/site/about.html"));
        assert!(is_active("/site/about.html", "/site/about.html"));
        assert!(is_active("index.html", "/"));
    }

    #[test]
    fn test_not_active_on_other_pages() {
        assert!(!is_active("about.html", "/site/contact.html"));
        assert!(!is_active("#section", "/site/about.html"));
        // No substring matching.
        assert!(!is_active("/about", "/about-us"));
    }

    #[test]
    fn test_external_targets_are_never_active() {
        // Segment equality alone would match these; off-site and
        // non-navigational targets must stay unmarked.
        assert!(!is_active("https://other.site/about.html", "/about.html"));
        assert!(!is_active("http://other.site/about.html", "/about.html"));
        assert!(!is_active("//cdn.example.com/about.html", "/about.html"));
        assert!(!is_active("mailto:about.html@example.com", "/index.html"));
        assert!(!is_active("tel:+15551234", "/index.html"));
    }

    // === Manual Page Id Tests ===

    #[test]
    fn test_matches_data_page_first() {
        assert!(matches_page_id("whatever.html", Some("pricing"), "pricing"));
        assert!(!matches_page_id("pricing.html", Some("other"), "pricing"));
    }

    #[test]
    fn test_matches_filename_without_extension() {
        assert!(matches_page_id("pricing.html", None, "pricing"));
        assert!(matches_page_id("pricing.html", None, "pricing.html"));
        assert!(!matches_page_id("about.html", None, "pricing"));
    }
}
