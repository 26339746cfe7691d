//! Fragment requests and candidate URL construction.
//!
//! Static hosting makes the fragment location ambiguous: the page may sit
//! next to the fragment, under a sub-path, or the fragment may live in an
//! asset subfolder. Rather than guessing once, each load carries an ordered
//! candidate list that the fallback loop walks until one URL answers.

use crate::config::SiteConfig;
use crate::hosting::HostingContext;

/// Which fragment a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Header,
    Footer,
}

impl FragmentKind {
    /// Stable name, used in logs and loading placeholders.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
        }
    }

    /// The configured container id for this fragment.
    pub fn container_id<'a>(&self, config: &'a SiteConfig) -> &'a str {
        match self {
            Self::Header => &config.header_container,
            Self::Footer => &config.footer_container,
        }
    }

    /// The configured filename for this fragment.
    pub fn filename<'a>(&self, config: &'a SiteConfig) -> &'a str {
        match self {
            Self::Header => &config.header_file,
            Self::Footer => &config.footer_file,
        }
    }
}

impl std::fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fragment load attempt: target container plus the ordered URLs to try.
/// Created per load and discarded after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRequest {
    pub kind: FragmentKind,
    pub container_id: String,
    pub filename: String,
    pub candidates: Vec<String>,
}

impl FragmentRequest {
    /// Build a request from the configuration.
    ///
    /// `script_dir` is the directory of the script element that loaded the
    /// bundle, when one could be identified (trailing slash included).
    pub fn new(config: &SiteConfig, kind: FragmentKind, script_dir: Option<&str>) -> Self {
        let filename = kind.filename(config);
        Self {
            kind,
            container_id: kind.container_id(config).to_string(),
            filename: filename.to_string(),
            candidates: candidate_urls(filename, &config.hosting, &config.asset_dir, script_dir),
        }
    }
}

/// Ordered, deduplicated candidate URLs for one fragment.
///
/// Order is the contract: same-directory first, then script-relative, then
/// the asset subfolder, then site-root-absolute (hosting prefix applied),
/// then the explicit `./` relative form.
pub fn candidate_urls(
    filename: &str,
    hosting: &HostingContext,
    asset_dir: &str,
    script_dir: Option<&str>,
) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::with_capacity(5);
    let mut push = |url: String| {
        if !candidates.contains(&url) {
            candidates.push(url);
        }
    };

    push(filename.to_string());

    if let Some(dir) = script_dir {
        if dir.ends_with('/') {
            push(format!("{dir}{filename}"));
        } else {
            push(format!("{dir}/{filename}"));
        }
    }

    let asset_dir = asset_dir.trim_matches('/');
    if !asset_dir.is_empty() {
        push(format!("{asset_dir}/{filename}"));
    }

    if hosting.multi_tenant && !hosting.path_prefix.is_empty() {
        push(format!("{}/{filename}", hosting.path_prefix));
    } else {
        push(format!("/{filename}"));
    }

    push(format!("./{filename}"));

    candidates
}
