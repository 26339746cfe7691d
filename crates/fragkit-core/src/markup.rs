//! Markup the loader injects itself: the transient loading placeholder, the
//! diagnostic error block, and the last-resort synthetic navigation.

/// Element id of the nav toggle control.
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
/// Element id of the nav panel.
pub const NAV_MENU_ID: &str = "nav-menu";
/// Class fallbacks for the same elements, and the link/overlay hooks.
pub const NAV_TOGGLE_CLASS: &str = "nav-toggle";
pub const NAV_MENU_CLASS: &str = "nav-menu";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const NAV_OVERLAY_CLASS: &str = "nav-overlay";
pub const NAV_CLOSE_CLASS: &str = "nav-close";

/// Text for `[data-year]` markers: the calendar year of an
/// epoch-milliseconds timestamp. The web crate passes the browser clock.
pub fn year_label(epoch_ms: f64) -> String {
    use chrono::Datelike;

    chrono::DateTime::from_timestamp_millis(epoch_ms as i64)
        .map(|timestamp| timestamp.year())
        .unwrap_or(1970)
        .to_string()
}

/// Minimal HTML escaping for text interpolated into injected markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Transient placeholder written into the container before fetching.
pub fn loading_block(fragment_name: &str) -> String {
    format!(
        "<div style=\"text-align:center;padding:20px;color:#6c757d;font-style:italic;\">\
         Loading {}&hellip;</div>",
        escape_html(fragment_name)
    )
}

/// Diagnostic block shown on total load failure, listing every URL tried.
/// The page stays usable; this is debugging aid, not an error page.
pub fn error_block(filename: &str, tried: &[String]) -> String {
    let mut items = String::new();
    for url in tried {
        items.push_str("<li><code>");
        items.push_str(&escape_html(url));
        items.push_str("</code></li>");
    }
    format!(
        "<div style=\"background:#fff3cd;border:1px solid #ffeaa7;color:#856404;\
         padding:15px;margin:10px 0;border-radius:4px;\">\
         <strong>Component loading error</strong><br>\
         Failed to load <code>{}</code>. Tried:<ul>{}</ul>\
         <small>Check file paths and server configuration</small></div>",
        escape_html(filename),
        items
    )
}

/// Last-resort navigation markup, constructed when polling and class
/// fallbacks both fail to find the expected header elements.
pub fn fallback_nav() -> String {
    format!(
        "<button id=\"{NAV_TOGGLE_ID}\" class=\"{NAV_TOGGLE_CLASS}\" \
         aria-expanded=\"false\" aria-label=\"Menu\">&#9776;</button>\
         <nav id=\"{NAV_MENU_ID}\" class=\"{NAV_MENU_CLASS}\">\
         <a class=\"{NAV_LINK_CLASS}\" href=\"index.html\">Home</a>\
         </nav>"
    )
}
