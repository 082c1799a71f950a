//! Smooth scrolling to in-page anchors below a sticky header.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// The selector to look up for an anchor `href`, or `None` when the link
/// should be left to the browser (empty or bare `#`).
#[must_use]
pub fn fragment_selector(href: Option<&str>) -> Option<&str> {
    match href {
        None | Some("" | "#") => None,
        Some(href) if href.starts_with('#') => Some(href),
        Some(_) => None,
    }
}

/// Header height to subtract, falling back when the header is absent or
/// has no measured height.
#[must_use]
pub fn header_offset(measured: Option<f64>, fallback: f64) -> f64 {
    match measured {
        Some(h) if h > 0.0 => h,
        _ => fallback,
    }
}

/// Document-space scroll position that puts the target just below the header.
#[must_use]
pub fn scroll_top(target_viewport_top: f64, scroll_y: f64, header_height: f64, padding: f64) -> f64 {
    target_viewport_top + scroll_y - header_height - padding
}
