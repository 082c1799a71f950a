//! Smooth scrolling for in-page navigation anchors.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{Query, listen};
use crate::config::Config;
use crate::consts::{ANCHOR_LINK_SELECTOR, HEADER_SELECTOR};
use crate::error::UiError;
use crate::scroll::{fragment_selector, header_offset, scroll_top};

#[derive(Clone, Copy)]
struct Offsets {
    padding: f64,
    fallback_header: f64,
}

/// Intercept clicks on `#fragment` navigation links.
///
/// # Errors
///
/// Returns [`UiError::MissingElement`] when the page has no such links.
pub(super) fn wire(window: &Window, document: &Document, config: &Config) -> Result<(), UiError> {
    let anchors = document.query_all(ANCHOR_LINK_SELECTOR);
    if anchors.is_empty() {
        return Err(UiError::missing(ANCHOR_LINK_SELECTOR));
    }
    let offsets = Offsets { padding: config.scroll_padding_px, fallback_header: config.fallback_header_px };
    for anchor in anchors {
        let window = window.clone();
        let document = document.clone();
        let target = anchor.clone();
        listen(&target, "click", move |event| on_click(&window, &document, &anchor, &event, offsets))?;
    }
    Ok(())
}

fn on_click(window: &Window, document: &Document, anchor: &Element, event: &Event, offsets: Offsets) {
    let href = anchor.get_attribute("href");
    let Some(selector) = fragment_selector(href.as_deref()) else {
        return;
    };
    // Unresolvable fragments keep the browser's default jump.
    let Some(target) = document.query(selector) else {
        return;
    };
    event.prevent_default();

    let measured = document
        .query(HEADER_SELECTOR)
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()));
    let scroll_y = window.scroll_y().unwrap_or_else(|err| {
        log::debug!("scroll: scrollY unavailable: {err:?}");
        0.0
    });
    let top = scroll_top(
        target.get_bounding_client_rect().top(),
        scroll_y,
        header_offset(measured, offsets.fallback_header),
        offsets.padding,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
