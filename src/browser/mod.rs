//! DOM bindings for the controllers.
//!
//! Each submodule exposes a `wire` function that looks up its elements,
//! attaches listeners for the lifetime of the page, and returns
//! [`UiError::MissingElement`] when the page lacks what it needs. [`boot`]
//! wires them independently, so a page without a contact form still gets a
//! working menu.
//!
//! ERROR HANDLING
//! ==============
//! DOM calls that can throw go through [`LogJsErr::log_err`]: the failure is
//! logged and the handler carries on. Nothing is rethrown into the page.

mod contact;
mod nav;
mod post;
mod scroll;
mod storage;
mod theme;

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::config::Config;
use crate::consts::CONFIG_META_SELECTOR;
use crate::error::UiError;

/// Wire every controller once the document has been parsed.
pub fn boot() {
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        // No logger of ours is installed, so report through the console directly.
        web_sys::console::warn_1(&JsValue::from_str(&format!("boot: logger not installed: {err}")));
    }

    let Some(window) = web_sys::window() else {
        log::warn!("boot: {}", UiError::NoWindow);
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("boot: window has no document");
        return;
    };

    if document.ready_state() != "loading" {
        wire_all(&window, &document);
        return;
    }

    let mut pending = Some((window, document.clone()));
    let result = listen(&document, "DOMContentLoaded", move |_| {
        if let Some((window, document)) = pending.take() {
            wire_all(&window, &document);
        }
    });
    if let Err(err) = result {
        log::warn!("boot: {err}");
    }
}

fn wire_all(window: &Window, document: &Document) {
    let config = Rc::new(load_config(document));
    log::set_max_level(config.log_level().to_level_filter());

    report("theme", theme::wire(window, document, &config));
    report("nav", nav::wire(window, document, &config));
    report("scroll", scroll::wire(window, document, &config));
    report("contact", contact::wire(document, &config));
    report("prefetch", post::wire_prefetch(window, document));
    report("post dialog", post::wire(document, &config));
}

fn report(feature: &str, result: Result<(), UiError>) {
    match result {
        Ok(()) => log::debug!("{feature}: ready"),
        Err(err) => log::debug!("{feature}: disabled ({err})"),
    }
}

fn load_config(document: &Document) -> Config {
    let content = document.query(CONFIG_META_SELECTOR).and_then(|meta| meta.get_attribute("content"));
    match Config::from_meta(content.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config: {err}; using defaults");
            Config::default()
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Log a failed DOM call instead of propagating it.
pub(crate) trait LogJsErr {
    fn log_err(self, context: &str);
}

impl<T> LogJsErr for Result<T, JsValue> {
    fn log_err(self, context: &str) {
        if let Err(err) = self {
            log::warn!("{context}: {err:?}");
        }
    }
}

pub(crate) fn js_err(err: JsValue) -> UiError {
    UiError::Js(format!("{err:?}"))
}

/// Attach `handler` to `target` for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], registered as a passive listener.
pub(crate) fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

pub(crate) fn by_id(document: &Document, id: &str) -> Result<Element, UiError> {
    document.get_element_by_id(id).ok_or_else(|| UiError::missing(format!("#{id}")))
}

/// Downcast an element, naming it in the error.
pub(crate) fn cast<T: JsCast>(element: Element, what: &str) -> Result<T, UiError> {
    element
        .dyn_into::<T>()
        .map_err(|_| UiError::Js(format!("{what} has an unexpected element type")))
}

pub(crate) fn focus(element: &Element) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        el.focus().log_err("focus");
    }
}

/// Selector queries that log and swallow invalid-selector errors.
pub(crate) trait Query {
    fn query(&self, selector: &str) -> Option<Element>;
    fn query_all(&self, selector: &str) -> Vec<Element>;
}

impl Query for Document {
    fn query(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).unwrap_or_else(|err| {
            log::debug!("query {selector:?}: {err:?}");
            None
        })
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                log::debug!("query all {selector:?}: {err:?}");
                Vec::new()
            }
        }
    }
}

impl Query for Element {
    fn query(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).unwrap_or_else(|err| {
            log::debug!("query {selector:?}: {err:?}");
            None
        })
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                log::debug!("query all {selector:?}: {err:?}");
                Vec::new()
            }
        }
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
