//! Blog post dialog: fetch-and-show on click, prefetch on hover, and focus
//! management while the dialog is open.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlDialogElement, HtmlElement, KeyboardEvent, RequestCache, RequestCredentials, Window};

use super::{LogJsErr, Query, by_id, cast, focus, js_err, listen, listen_passive};
use crate::config::Config;
use crate::consts::{
    DIALOG_CLOSE_ID, DIALOG_CONTENT_ID, DIALOG_FOCUS_SELECTOR, DIALOG_ID, DIALOG_META_ID, DIALOG_REPO_ID,
    DIALOG_TITLE_ID, FOCUSABLE_SELECTOR, FRAGMENT_ARTICLE_SELECTOR, LINK_META_SELECTOR, LINK_TITLE_SELECTOR,
    POST_ITEM_SELECTOR, POST_LINK_SELECTOR, POST_SLUG_ATTR, PREFETCH_LINK_SELECTOR,
};
use crate::error::UiError;
use crate::focus::{FocusMemory, FocusScope, TabDirection};
use crate::post::{LinkContext, PostBody, PostContent, PostFragment, PrefetchRegistry, is_success, resolve_url};

/// A detached element holding a fetched post fragment.
struct ElementFragment(Element);

impl PostFragment for ElementFragment {
    fn text(&self, selector: &str) -> Option<String> {
        self.0.query(selector).and_then(|el| el.text_content())
    }

    fn inner_html_of(&self, selector: &str) -> Option<String> {
        self.0.query(selector).map(|el| el.inner_html())
    }

    fn href(&self, selector: &str) -> Option<String> {
        self.0.query(selector).and_then(|el| el.get_attribute("href"))
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }
}

struct PostDialog {
    dialog: HtmlElement,
    title: Element,
    meta: Element,
    content: Element,
    repo: Element,
    last_focused: RefCell<FocusMemory<HtmlElement>>,
}

impl PostDialog {
    fn from_document(document: &Document) -> Result<Self, UiError> {
        Ok(Self {
            dialog: cast(by_id(document, DIALOG_ID)?, "post dialog")?,
            title: by_id(document, DIALOG_TITLE_ID)?,
            meta: by_id(document, DIALOG_META_ID)?,
            content: by_id(document, DIALOG_CONTENT_ID)?,
            repo: by_id(document, DIALOG_REPO_ID)?,
            last_focused: RefCell::new(FocusMemory::new()),
        })
    }

    fn remember_focus(&self, document: &Document) {
        let active = document.active_element().and_then(|el| el.dyn_into::<HtmlElement>().ok());
        self.last_focused.borrow_mut().remember(active);
    }

    fn fill(&self, post: &PostContent) {
        self.title.set_text_content(Some(&post.title));
        self.meta.set_text_content(Some(&post.meta));
        match &post.body {
            PostBody::Html(markup) => self.content.set_inner_html(markup),
            PostBody::Text(text) => self.content.set_text_content(Some(text)),
        }
        self.repo.set_attribute("href", post.repo_href()).log_err("post: repo href");
        let disabled = if post.repo_disabled() {
            self.repo.set_attribute("aria-disabled", "true")
        } else {
            self.repo.remove_attribute("aria-disabled")
        };
        disabled.log_err("post: repo aria-disabled");
    }

    /// Show modally. Runtimes without `<dialog>` support leave it hidden.
    fn show(&self) {
        match self.dialog.dyn_ref::<HtmlDialogElement>() {
            Some(dialog) => {
                if let Err(err) = dialog.show_modal() {
                    log::debug!("post: showModal failed: {err:?}");
                }
            }
            None => log::debug!("post: <dialog> not supported"),
        }
        if let Some(target) = self.dialog.query(DIALOG_FOCUS_SELECTOR) {
            focus(&target);
        }
    }

    fn close(&self) {
        if let Some(dialog) = self.dialog.dyn_ref::<HtmlDialogElement>() {
            dialog.close();
        }
        let previous = self.last_focused.borrow_mut().take();
        if let Some(previous) = previous {
            previous.focus().log_err("post: restore focus");
        }
    }

    /// Keep Tab and Shift+Tab cycling inside the dialog.
    fn trap_tab(&self, document: &Document, event: &KeyboardEvent) {
        if event.key() != "Tab" {
            return;
        }
        let scope = FocusScope::new(self.dialog.query_all(FOCUSABLE_SELECTOR));
        let active = document.active_element();
        if let Some(target) = scope.wrap_target(active.as_ref(), TabDirection::from_shift(event.shift_key())) {
            event.prevent_default();
            focus(target);
        }
    }
}

/// Open post links in the dialog and wire its close and focus handling.
///
/// # Errors
///
/// Returns [`UiError::MissingElement`] when the dialog or one of its slots is absent.
pub(super) fn wire(document: &Document, config: &Config) -> Result<(), UiError> {
    let dialog = Rc::new(PostDialog::from_document(document)?);

    for link in document.query_all(POST_LINK_SELECTOR) {
        let dialog = Rc::clone(&dialog);
        let document = document.clone();
        let prefix = config.post_path_prefix.clone();
        let target = link.clone();
        listen(&target, "click", move |event| {
            event.prevent_default();
            dialog.remember_focus(&document);
            let dialog = Rc::clone(&dialog);
            let document = document.clone();
            let link = link.clone();
            let prefix = prefix.clone();
            wasm_bindgen_futures::spawn_local(async move {
                open(&dialog, &document, &link, &prefix).await;
            });
        })?;
    }

    if let Some(button) = document.get_element_by_id(DIALOG_CLOSE_ID) {
        let d = Rc::clone(&dialog);
        listen(&button, "click", move |_| d.close())?;
    }

    let d = Rc::clone(&dialog);
    listen(&dialog.dialog, "cancel", move |event| {
        event.prevent_default();
        d.close();
    })?;

    let d = Rc::clone(&dialog);
    let doc = document.clone();
    listen(&dialog.dialog, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            d.trap_tab(&doc, key);
        }
    })?;

    Ok(())
}

async fn open(dialog: &PostDialog, document: &Document, link: &Element, prefix: &str) {
    let item = link.closest(POST_ITEM_SELECTOR).unwrap_or(None);
    let slug = item.as_ref().and_then(|item| item.get_attribute(POST_SLUG_ATTR));
    let context = LinkContext {
        title: link.query(LINK_TITLE_SELECTOR).and_then(|el| el.text_content()),
        meta: item
            .as_ref()
            .and_then(|item| item.query(LINK_META_SELECTOR))
            .and_then(|el| el.text_content()),
    };
    let url = resolve_url(link.get_attribute("href").as_deref(), slug.as_deref(), prefix);

    let post = PostContent::from_load(load(document, url).await, &context);
    dialog.fill(&post);
    dialog.show();
}

async fn load(document: &Document, url: Option<String>) -> Result<ElementFragment, UiError> {
    let url = url.ok_or(UiError::NoUrl)?;
    let html = fetch_fragment(&url).await?;
    let holder = document.create_element("div").map_err(js_err)?;
    holder.set_inner_html(&html);
    let article = holder.query(FRAGMENT_ARTICLE_SELECTOR).unwrap_or(holder);
    Ok(ElementFragment(article))
}

async fn fetch_fragment(url: &str) -> Result<String, UiError> {
    let resp = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| UiError::Fetch(e.to_string()))?;
    let status = resp.status();
    if !is_success(status) {
        return Err(UiError::HttpStatus { status });
    }
    resp.text().await.map_err(|e| UiError::Fetch(e.to_string()))
}

// =============================================================================
// PREFETCH
// =============================================================================

/// Prefetch each `a[data-prefetch]` target the first time it is hovered.
///
/// The response only warms the HTTP cache; the click handler fetches again.
///
/// # Errors
///
/// Returns [`UiError::MissingElement`] when the page has no prefetch links.
pub(super) fn wire_prefetch(window: &Window, document: &Document) -> Result<(), UiError> {
    let links = document.query_all(PREFETCH_LINK_SELECTOR);
    if links.is_empty() {
        return Err(UiError::missing(PREFETCH_LINK_SELECTOR));
    }
    let registry = Rc::new(RefCell::new(PrefetchRegistry::new()));
    for (index, link) in links.into_iter().enumerate() {
        let registry = Rc::clone(&registry);
        let window = window.clone();
        let target = link.clone();
        listen_passive(&target, "mouseenter", move |_| {
            if !registry.borrow_mut().claim(index) {
                return;
            }
            let Some(url) = link.get_attribute("href").filter(|href| !href.is_empty()) else {
                return;
            };
            when_idle(&window, move || wasm_bindgen_futures::spawn_local(prefetch(url)));
        })?;
    }
    Ok(())
}

async fn prefetch(url: String) {
    match Request::get(&url).credentials(RequestCredentials::Omit).send().await {
        Ok(resp) => log::debug!("prefetch: {url} -> {}", resp.status()),
        Err(err) => log::debug!("prefetch: {url} failed: {err}"),
    }
}

/// Run `task` from `requestIdleCallback` when the runtime has it, otherwise now.
fn when_idle<F>(window: &Window, task: F)
where
    F: FnOnce() + 'static,
{
    let request_idle = js_sys::Reflect::get(window, &JsValue::from_str("requestIdleCallback"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    let Some(request_idle) = request_idle else {
        task();
        return;
    };
    let callback = Closure::<dyn FnMut()>::once_into_js(task);
    if let Err(err) = request_idle.call1(window, &callback) {
        log::debug!("prefetch: requestIdleCallback failed: {err:?}");
    }
}
