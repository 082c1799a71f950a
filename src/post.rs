//! Blog post dialog content.
//!
//! A post link opens its article in a dialog instead of navigating. This
//! module derives the URL to fetch, extracts the dialog fields from the
//! fetched fragment, and tracks which links have already been prefetched.
//!
//! Extraction works over [`PostFragment`], a minimal query interface the
//! browser bindings implement on a detached DOM element.
//!
//! FALLBACKS
//! =========
//! Each dialog field tries the article first, then the clicked link's own
//! markup, then a fixed default. Empty strings count as missing at every
//! step. When the fetch fails the dialog shows [`PostContent::unavailable`].

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use std::collections::HashSet;

use crate::consts::{
    FRAGMENT_BODY_SELECTOR, FRAGMENT_META_SELECTOR, FRAGMENT_REPO_SELECTOR, FRAGMENT_TITLE_SELECTOR, NO_REPO_HREF,
    POST_DEFAULT_TITLE, POST_UNAVAILABLE_BODY, POST_UNAVAILABLE_TITLE,
};
use crate::error::UiError;

/// URL to fetch for a post link: the link's `href` when present, otherwise
/// `{prefix}{slug}.html` built from the enclosing list item.
#[must_use]
pub fn resolve_url(href: Option<&str>, slug: Option<&str>, prefix: &str) -> Option<String> {
    if let Some(href) = non_empty(href) {
        return Some(href.to_owned());
    }
    non_empty(slug).map(|slug| format!("{prefix}{slug}.html"))
}

/// Whether an HTTP status counts as success.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty_owned(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Read-only queries over a parsed article fragment.
///
/// Selectors are CSS selectors; each query looks at the first match.
pub trait PostFragment {
    /// Text content of the first match.
    fn text(&self, selector: &str) -> Option<String>;

    /// Inner markup of the first match.
    fn inner_html_of(&self, selector: &str) -> Option<String>;

    /// Raw `href` attribute of the first match, as written in the markup.
    fn href(&self, selector: &str) -> Option<String>;

    /// Inner markup of the fragment itself.
    fn inner_html(&self) -> String;
}

/// Fallback text taken from the clicked link and its list item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkContext {
    /// The link's `.post-title` text.
    pub title: Option<String>,
    /// The list item's `.post-meta` text.
    pub meta: Option<String>,
}

/// Dialog body: trusted fragment markup, or plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostBody {
    Html(String),
    Text(String),
}

/// Everything injected into the dialog for one opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    pub title: String,
    pub meta: String,
    pub body: PostBody,
    /// Repository URL, `None` when the repo link should be disabled.
    pub repo: Option<String>,
}

impl PostContent {
    /// Extract dialog fields from an article fragment.
    #[must_use]
    pub fn extract(article: &impl PostFragment, link: &LinkContext) -> Self {
        let title = non_empty_owned(article.text(FRAGMENT_TITLE_SELECTOR))
            .or_else(|| non_empty_owned(link.title.clone()))
            .unwrap_or_else(|| POST_DEFAULT_TITLE.to_owned());
        let meta = non_empty_owned(article.text(FRAGMENT_META_SELECTOR))
            .or_else(|| non_empty_owned(link.meta.clone()))
            .unwrap_or_default();
        let body = non_empty_owned(article.inner_html_of(FRAGMENT_BODY_SELECTOR)).unwrap_or_else(|| article.inner_html());
        let repo = non_empty_owned(article.href(FRAGMENT_REPO_SELECTOR)).filter(|href| href != NO_REPO_HREF);
        Self { title, meta, body: PostBody::Html(body), repo }
    }

    /// Dialog content for a finished load: extracted fields on success,
    /// [`PostContent::unavailable`] for any failure.
    #[must_use]
    pub fn from_load<F: PostFragment>(loaded: Result<F, UiError>, link: &LinkContext) -> Self {
        match loaded {
            Ok(article) => Self::extract(&article, link),
            Err(err) => {
                log::warn!("post: {err}");
                Self::unavailable()
            }
        }
    }

    /// Content shown when the post could not be loaded.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            title: POST_UNAVAILABLE_TITLE.to_owned(),
            meta: String::new(),
            body: PostBody::Text(POST_UNAVAILABLE_BODY.to_owned()),
            repo: None,
        }
    }

    /// `href` for the dialog's repository link.
    #[must_use]
    pub fn repo_href(&self) -> &str {
        self.repo.as_deref().unwrap_or(NO_REPO_HREF)
    }

    #[must_use]
    pub fn repo_disabled(&self) -> bool {
        self.repo.is_none()
    }
}

/// Tracks which prefetch links have fired, so each prefetches at most once
/// per page.
#[derive(Debug, Clone, Default)]
pub struct PrefetchRegistry {
    claimed: HashSet<usize>,
}

impl PrefetchRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim link `index`. Returns `true` only the first time.
    pub fn claim(&mut self, index: usize) -> bool {
        self.claimed.insert(index)
    }
}
