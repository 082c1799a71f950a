//! Errors raised while wiring or running the browser controllers.
//!
//! None of these reach the page: each controller logs the error and either
//! disables itself (wiring) or degrades to a fallback (runtime).

/// Errors produced by the DOM bindings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// There is no global `window` (not running in a browser).
    #[error("no global window")]
    NoWindow,

    /// A required element is missing from the page.
    #[error("missing element: {selector}")]
    MissingElement { selector: String },

    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Js(String),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}")]
    HttpStatus { status: u16 },

    /// Neither an `href` nor a slug was available to build a post URL.
    #[error("post link has no url")]
    NoUrl,
}

impl UiError {
    #[must_use]
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}
