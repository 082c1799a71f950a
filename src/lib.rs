//! Progressive-enhancement layer for the portfolio site.
//!
//! Compiled to WebAssembly and loaded by the static pages. It attaches the
//! interactive behavior the markup cannot express on its own: theme
//! switching with a persisted preference, the collapsible mobile menu,
//! anchor smooth-scrolling, the contact form status flow, and the blog post
//! dialog with prefetching and focus management.
//!
//! Decision logic lives in DOM-free modules so it can be tested natively.
//! The [`browser`] module (feature `browser`) binds those modules to the
//! live document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme flag, persistence seam, and toggle/OS-change rules |
//! | [`icons`] | Theme icon descriptors and the swap animation schedule |
//! | [`nav`] | Navigation menu state machine |
//! | [`scroll`] | Anchor target resolution and scroll offset math |
//! | [`contact`] | Contact form submission outcomes and status lines |
//! | [`post`] | Post URL derivation, fragment extraction, prefetch bookkeeping |
//! | [`focus`] | Focus scope wrap-around for the dialog tab trap |
//! | [`config`] | Page-supplied configuration |
//! | [`consts`] | Selectors, class names, messages, and timing defaults |
//! | [`error`] | Error type shared by the browser bindings |

pub mod config;
pub mod consts;
pub mod contact;
pub mod error;
pub mod focus;
pub mod icons;
pub mod nav;
pub mod post;
pub mod scroll;
pub mod theme;

#[cfg(feature = "browser")]
pub mod browser;

/// WASM entry point.
///
/// Installs the panic hook and console logger, then wires every controller
/// once the document is parsed.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    browser::boot();
}
