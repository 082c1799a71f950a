//! Theme toggle, OS preference tracking, and the icon swap animation.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MediaQueryList, MediaQueryListEvent, Window};

use super::storage::LocalStore;
use super::{LogJsErr, Query, listen};
use crate::config::Config;
use crate::consts::{DARK_CLASS, ICON_CHANGING_CLASS, PREFERS_DARK_QUERY, THEME_ICON_SELECTOR, THEME_TOGGLE_ID};
use crate::error::UiError;
use crate::icons::{IconEffect, IconSet, IconSwap};
use crate::theme::{Theme, ThemeController};

struct ThemeView {
    root: Element,
    toggle: Option<HtmlElement>,
    icon_slot: Option<Element>,
    icons: IconSet,
}

impl ThemeView {
    /// The theme the page currently shows.
    fn displayed(&self) -> Theme {
        Theme::from_dark(self.root.class_list().contains(DARK_CLASS))
    }

    fn apply(&self, theme: Theme) {
        let dark = theme.is_dark();
        self.root.class_list().toggle_with_force(DARK_CLASS, dark).log_err("theme: root class");
        if let Some(toggle) = &self.toggle {
            toggle
                .set_attribute("aria-pressed", if dark { "true" } else { "false" })
                .log_err("theme: aria-pressed");
        }
        self.swap_icon(dark);
    }

    fn swap_icon(&self, dark: bool) {
        let Some(slot) = self.icon_slot.clone() else {
            return;
        };
        let toggle = self.toggle.clone();
        let swap = IconSwap::plan(self.icons, dark);
        run_effect(&slot, toggle.as_ref(), &swap.immediate);
        wasm_bindgen_futures::spawn_local(async move {
            for step in swap.steps {
                gloo_timers::future::sleep(Duration::from_millis(u64::from(step.after_ms))).await;
                run_effect(&slot, toggle.as_ref(), &step.effect);
            }
        });
    }
}

fn run_effect(slot: &Element, toggle: Option<&HtmlElement>, effect: &IconEffect) {
    match effect {
        IconEffect::MarkChanging => {
            if let Some(toggle) = toggle {
                toggle.class_list().add_1(ICON_CHANGING_CLASS).log_err("theme: mark changing");
            }
        }
        IconEffect::SetMarkup(markup) => slot.set_inner_html(markup),
        IconEffect::ClearChanging => {
            if let Some(toggle) = toggle {
                toggle.class_list().remove_1(ICON_CHANGING_CLASS).log_err("theme: clear changing");
            }
        }
    }
}

fn prefers_dark_query(window: &Window) -> Option<MediaQueryList> {
    match window.match_media(PREFERS_DARK_QUERY) {
        Ok(query) => query,
        Err(err) => {
            log::debug!("theme: matchMedia unavailable: {err:?}");
            None
        }
    }
}

/// Apply the initial theme and attach the toggle and OS-change listeners.
///
/// # Errors
///
/// Fails only when the document has no root element; a missing toggle or
/// icon slot just disables those parts.
pub(super) fn wire(window: &Window, document: &Document, config: &Config) -> Result<(), UiError> {
    let root = document.document_element().ok_or_else(|| UiError::missing("html"))?;
    let toggle = document
        .get_element_by_id(THEME_TOGGLE_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let view = Rc::new(ThemeView {
        root,
        toggle,
        icon_slot: document.query(THEME_ICON_SELECTOR),
        icons: config.icon_set(),
    });
    let controller = Rc::new(RefCell::new(ThemeController::new(
        LocalStore::open(window),
        config.storage_key.clone(),
    )));

    let media = prefers_dark_query(window);
    let os_dark = media.as_ref().is_some_and(MediaQueryList::matches);
    let initial = controller.borrow().initial(os_dark);
    log::debug!("theme: initial {}", initial.as_str());
    view.apply(initial);

    if let Some(toggle) = &view.toggle {
        let view = Rc::clone(&view);
        let controller = Rc::clone(&controller);
        listen(toggle, "click", move |_| {
            let next = controller.borrow_mut().toggle(view.displayed());
            view.apply(next);
            if let Some(toggle) = &view.toggle {
                toggle.focus().log_err("theme: refocus toggle");
            }
        })?;
    }

    if let Some(media) = media {
        let query = media.clone();
        let result = listen(&media, "change", move |event| {
            let dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .map_or_else(|| query.matches(), MediaQueryListEvent::matches);
            let next = controller.borrow().on_os_change(dark);
            if let Some(theme) = next {
                view.apply(theme);
            }
        });
        if let Err(err) = result {
            log::debug!("theme: cannot follow OS preference changes: {err}");
        }
    }

    Ok(())
}
