//! Mobile navigation menu bindings.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

use super::{LogJsErr, Query, by_id, cast, focus, listen};
use crate::config::Config;
use crate::consts::{NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_OPEN_CLASS, NAV_TOGGLE_ID};
use crate::error::UiError;
use crate::nav::{FocusTarget, NavEffects, NavEvent, NavMachine, NavState, is_escape_key};

struct NavView {
    toggle: HtmlElement,
    menu: Element,
    body: Option<HtmlElement>,
}

impl NavView {
    fn render(&self, fx: NavEffects) {
        // Attribute and class always change together.
        self.toggle.set_attribute("aria-expanded", fx.expanded_attr()).log_err("nav: aria-expanded");
        self.menu.class_list().toggle_with_force(NAV_OPEN_CLASS, fx.open).log_err("nav: open class");
        self.toggle.set_attribute("aria-label", fx.label()).log_err("nav: aria-label");

        if let Some(body) = &self.body {
            let style = body.style();
            let result = if fx.scroll_locked() {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(drop)
            };
            result.log_err("nav: scroll lock");
        }

        match fx.focus {
            FocusTarget::FirstLink => {
                if let Some(link) = self.menu.query(NAV_LINK_SELECTOR) {
                    focus(&link);
                }
            }
            FocusTarget::Toggle => self.toggle.focus().log_err("nav: refocus toggle"),
            FocusTarget::Keep => {}
        }
    }

    /// Whether the event's composed path passes through the menu or toggle.
    fn contains_event(&self, event: &Event) -> bool {
        let menu = JsValue::from(self.menu.clone());
        let toggle = JsValue::from(self.toggle.clone());
        event.composed_path().iter().any(|node| node == menu || node == toggle)
    }
}

struct Nav {
    view: NavView,
    machine: RefCell<NavMachine>,
}

impl Nav {
    fn dispatch(&self, event: NavEvent) {
        let effects = self.machine.borrow_mut().handle(event);
        if let Some(fx) = effects {
            log::debug!("nav: {event:?} -> open={}", fx.open);
            self.view.render(fx);
        }
    }

    fn is_open(&self) -> bool {
        self.machine.borrow().is_open()
    }
}

/// Attach menu toggling, dismissal, and resize auto-close.
///
/// # Errors
///
/// Returns [`UiError::MissingElement`] when the toggle or menu is absent.
pub(super) fn wire(window: &Window, document: &Document, config: &Config) -> Result<(), UiError> {
    let toggle: HtmlElement = cast(by_id(document, NAV_TOGGLE_ID)?, "nav toggle")?;
    let menu = by_id(document, NAV_MENU_ID)?;

    let state = NavState::from_expanded_attr(toggle.get_attribute("aria-expanded").as_deref());
    let machine = NavMachine::new(state, config.nav_breakpoint_px);
    let nav = Rc::new(Nav { view: NavView { toggle, menu, body: document.body() }, machine: RefCell::new(machine) });
    nav.view.render(nav.machine.borrow().sync());

    let n = Rc::clone(&nav);
    listen(&nav.view.toggle, "click", move |event| {
        // Keep the document-level outside-click handler from seeing this click.
        event.stop_propagation();
        n.dispatch(NavEvent::ToggleClicked);
    })?;

    let n = Rc::clone(&nav);
    listen(&nav.view.menu, "click", move |event| {
        let on_link = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(NAV_LINK_SELECTOR).unwrap_or(None))
            .is_some();
        if on_link {
            n.dispatch(NavEvent::LinkSelected);
        }
    })?;

    let n = Rc::clone(&nav);
    listen(document, "keydown", move |event| {
        if event.dyn_ref::<KeyboardEvent>().is_some_and(|key| is_escape_key(&key.key())) {
            n.dispatch(NavEvent::Escape);
        }
    })?;

    let n = Rc::clone(&nav);
    listen(document, "click", move |event| {
        if n.is_open() && !n.view.contains_event(&event) {
            n.dispatch(NavEvent::OutsideClick);
        }
    })?;

    let debounce_ms = config.resize_debounce_ms;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let win = window.clone();
    listen(window, "resize", move |_| {
        let nav = Rc::clone(&nav);
        let win = win.clone();
        // Replacing the pending timeout drops and cancels the previous one.
        *pending.borrow_mut() = Some(Timeout::new(debounce_ms, move || {
            match win.inner_width().map(|w| w.as_f64()) {
                Ok(Some(width)) => nav.dispatch(NavEvent::Resized { width }),
                Ok(None) => log::debug!("nav: innerWidth is not a number"),
                Err(err) => log::debug!("nav: innerWidth unavailable: {err:?}"),
            }
        }));
    })?;

    Ok(())
}
