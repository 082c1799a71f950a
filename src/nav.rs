//! Collapsible navigation menu.
//!
//! [`NavMachine`] tracks open/closed and turns each [`NavEvent`] into the
//! [`NavEffects`] the page must apply. The expanded attribute and the open
//! class are both derived from the single `open` flag of a [`NavEffects`],
//! so they cannot disagree.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{NAV_BREAKPOINT_PX, NAV_LABEL_CLOSE, NAV_LABEL_OPEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    /// Read the state from the toggle's `aria-expanded` value.
    #[must_use]
    pub fn from_expanded_attr(value: Option<&str>) -> Self {
        if value == Some("true") { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Input events the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    /// The menu toggle was clicked.
    ToggleClicked,
    /// A link inside the menu was followed.
    LinkSelected,
    /// Escape was pressed anywhere on the page.
    Escape,
    /// A click landed outside both the menu and its toggle.
    OutsideClick,
    /// The viewport settled at this width after resizing.
    Resized { width: f64 },
}

/// Where focus goes after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// First link inside the menu.
    FirstLink,
    /// The menu toggle.
    Toggle,
    /// Leave focus alone.
    Keep,
}

/// DOM changes for one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEffects {
    pub open: bool,
    pub focus: FocusTarget,
}

impl NavEffects {
    /// Value for the toggle's `aria-expanded`.
    #[must_use]
    pub fn expanded_attr(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Accessible label for the toggle: what clicking it will do next.
    #[must_use]
    pub fn label(self) -> &'static str {
        if self.open { NAV_LABEL_CLOSE } else { NAV_LABEL_OPEN }
    }

    /// Whether page scrolling is locked behind the open menu.
    #[must_use]
    pub fn scroll_locked(self) -> bool {
        self.open
    }
}

/// Whether a `KeyboardEvent.key` value is Escape.
#[must_use]
pub fn is_escape_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[derive(Debug, Clone)]
pub struct NavMachine {
    state: NavState,
    breakpoint_px: f64,
}

impl Default for NavMachine {
    fn default() -> Self {
        Self::new(NavState::Closed, NAV_BREAKPOINT_PX)
    }
}

impl NavMachine {
    #[must_use]
    pub fn new(state: NavState, breakpoint_px: f64) -> Self {
        Self { state, breakpoint_px }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Effects that bring the page in line with the current state without
    /// moving focus. Used once at load to normalize the markup.
    #[must_use]
    pub fn sync(&self) -> NavEffects {
        NavEffects { open: self.is_open(), focus: FocusTarget::Keep }
    }

    /// Feed one event. Returns `None` when the event causes no transition.
    pub fn handle(&mut self, event: NavEvent) -> Option<NavEffects> {
        let focus = match (self.state, event) {
            (NavState::Closed, NavEvent::ToggleClicked) => {
                self.state = NavState::Open;
                return Some(NavEffects { open: true, focus: FocusTarget::FirstLink });
            }
            (NavState::Closed, _) => return None,
            (NavState::Open, NavEvent::ToggleClicked | NavEvent::Escape | NavEvent::OutsideClick) => {
                FocusTarget::Toggle
            }
            (NavState::Open, NavEvent::LinkSelected) => FocusTarget::Keep,
            (NavState::Open, NavEvent::Resized { width }) => {
                if width <= self.breakpoint_px {
                    return None;
                }
                FocusTarget::Keep
            }
        };
        self.state = NavState::Closed;
        Some(NavEffects { open: false, focus })
    }
}
