//! Theme flag and the rules that decide which theme is applied.
//!
//! The persisted flag is the user's explicit choice. When it is unset the OS
//! preference decides, both at load and whenever the OS preference changes.
//! Once the user toggles, the choice sticks for as long as the flag is stored.
//!
//! Storage is reached through [`ThemeStore`] so the rules can be exercised
//! without a browser; the DOM bindings back it with `localStorage`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

/// The two visual themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"`/`"light"` is unset.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Key-value storage holding the theme flag.
pub trait ThemeStore {
    /// Raw stored value for `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    fn save(&mut self, key: &str, value: &str);
}

/// In-memory [`ThemeStore`], used when `localStorage` is unavailable and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Theme decisions over a [`ThemeStore`].
///
/// Methods return the theme to apply; applying it to the page is the
/// caller's job.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    key: String,
}

impl<S: ThemeStore> ThemeController<S> {
    #[must_use]
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// The user's explicit choice, if one is stored.
    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        let raw = self.store.load(&self.key)?;
        let theme = Theme::parse(&raw);
        if theme.is_none() {
            log::debug!("theme: ignoring unrecognized stored value {raw:?}");
        }
        theme
    }

    /// Theme to apply at page load. Does not persist anything.
    #[must_use]
    pub fn initial(&self, os_prefers_dark: bool) -> Theme {
        self.stored().unwrap_or(Theme::from_dark(os_prefers_dark))
    }

    /// Flip the currently displayed theme and persist the result.
    ///
    /// `current` is what the page shows, not what is stored, so a page whose
    /// class drifted from storage still toggles visibly.
    pub fn toggle(&mut self, current: Theme) -> Theme {
        let next = current.toggled();
        self.store.save(&self.key, next.as_str());
        next
    }

    /// Theme to apply after an OS preference change, or `None` when the
    /// user's stored choice overrides it.
    #[must_use]
    pub fn on_os_change(&self, prefers_dark: bool) -> Option<Theme> {
        match self.stored() {
            Some(_) => None,
            None => Some(Theme::from_dark(prefers_dark)),
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}
