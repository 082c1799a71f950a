//! Focus scope for trapping Tab inside a container, and the focus memory
//! restored when the container closes.
//!
//! The scope is recomputed from the container on every Tab press, so
//! content swapped in between openings is always covered.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    #[must_use]
    pub fn from_shift(shift: bool) -> Self {
        if shift { Self::Backward } else { Self::Forward }
    }
}

/// The element to refocus when a modal closes.
///
/// Remembered at open time and handed back once on close.
#[derive(Debug, Clone)]
pub struct FocusMemory<T> {
    previous: Option<T>,
}

impl<T> Default for FocusMemory<T> {
    fn default() -> Self {
        Self { previous: None }
    }
}

impl<T> FocusMemory<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what had focus before opening, replacing any earlier record.
    pub fn remember(&mut self, active: Option<T>) {
        self.previous = active;
    }

    /// The element to restore. Empty until the next [`FocusMemory::remember`].
    pub fn take(&mut self) -> Option<T> {
        self.previous.take()
    }
}

/// Ordered focusable items of one container.
#[derive(Debug, Clone)]
pub struct FocusScope<T> {
    items: Vec<T>,
}

impl<T: PartialEq> FocusScope<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Item to focus instead of the browser's default Tab move, or `None`
    /// to let the browser proceed.
    ///
    /// Forward from the last item wraps to the first; backward from the
    /// first wraps to the last.
    #[must_use]
    pub fn wrap_target(&self, active: Option<&T>, direction: TabDirection) -> Option<&T> {
        let first = self.items.first()?;
        let last = self.items.last()?;
        let active = active?;
        match direction {
            TabDirection::Forward if active == last => Some(first),
            TabDirection::Backward if active == first => Some(last),
            _ => None,
        }
    }
}
