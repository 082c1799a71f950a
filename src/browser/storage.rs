//! `localStorage`-backed [`ThemeStore`].

use web_sys::{Storage, Window};

use crate::theme::{MemoryStore, ThemeStore};

/// Theme flag storage in `localStorage`.
///
/// Falls back to an in-memory store when `localStorage` is unavailable
/// (disabled cookies, some private modes), so toggling still works for the
/// rest of the page's life.
pub(crate) struct LocalStore {
    storage: Option<Storage>,
    fallback: MemoryStore,
}

impl LocalStore {
    pub(crate) fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::info!("storage: localStorage unavailable, theme choice will not persist");
                None
            }
            Err(err) => {
                log::warn!("storage: localStorage access denied: {err:?}");
                None
            }
        };
        Self { storage, fallback: MemoryStore::default() }
    }
}

impl ThemeStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        let Some(storage) = &self.storage else {
            return self.fallback.load(key);
        };
        storage.get_item(key).unwrap_or_else(|err| {
            log::warn!("storage: read {key:?} failed: {err:?}");
            None
        })
    }

    fn save(&mut self, key: &str, value: &str) {
        match &self.storage {
            Some(storage) => {
                if let Err(err) = storage.set_item(key, value) {
                    log::warn!("storage: write {key:?} failed: {err:?}");
                }
            }
            None => self.fallback.save(key, value),
        }
    }
}
