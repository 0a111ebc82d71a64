//! `sessionStorage` adapter.

use coralchat_core::{KeyValueStore, WidgetError};
use web_sys::{Storage, Window};

/// Key/value store over the tab's `sessionStorage`. If storage is
/// unavailable (private browsing, sandboxed iframes) every operation
/// errors, which the session store logs and swallows; the widget then
/// runs in-memory-only for the page view.
pub struct SessionStorageStore {
    storage: Option<Storage>,
}

impl SessionStorageStore {
    pub fn new(window: &Window) -> Self {
        Self {
            storage: window.session_storage().ok().flatten(),
        }
    }

    fn storage(&self) -> Result<&Storage, WidgetError> {
        self.storage
            .as_ref()
            .ok_or_else(|| WidgetError::Storage("sessionStorage unavailable".into()))
    }
}

impl KeyValueStore for SessionStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, WidgetError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| WidgetError::Storage(format!("get {key} failed")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WidgetError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| WidgetError::Storage(format!("set {key} failed")))
    }

    fn remove(&mut self, key: &str) -> Result<(), WidgetError> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| WidgetError::Storage(format!("remove {key} failed")))
    }
}
