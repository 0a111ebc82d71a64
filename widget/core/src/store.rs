//! Storage seam and the tenant-namespaced session store.

use std::collections::HashMap;

use tracing::warn;

use crate::error::WidgetError;
use crate::message::ChatMessage;
use crate::session::{Session, SessionFlag};

/// String key/value storage with per-tab lifetime semantics.
///
/// The browser build backs this with `sessionStorage`; tests and headless
/// hosts use [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, WidgetError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), WidgetError>;
    fn remove(&mut self, key: &str) -> Result<(), WidgetError>;
}

/// In-memory key/value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, WidgetError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WidgetError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), WidgetError> {
        self.entries.remove(key);
        Ok(())
    }
}

const SUFFIX_SESSION_ID: &str = "session_id";
const SUFFIX_MESSAGES: &str = "messages";
const SUFFIX_IS_OPEN: &str = "is_open";

/// Write-through session persistence, namespaced as `cc_{tenant}_{suffix}`
/// so widgets for different tenants can coexist on one page.
///
/// Storage failures are logged and swallowed: the widget then runs
/// in-memory-only for the rest of the page view.
pub struct SessionStore<S: KeyValueStore> {
    store: S,
    tenant_id: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, tenant_id: impl Into<String>) -> Self {
        Self {
            store,
            tenant_id: tenant_id.into(),
        }
    }

    /// Hand back the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn key(&self, suffix: &str) -> String {
        format!("cc_{}_{}", self.tenant_id, suffix)
    }

    fn read(&self, suffix: &str) -> Option<String> {
        match self.store.get(&self.key(suffix)) {
            Ok(value) => value,
            Err(error) => {
                warn!(suffix, %error, "session storage read failed");
                None
            }
        }
    }

    fn write(&mut self, suffix: &str, value: &str) {
        if let Err(error) = self.store.set(&self.key(suffix), value) {
            warn!(suffix, %error, "session storage write failed");
        }
    }

    fn erase(&mut self, suffix: &str) {
        if let Err(error) = self.store.remove(&self.key(suffix)) {
            warn!(suffix, %error, "session storage remove failed");
        }
    }

    /// Read back the whole persisted session. Unparseable message history
    /// is dropped rather than propagated.
    pub fn load(&self) -> Session {
        let messages = self
            .read(SUFFIX_MESSAGES)
            .and_then(|raw| match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
                Ok(messages) => Some(messages),
                Err(error) => {
                    warn!(%error, "discarding unparseable cached messages");
                    None
                }
            })
            .unwrap_or_default();

        Session {
            session_id: self.read(SUFFIX_SESSION_ID),
            is_open: self.read(SUFFIX_IS_OPEN).as_deref() == Some("true"),
            messages,
        }
    }

    pub fn save_session_id(&mut self, session_id: &str) {
        self.write(SUFFIX_SESSION_ID, session_id);
    }

    pub fn save_messages(&mut self, messages: &[ChatMessage]) {
        match serde_json::to_string(messages) {
            Ok(raw) => self.write(SUFFIX_MESSAGES, &raw),
            Err(error) => warn!(%error, "failed to encode message history"),
        }
    }

    pub fn save_is_open(&mut self, is_open: bool) {
        self.write(SUFFIX_IS_OPEN, if is_open { "true" } else { "false" });
    }

    pub fn flag(&self, flag: SessionFlag) -> bool {
        self.read(flag.suffix()).as_deref() == Some("true")
    }

    pub fn set_flag(&mut self, flag: SessionFlag) {
        self.write(flag.suffix(), "true");
    }

    /// Clear conversation state (messages, session id, open flag). One-time
    /// behavioral flags are left alone: a new conversation in the same tab
    /// must not replay the chime or the entry animation.
    pub fn clear(&mut self) {
        self.erase(SUFFIX_SESSION_ID);
        self.erase(SUFFIX_MESSAGES);
        self.erase(SUFFIX_IS_OPEN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;

    fn store() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::default(), "acme")
    }

    #[test]
    fn keys_are_tenant_namespaced() {
        let mut store = store();
        store.save_session_id("s1");
        assert_eq!(
            store.store.get("cc_acme_session_id").unwrap().as_deref(),
            Some("s1")
        );
    }

    #[test]
    fn session_round_trips() {
        let mut store = store();
        store.save_session_id("s1");
        store.save_is_open(true);
        store.save_messages(&[ChatMessage::now(Role::User, "hello")]);

        let session = store.load();
        assert_eq!(session.session_id.as_deref(), Some("s1"));
        assert!(session.is_open);
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].text, "hello");
        assert_eq!(session.messages[0].role, Role::User);
    }

    #[test]
    fn empty_store_loads_default_session() {
        let session = store().load();
        assert!(session.session_id.is_none());
        assert!(!session.is_open);
        assert!(session.messages.is_empty());
    }

    #[test]
    fn clear_keeps_one_time_flags() {
        let mut store = store();
        store.save_session_id("s1");
        store.save_messages(&[ChatMessage::now(Role::User, "hello")]);
        store.set_flag(SessionFlag::ChimePlayed);

        store.clear();

        let session = store.load();
        assert!(session.session_id.is_none());
        assert!(session.messages.is_empty());
        assert!(store.flag(SessionFlag::ChimePlayed));
        assert!(!store.flag(SessionFlag::Interacted));
    }

    #[test]
    fn corrupt_message_cache_is_discarded() {
        let mut store = store();
        store.write(SUFFIX_MESSAGES, "not json");
        assert!(store.load().messages.is_empty());
    }
}
