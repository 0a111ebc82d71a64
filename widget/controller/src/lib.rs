//! The widget controller: one instance per mounted widget.
//!
//! All state lives on [`WidgetController`]; there is no global singleton,
//! so multiple widgets (or tests) never collide. The controller reaches
//! the page only through its injected [`coralchat_dom::Dom`],
//! [`coralchat_core::KeyValueStore`], and [`Scheduler`] seams.

mod controller;
mod exchange;
mod lifecycle;
mod motion;
mod scheduler;

pub use controller::WidgetController;
pub use exchange::ContactInfo;
pub use scheduler::{RecordingScheduler, Scheduler, TaskKey};

#[cfg(test)]
pub(crate) mod testutil {
    use coralchat_core::{MemoryStore, SessionStore, WidgetConfig};
    use coralchat_dom::HeadlessDom;
    use coralchat_settings::ApplyContext;

    use crate::{RecordingScheduler, WidgetController};

    pub(crate) type TestController =
        WidgetController<HeadlessDom, MemoryStore, RecordingScheduler>;

    pub(crate) fn controller() -> TestController {
        controller_with_store(MemoryStore::default())
    }

    pub(crate) fn controller_with_store(store: MemoryStore) -> TestController {
        WidgetController::new(
            WidgetConfig::new("https://api.test", "acme"),
            HeadlessDom::new(),
            store,
            RecordingScheduler::default(),
            ApplyContext {
                local_hour: 9,
                page_path: "/".into(),
                ..Default::default()
            },
        )
    }

    /// A store with a prior conversation already persisted.
    pub(crate) fn seeded_store(
        messages: &[coralchat_core::ChatMessage],
        is_open: bool,
    ) -> MemoryStore {
        let mut store = SessionStore::new(MemoryStore::default(), "acme");
        store.save_messages(messages);
        store.save_is_open(is_open);
        store.save_session_id("s-prior");
        store.into_inner()
    }
}
