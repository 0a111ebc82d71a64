use std::time::Duration;

use coralchat_core::{
    ChatMessage, KeyValueStore, Role, Session, SessionStore, WidgetConfig,
};
use coralchat_dom::{effect, Dom, NodeId};
use coralchat_settings::defaults::DEFAULT_VOLUME;
use coralchat_settings::{apply, ApplyContext, MotionPlan, RuleSettings, WidgetSettings};
use tracing::debug;

use crate::motion::{AttentionState, RotationState};
use crate::scheduler::Scheduler;

/// Typing-indicator dwell before the canned first message appears.
pub(crate) const TYPING_REVEAL_DELAY: Duration = Duration::from_millis(1200);
pub(crate) const ENTRY_CLEANUP_DELAY: Duration = Duration::from_millis(700);
pub(crate) const RIPPLE_CLEANUP_DELAY: Duration = Duration::from_millis(600);

/// One mounted widget. Generic over the rendering, storage, and timer
/// seams; every DOM lookup and every timer is instance-scoped.
pub struct WidgetController<D: Dom, S: KeyValueStore, T: Scheduler> {
    pub(crate) config: WidgetConfig,
    pub(crate) dom: D,
    pub(crate) store: SessionStore<S>,
    pub(crate) scheduler: T,
    pub(crate) ctx: ApplyContext,
    pub(crate) settings: WidgetSettings,
    pub(crate) plan: MotionPlan,
    pub(crate) session: Session,
    pub(crate) minimized: bool,
    pub(crate) launcher_visible: bool,
    pub(crate) in_flight: bool,
    pub(crate) conversation_complete: bool,
    pub(crate) rotation: Option<RotationState>,
    pub(crate) attention: Option<AttentionState>,
    pub(crate) entry_class: Option<&'static str>,
    /// Armed scroll-depth threshold, percent.
    pub(crate) scroll_threshold: Option<u8>,
}

impl<D: Dom, S: KeyValueStore, T: Scheduler> WidgetController<D, S, T> {
    pub fn new(config: WidgetConfig, dom: D, store: S, scheduler: T, ctx: ApplyContext) -> Self {
        let store = SessionStore::new(store, config.tenant_id.clone());
        Self {
            config,
            dom,
            store,
            scheduler,
            ctx,
            settings: WidgetSettings::default(),
            plan: MotionPlan::default(),
            session: Session::default(),
            minimized: false,
            launcher_visible: false,
            in_flight: false,
            conversation_complete: false,
            rotation: None,
            attention: None,
            entry_class: None,
            scroll_threshold: None,
        }
    }

    /// Restore the prior session: replay cached messages into the DOM in
    /// order and reopen the panel if it was open. No network calls, no
    /// sounds, no animation side effects.
    pub fn init(&mut self) {
        let session = self.store.load();
        for message in &session.messages {
            self.dom.append_message(message.role, &message.text);
        }
        if session.is_open {
            self.dom.show(NodeId::Panel);
            self.dom.hide(NodeId::Launcher);
            self.launcher_visible = false;
            self.dom.scroll_messages_to_bottom();
        }
        debug!(
            messages = session.messages.len(),
            is_open = session.is_open,
            "session restored"
        );
        self.session = session;
    }

    /// Apply a settings document: render its visual sections, rebuild the
    /// motion plan, and re-arm triggers. Absent sections leave current
    /// values untouched; re-application replaces each feature's own timer.
    pub fn apply_settings(&mut self, settings: WidgetSettings) {
        let effects = apply::effects(&settings, &self.ctx);
        debug!(effects = effects.len(), "applying widget settings");
        effect::apply(&mut self.dom, &effects);
        self.plan = apply::motion_plan(&settings, &self.ctx);
        self.settings = settings;
        self.scroll_threshold = None;
        self.arm_visibility();
        if self.launcher_visible {
            self.arm_attention();
            self.start_rotation();
        }
        self.arm_auto_open();
    }

    pub(crate) fn rules(&self) -> RuleSettings {
        self.settings.rules.clone().unwrap_or_default()
    }

    pub(crate) fn volume(&self) -> f32 {
        self.settings
            .sound
            .as_ref()
            .and_then(|s| s.volume)
            .unwrap_or(DEFAULT_VOLUME)
            .clamp(0.0, 1.0)
    }

    pub(crate) fn set_inputs_enabled(&mut self, enabled: bool) {
        self.dom.set_enabled(NodeId::TextInput, enabled);
        self.dom.set_enabled(NodeId::SendButton, enabled);
    }

    /// Append a message, mirror it to storage immediately, and render it.
    pub(crate) fn push_message(&mut self, role: Role, text: &str) {
        let message = ChatMessage::now(role, text);
        self.dom.append_message(role, text);
        self.session.messages.push(message);
        self.store.save_messages(&self.session.messages);
        if role == Role::Assistant && !self.session.is_open {
            self.dom.show(NodeId::UnreadBadge);
        }
        self.dom.scroll_messages_to_bottom();
    }

    // Host and test hooks.

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open
    }

    pub fn conversation_complete(&self) -> bool {
        self.conversation_complete
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use coralchat_core::{ChatMessage, Role, SessionFlag};
    use coralchat_dom::NodeId;
    use coralchat_settings::{
        ColorSettings, LayoutSettings, Position, WidgetSettings,
    };

    use crate::testutil::{controller, controller_with_store, seeded_store};

    #[test]
    fn restore_replays_messages_without_side_effects() {
        let store = seeded_store(
            &[
                ChatMessage::now(Role::User, "hi"),
                ChatMessage::now(Role::Assistant, "hello!"),
                ChatMessage::now(Role::User, "question"),
            ],
            true,
        );
        let mut ctrl = controller_with_store(store);
        ctrl.init();

        let rendered = ctrl.dom().messages();
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0], (Role::User, "hi".to_string()));
        assert_eq!(rendered[1], (Role::Assistant, "hello!".to_string()));
        assert_eq!(rendered[2], (Role::User, "question".to_string()));
        assert!(ctrl.dom().sounds().is_empty());
        assert!(ctrl.is_open());
        assert!(ctrl.dom().is_visible(NodeId::Panel));
        assert!(!ctrl.dom().is_visible(NodeId::Launcher));
        assert_eq!(ctrl.session().session_id.as_deref(), Some("s-prior"));
    }

    #[test]
    fn restore_of_closed_session_keeps_panel_hidden() {
        let store = seeded_store(&[ChatMessage::now(Role::User, "hi")], false);
        let mut ctrl = controller_with_store(store);
        ctrl.init();
        assert!(!ctrl.dom().is_visible(NodeId::Panel));
        assert_eq!(ctrl.dom().messages().len(), 1);
    }

    #[test]
    fn partial_reapplication_keeps_earlier_values() {
        let mut ctrl = controller();
        ctrl.apply_settings(WidgetSettings {
            colors: Some(ColorSettings {
                primary: Some("#ff0000".into()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(ctrl.dom().var("--cc-primary"), Some("#ff0000"));

        ctrl.apply_settings(WidgetSettings {
            layout: Some(LayoutSettings {
                position: Some(Position::TopLeft),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(ctrl.dom().var("--cc-primary"), Some("#ff0000"));
        assert_eq!(ctrl.dom().var("--cc-top"), Some("24px"));
        assert_eq!(ctrl.dom().var("--cc-bottom"), Some("auto"));
    }

    #[test]
    fn default_settings_reveal_launcher_immediately() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(WidgetSettings::default());
        assert!(ctrl.dom().is_visible(NodeId::Launcher));
    }

    #[test]
    fn messages_are_write_through_persisted() {
        let mut ctrl = controller();
        ctrl.apply_settings(WidgetSettings::default());
        ctrl.push_message(Role::User, "one");
        ctrl.push_message(Role::Assistant, "two");
        let persisted = ctrl.store().load();
        assert_eq!(persisted.messages.len(), 2);
        assert_eq!(persisted.messages[1].text, "two");
    }

    #[test]
    fn assistant_message_while_closed_shows_unread_badge() {
        let mut ctrl = controller();
        ctrl.apply_settings(WidgetSettings::default());
        ctrl.push_message(Role::Assistant, "psst");
        assert!(ctrl.dom().is_visible(NodeId::UnreadBadge));
        ctrl.open();
        assert!(!ctrl.dom().is_visible(NodeId::UnreadBadge));
    }

    #[test]
    fn flags_persist_across_controllers_in_same_tab() {
        let mut ctrl = controller();
        ctrl.apply_settings(WidgetSettings::default());
        ctrl.on_input_focus();
        assert!(ctrl.store().flag(SessionFlag::Interacted));
    }
}
