//! Panel state machine: closed, open, open+minimized.
//!
//! Every transition that changes open/closed persists immediately.
//! Minimize is a visual height toggle on the open panel and is not
//! persisted.

use coralchat_core::{KeyValueStore, Role, SessionFlag};
use coralchat_dom::{Dom, NodeId, Sound};
use tracing::info;

use crate::controller::{WidgetController, TYPING_REVEAL_DELAY};
use crate::scheduler::{Scheduler, TaskKey};

impl<D: Dom, S: KeyValueStore, T: Scheduler> WidgetController<D, S, T> {
    pub fn toggle(&mut self) {
        if self.session.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Open the panel. In order: reveal panel, hide launcher, persist,
    /// focus input, open animation, one-time chime, typing indicator and
    /// canned first message on a fresh conversation, scroll to bottom.
    pub fn open(&mut self) {
        if self.session.is_open {
            return;
        }
        self.session.is_open = true;
        self.minimized = false;
        self.dom.remove_class(NodeId::Panel, "cc-minimized");
        self.dom.show(NodeId::Panel);
        self.dom.hide(NodeId::Launcher);
        self.launcher_visible = false;
        self.dom.hide(NodeId::UnreadBadge);
        self.stop_rotation();
        self.stop_attention();
        self.scheduler.cancel(TaskKey::AutoOpen);
        self.store.save_is_open(true);
        self.dom.focus(NodeId::TextInput);

        if let Some(class) = self.plan.open_class {
            self.dom.add_class(NodeId::Panel, class);
        }

        let chime_enabled = self
            .settings
            .sound
            .as_ref()
            .and_then(|s| s.chime)
            .unwrap_or(false);
        if chime_enabled && !self.store.flag(SessionFlag::ChimePlayed) {
            self.store.set_flag(SessionFlag::ChimePlayed);
            let volume = self.volume();
            self.dom.play_sound(Sound::Chime, volume);
        }

        // First open of a fresh conversation: optional typing indicator,
        // then the canned auto-open message.
        if self.session.messages.is_empty() {
            let typing = self
                .settings
                .micro_interactions
                .as_ref()
                .and_then(|m| m.typing_indicator)
                .unwrap_or(false);
            let pending_message = self
                .plan
                .auto_open
                .as_ref()
                .and_then(|a| a.message.as_ref())
                .is_some()
                && !self.store.flag(SessionFlag::AutoOpenMessage);
            if typing {
                self.dom.show(NodeId::TypingIndicator);
            }
            if typing || pending_message {
                self.scheduler
                    .schedule(TaskKey::AutoOpenMessage, TYPING_REVEAL_DELAY);
            }
        }

        self.dom.scroll_messages_to_bottom();
    }

    /// Close the panel. Closing an already-closed widget leaves state
    /// unchanged but still persists `is_open = false`.
    pub fn close(&mut self) {
        if !self.session.is_open {
            self.store.save_is_open(false);
            return;
        }
        self.session.is_open = false;
        self.minimized = false;
        self.dom.remove_class(NodeId::Panel, "cc-minimized");
        self.dom.hide(NodeId::Panel);
        self.dom.hide(NodeId::TypingIndicator);
        self.store.save_is_open(false);
        self.reveal_launcher();
    }

    /// Toggle the minimized height while open. No persistence.
    pub fn minimize(&mut self) {
        if !self.session.is_open {
            return;
        }
        self.minimized = !self.minimized;
        if self.minimized {
            self.dom.add_class(NodeId::Panel, "cc-minimized");
        } else {
            self.dom.remove_class(NodeId::Panel, "cc-minimized");
        }
    }

    /// Drop the conversation: clear persisted state and the rendered list,
    /// then hand the input back to the user. One-time flags survive.
    pub fn start_new_chat(&mut self) {
        info!("starting new conversation");
        self.store.clear();
        self.session.session_id = None;
        self.session.messages.clear();
        self.dom.clear_messages();
        self.conversation_complete = false;
        self.in_flight = false;
        self.dom.hide(NodeId::ContactForm);
        self.dom.hide(NodeId::ContactHint);
        self.dom.hide(NodeId::LoadingIndicator);
        self.dom.show(NodeId::InputRow);
        self.set_inputs_enabled(true);
        self.dom.focus(NodeId::TextInput);
    }

    /// Launcher press: optional ripple, then toggle.
    pub fn launcher_clicked(&mut self) {
        let ripple = self
            .settings
            .micro_interactions
            .as_ref()
            .and_then(|m| m.ripple)
            .unwrap_or(false);
        if ripple && !self.plan.motion_disabled {
            self.dom.add_class(NodeId::Launcher, "cc-rippling");
            self.scheduler.schedule(
                TaskKey::RippleCleanup,
                crate::controller::RIPPLE_CLEANUP_DELAY,
            );
        }
        self.toggle();
    }

    /// The user focused the text input.
    pub fn on_input_focus(&mut self) {
        self.mark_interacted();
    }

    /// Record the first interaction; under the stop-after-interaction rule
    /// this also retires the attention animation and prompt rotation for
    /// the rest of the session.
    pub fn mark_interacted(&mut self) {
        if self.store.flag(SessionFlag::Interacted) {
            return;
        }
        self.store.set_flag(SessionFlag::Interacted);
        if self.rules().stop_after_interaction == Some(true) {
            self.stop_rotation();
            self.stop_attention();
        }
    }

    pub(crate) fn deliver_auto_open_message(&mut self) {
        self.dom.hide(NodeId::TypingIndicator);
        let Some(message) = self
            .plan
            .auto_open
            .as_ref()
            .and_then(|a| a.message.clone())
        else {
            return;
        };
        if self.store.flag(SessionFlag::AutoOpenMessage) || !self.session.messages.is_empty() {
            return;
        }
        self.store.set_flag(SessionFlag::AutoOpenMessage);
        self.push_message(Role::Assistant, &message);
    }
}

#[cfg(test)]
mod tests {
    use coralchat_core::{Role, SessionFlag};
    use coralchat_dom::{NodeId, Sound};
    use coralchat_settings::{
        AutoOpenSettings, BehaviorSettings, MicroSettings, SoundSettings, WidgetSettings,
    };

    use crate::testutil::controller;
    use crate::TaskKey;

    fn settings_with_chime() -> WidgetSettings {
        WidgetSettings {
            sound: Some(SoundSettings {
                chime: Some(true),
                volume: Some(0.8),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn open_reveals_panel_and_hides_launcher() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(WidgetSettings::default());
        ctrl.open();
        assert!(ctrl.dom().is_visible(NodeId::Panel));
        assert!(!ctrl.dom().is_visible(NodeId::Launcher));
        assert_eq!(ctrl.dom().focused(), Some(NodeId::TextInput));
        assert!(ctrl.store().load().is_open);
    }

    #[test]
    fn chime_plays_at_most_once_per_tab() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(settings_with_chime());
        ctrl.open();
        ctrl.close();
        ctrl.open();
        assert_eq!(ctrl.dom().sounds(), &[(Sound::Chime, 0.8)]);
        assert!(ctrl.store().flag(SessionFlag::ChimePlayed));
    }

    #[test]
    fn close_on_closed_widget_is_idempotent() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(WidgetSettings::default());
        ctrl.close();
        assert!(!ctrl.is_open());
        assert!(!ctrl.store().load().is_open);
        ctrl.close();
        assert!(!ctrl.store().load().is_open);
        assert!(!ctrl.dom().is_visible(NodeId::Panel));
    }

    #[test]
    fn close_brings_launcher_back() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(WidgetSettings::default());
        ctrl.open();
        ctrl.close();
        assert!(ctrl.dom().is_visible(NodeId::Launcher));
        assert!(!ctrl.dom().is_visible(NodeId::Panel));
    }

    #[test]
    fn minimize_only_toggles_class_while_open() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(WidgetSettings::default());
        ctrl.minimize();
        assert!(!ctrl.dom().has_class(NodeId::Panel, "cc-minimized"));
        ctrl.open();
        ctrl.minimize();
        assert!(ctrl.dom().has_class(NodeId::Panel, "cc-minimized"));
        ctrl.minimize();
        assert!(!ctrl.dom().has_class(NodeId::Panel, "cc-minimized"));
    }

    #[test]
    fn typing_indicator_and_auto_message_on_first_open_only() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(WidgetSettings {
            behavior: Some(BehaviorSettings {
                auto_open: Some(AutoOpenSettings {
                    enabled: true,
                    message: Some("Hi! Ask me anything.".into()),
                    ..Default::default()
                }),
            }),
            micro_interactions: Some(MicroSettings {
                typing_indicator: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        });
        ctrl.open();
        assert!(ctrl.dom().is_visible(NodeId::TypingIndicator));
        assert!(ctrl.scheduler().is_pending(TaskKey::AutoOpenMessage));

        ctrl.on_task(TaskKey::AutoOpenMessage);
        assert!(!ctrl.dom().is_visible(NodeId::TypingIndicator));
        assert_eq!(
            ctrl.dom().messages(),
            &[(Role::Assistant, "Hi! Ask me anything.".to_string())]
        );

        // A later reopen must not inject the message again.
        ctrl.close();
        ctrl.open();
        ctrl.on_task(TaskKey::AutoOpenMessage);
        assert_eq!(ctrl.dom().messages().len(), 1);
    }

    #[test]
    fn start_new_chat_clears_conversation_but_not_flags() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(settings_with_chime());
        ctrl.open();
        ctrl.push_message(Role::User, "hello");
        ctrl.start_new_chat();

        assert!(ctrl.dom().messages().is_empty());
        assert!(ctrl.session().messages.is_empty());
        assert!(ctrl.session().session_id.is_none());
        assert!(ctrl.store().load().messages.is_empty());
        assert!(ctrl.store().flag(SessionFlag::ChimePlayed));
        assert!(ctrl.dom().is_enabled(NodeId::TextInput));
    }
}
