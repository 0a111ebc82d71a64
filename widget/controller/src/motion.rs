//! Visibility triggers, attention animation, and prompt rotation.

use coralchat_core::{KeyValueStore, SessionFlag};
use coralchat_dom::{Dom, NodeId};
use std::time::Duration;
use tracing::debug;

use crate::controller::{WidgetController, ENTRY_CLEANUP_DELAY};
use crate::scheduler::{Scheduler, TaskKey};

/// Live attention animation. `remaining` counts periodic firings; the
/// state is dropped after the last cycle's stop task runs.
#[derive(Debug, Clone)]
pub(crate) struct AttentionState {
    pub class: &'static str,
    pub remaining: u32,
    pub interval: Duration,
    pub duration: Duration,
}

/// Live prompt rotation.
#[derive(Debug, Clone)]
pub(crate) struct RotationState {
    pub items: Vec<String>,
    pub index: usize,
    pub interval: Duration,
    pub target: RotationTarget,
}

/// Where rotating prompts are written: the icon label when one is
/// configured, else the floating bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RotationTarget {
    Label,
    Bubble,
}

impl<D: Dom, S: KeyValueStore, T: Scheduler> WidgetController<D, S, T> {
    /// Dispatch a fired timer. The host's timer queue (or a test) calls
    /// this with the key it armed via the scheduler.
    pub fn on_task(&mut self, key: TaskKey) {
        match key {
            TaskKey::ShowLauncher => self.reveal_launcher(),
            TaskKey::AutoOpen => self.open(),
            TaskKey::AutoOpenMessage => self.deliver_auto_open_message(),
            TaskKey::PromptRotation => self.advance_rotation(),
            TaskKey::AttentionStart => self.attention_fire(),
            TaskKey::AttentionStop => self.attention_rest(),
            TaskKey::EntryCleanup => {
                if let Some(class) = self.entry_class.take() {
                    self.dom.remove_class(NodeId::Launcher, class);
                }
            }
            TaskKey::RippleCleanup => self.dom.remove_class(NodeId::Launcher, "cc-rippling"),
        }
    }

    /// Arm the configured launcher visibility trigger, replacing any
    /// previous arming.
    pub(crate) fn arm_visibility(&mut self) {
        use coralchat_settings::VisibilityPlan;

        self.scheduler.cancel(TaskKey::ShowLauncher);
        if self.session.is_open {
            return;
        }
        match self.plan.visibility {
            VisibilityPlan::Immediate => self.reveal_launcher(),
            VisibilityPlan::Delay(delay) => self.scheduler.schedule(TaskKey::ShowLauncher, delay),
            VisibilityPlan::Scroll(percent) => self.scroll_threshold = Some(percent),
            // Armed passively; `on_exit_intent` consults the plan.
            VisibilityPlan::ExitIntent { .. } => {}
        }
    }

    pub(crate) fn arm_auto_open(&mut self) {
        self.scheduler.cancel(TaskKey::AutoOpen);
        if self.session.is_open {
            return;
        }
        if let Some(auto) = &self.plan.auto_open {
            self.scheduler.schedule(TaskKey::AutoOpen, auto.delay);
        }
    }

    /// Show the launcher, playing the one-time entry animation, then arm
    /// the attention animation and prompt rotation.
    pub(crate) fn reveal_launcher(&mut self) {
        if self.launcher_visible || self.session.is_open {
            return;
        }
        self.launcher_visible = true;
        self.dom.show(NodeId::Launcher);
        if let Some(class) = self.plan.entry_class {
            if !self.store.flag(SessionFlag::EntryPlayed) {
                self.store.set_flag(SessionFlag::EntryPlayed);
                self.entry_class = Some(class);
                self.dom.add_class(NodeId::Launcher, class);
                self.scheduler
                    .schedule(TaskKey::EntryCleanup, ENTRY_CLEANUP_DELAY);
            }
        }
        self.arm_attention();
        self.start_rotation();
    }

    /// Scroll-depth report from the host. Returns true once the armed
    /// threshold fires, after which the host can drop its listener.
    pub fn on_scroll(&mut self, percent: f64) -> bool {
        let Some(threshold) = self.scroll_threshold else {
            return false;
        };
        if percent < f64::from(threshold) {
            return false;
        }
        self.scroll_threshold = None;
        self.reveal_launcher();
        true
    }

    /// Pointer crossed the top viewport edge. Fires at most once per tab
    /// session.
    pub fn on_exit_intent(&mut self) {
        use coralchat_settings::VisibilityPlan;

        let VisibilityPlan::ExitIntent { auto_open } = self.plan.visibility else {
            return;
        };
        if self.store.flag(SessionFlag::ExitIntentTriggered) {
            return;
        }
        self.store.set_flag(SessionFlag::ExitIntentTriggered);
        debug!(auto_open, "exit intent fired");
        self.reveal_launcher();
        if auto_open {
            self.open();
        }
    }

    /// Arm the periodic attention animation, subject to the rules.
    /// `animate_once_per_session` is checked before
    /// `stop_after_interaction`; the first matching rule wins.
    pub(crate) fn arm_attention(&mut self) {
        self.scheduler.cancel(TaskKey::AttentionStart);
        self.scheduler.cancel(TaskKey::AttentionStop);
        self.attention = None;

        let Some(plan) = self.plan.attention.clone() else {
            return;
        };
        if !self.launcher_visible {
            return;
        }
        let rules = self.rules();
        if rules.animate_once_per_session == Some(true)
            && self.store.flag(SessionFlag::AttentionPlayed)
        {
            return;
        }
        if rules.stop_after_interaction == Some(true) && self.store.flag(SessionFlag::Interacted) {
            return;
        }
        let interval = plan.interval;
        self.attention = Some(AttentionState {
            class: plan.class,
            remaining: plan.cycles,
            interval,
            duration: plan.duration,
        });
        self.scheduler.schedule(TaskKey::AttentionStart, interval);
    }

    pub(crate) fn stop_attention(&mut self) {
        self.scheduler.cancel(TaskKey::AttentionStart);
        self.scheduler.cancel(TaskKey::AttentionStop);
        if let Some(state) = self.attention.take() {
            self.dom.remove_class(NodeId::Launcher, state.class);
        }
    }

    fn attention_fire(&mut self) {
        let Some(state) = self.attention.as_mut() else {
            return;
        };
        state.remaining = state.remaining.saturating_sub(1);
        let (class, duration, interval, remaining) =
            (state.class, state.duration, state.interval, state.remaining);

        self.dom.add_class(NodeId::Launcher, class);
        self.scheduler.schedule(TaskKey::AttentionStop, duration);
        if self.rules().animate_once_per_session == Some(true) {
            self.store.set_flag(SessionFlag::AttentionPlayed);
        }
        if remaining > 0 {
            self.scheduler.schedule(TaskKey::AttentionStart, interval);
        }
    }

    fn attention_rest(&mut self) {
        let Some(state) = &self.attention else {
            return;
        };
        let (class, retired) = (state.class, state.remaining == 0);
        self.dom.remove_class(NodeId::Launcher, class);
        if retired {
            self.attention = None;
        }
    }

    /// Start prompt rotation, always cancelling any prior rotation first.
    pub(crate) fn start_rotation(&mut self) {
        self.stop_rotation();
        let Some(plan) = self.plan.rotation.clone() else {
            return;
        };
        if !self.launcher_visible {
            return;
        }
        if self.rules().stop_after_interaction == Some(true)
            && self.store.flag(SessionFlag::Interacted)
        {
            return;
        }
        let label_configured = self
            .settings
            .icon
            .as_ref()
            .and_then(|i| i.label.as_deref())
            .is_some_and(|l| !l.is_empty());
        let target = if label_configured {
            RotationTarget::Label
        } else {
            RotationTarget::Bubble
        };
        let interval = plan.interval;
        self.rotation = Some(RotationState {
            items: plan.items,
            index: 0,
            interval,
            target,
        });
        self.rotation_show_current();
        self.scheduler.schedule(TaskKey::PromptRotation, interval);
    }

    /// Stop rotation and restore the target: the label falls back to its
    /// configured text, the bubble hides.
    pub(crate) fn stop_rotation(&mut self) {
        self.scheduler.cancel(TaskKey::PromptRotation);
        let Some(state) = self.rotation.take() else {
            return;
        };
        match state.target {
            RotationTarget::Label => {
                let label = self
                    .settings
                    .icon
                    .as_ref()
                    .and_then(|i| i.label.clone())
                    .unwrap_or_default();
                self.dom.set_text(NodeId::LauncherLabel, &label);
            }
            RotationTarget::Bubble => self.dom.hide(NodeId::PromptBubble),
        }
    }

    fn advance_rotation(&mut self) {
        let Some(state) = self.rotation.as_mut() else {
            return;
        };
        state.index = (state.index + 1) % state.items.len();
        let interval = state.interval;
        self.rotation_show_current();
        self.scheduler.schedule(TaskKey::PromptRotation, interval);
    }

    fn rotation_show_current(&mut self) {
        let Some(state) = &self.rotation else {
            return;
        };
        let text = state.items[state.index].clone();
        match state.target {
            RotationTarget::Label => self.dom.set_text(NodeId::LauncherLabel, &text),
            RotationTarget::Bubble => {
                self.dom.set_text(NodeId::PromptBubble, &text);
                self.dom.show(NodeId::PromptBubble);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use coralchat_core::SessionFlag;
    use coralchat_dom::NodeId;
    use coralchat_settings::{
        AnimationKind, AttentionSettings, AutoOpenSettings, BehaviorSettings, IconSettings,
        MotionSettings, PromptSettings, RuleSettings, VisibilityMode, VisibilitySettings,
        WidgetSettings,
    };

    use crate::testutil::controller;
    use crate::TaskKey;

    fn attention_settings() -> WidgetSettings {
        WidgetSettings {
            attention: Some(AttentionSettings {
                animation: Some(AnimationKind::Bounce),
                cycles: Some(2),
                interval_secs: Some(10),
            }),
            prompts: Some(PromptSettings {
                rotating: vec!["Hi there".into(), "Questions?".into()],
                rotate_interval_secs: Some(4),
                ..Default::default()
            }),
            rules: Some(RuleSettings {
                stop_after_interaction: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn delay_trigger_is_replaced_on_reapplication() {
        let mut ctrl = controller();
        ctrl.init();
        let settings = WidgetSettings {
            motion: Some(MotionSettings {
                visibility: Some(VisibilitySettings {
                    mode: Some(VisibilityMode::Delay),
                    delay_secs: Some(8),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        ctrl.apply_settings(settings.clone());
        ctrl.apply_settings(settings);
        assert_eq!(
            ctrl.scheduler().delay_of(TaskKey::ShowLauncher),
            Some(Duration::from_secs(8))
        );
        assert_eq!(
            ctrl.scheduler()
                .pending()
                .iter()
                .filter(|(k, _)| *k == TaskKey::ShowLauncher)
                .count(),
            1
        );
        assert!(!ctrl.dom().is_visible(NodeId::Launcher));

        ctrl.on_task(TaskKey::ShowLauncher);
        assert!(ctrl.dom().is_visible(NodeId::Launcher));
    }

    #[test]
    fn scroll_trigger_fires_once_at_threshold() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(WidgetSettings {
            motion: Some(MotionSettings {
                visibility: Some(VisibilitySettings {
                    mode: Some(VisibilityMode::Scroll),
                    scroll_percent: Some(50),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert!(!ctrl.on_scroll(30.0));
        assert!(!ctrl.dom().is_visible(NodeId::Launcher));
        assert!(ctrl.on_scroll(60.0));
        assert!(ctrl.dom().is_visible(NodeId::Launcher));
        // Disarmed after firing.
        assert!(!ctrl.on_scroll(90.0));
    }

    #[test]
    fn exit_intent_fires_once_per_session() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(WidgetSettings {
            motion: Some(MotionSettings {
                visibility: Some(VisibilitySettings {
                    mode: Some(VisibilityMode::ExitIntent),
                    auto_open_on_exit: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        });
        ctrl.on_exit_intent();
        assert!(ctrl.is_open());
        assert!(ctrl.store().flag(SessionFlag::ExitIntentTriggered));

        ctrl.close();
        ctrl.on_exit_intent();
        assert!(!ctrl.is_open());
    }

    #[test]
    fn attention_cycles_then_retires() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(attention_settings());
        assert!(ctrl.scheduler().is_pending(TaskKey::AttentionStart));

        ctrl.on_task(TaskKey::AttentionStart);
        assert!(ctrl.dom().has_class(NodeId::Launcher, "cc-anim-bounce"));
        ctrl.on_task(TaskKey::AttentionStop);
        assert!(!ctrl.dom().has_class(NodeId::Launcher, "cc-anim-bounce"));

        // Second and final cycle.
        ctrl.on_task(TaskKey::AttentionStart);
        ctrl.on_task(TaskKey::AttentionStop);
        ctrl.on_task(TaskKey::AttentionStart);
        assert!(!ctrl.dom().has_class(NodeId::Launcher, "cc-anim-bounce"));
    }

    #[test]
    fn interaction_stops_attention_and_rotation_for_good() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(attention_settings());
        assert!(ctrl.scheduler().is_pending(TaskKey::AttentionStart));
        assert!(ctrl.dom().is_visible(NodeId::PromptBubble));

        ctrl.on_input_focus();
        assert!(!ctrl.scheduler().is_pending(TaskKey::AttentionStart));
        assert!(!ctrl.scheduler().is_pending(TaskKey::PromptRotation));
        assert!(!ctrl.dom().is_visible(NodeId::PromptBubble));

        // Re-applying settings must not resurrect either behavior.
        ctrl.apply_settings(attention_settings());
        assert!(!ctrl.scheduler().is_pending(TaskKey::AttentionStart));
        assert!(!ctrl.scheduler().is_pending(TaskKey::PromptRotation));
    }

    #[test]
    fn animate_once_per_session_wins_over_later_checks() {
        let mut settings = attention_settings();
        settings.rules = Some(RuleSettings {
            animate_once_per_session: Some(true),
            ..Default::default()
        });
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(settings.clone());

        ctrl.on_task(TaskKey::AttentionStart);
        assert!(ctrl.store().flag(SessionFlag::AttentionPlayed));
        ctrl.on_task(TaskKey::AttentionStop);

        ctrl.apply_settings(settings);
        assert!(!ctrl.scheduler().is_pending(TaskKey::AttentionStart));
    }

    #[test]
    fn rotation_prefers_label_when_configured() {
        let mut settings = attention_settings();
        settings.icon = Some(IconSettings {
            label: Some("Chat".into()),
            ..Default::default()
        });
        settings.rules = None;
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(settings);

        assert_eq!(ctrl.dom().text(NodeId::LauncherLabel), Some("Hi there"));
        ctrl.on_task(TaskKey::PromptRotation);
        assert_eq!(ctrl.dom().text(NodeId::LauncherLabel), Some("Questions?"));
        ctrl.on_task(TaskKey::PromptRotation);
        assert_eq!(ctrl.dom().text(NodeId::LauncherLabel), Some("Hi there"));

        ctrl.mark_interacted();
        // No stop rule: rotation keeps running.
        assert!(ctrl.scheduler().is_pending(TaskKey::PromptRotation));
    }

    #[test]
    fn auto_open_task_opens_closed_panel() {
        let mut ctrl = controller();
        ctrl.init();
        ctrl.apply_settings(WidgetSettings {
            behavior: Some(BehaviorSettings {
                auto_open: Some(AutoOpenSettings {
                    enabled: true,
                    delay_secs: Some(2),
                    message: None,
                }),
            }),
            ..Default::default()
        });
        assert_eq!(
            ctrl.scheduler().delay_of(TaskKey::AutoOpen),
            Some(Duration::from_secs(2))
        );
        ctrl.on_task(TaskKey::AutoOpen);
        assert!(ctrl.is_open());
    }
}
