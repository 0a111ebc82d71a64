//! Pure settings application.
//!
//! [`effects`] maps the visual sections of a settings document to render
//! effects; [`motion_plan`] distills the behavioral sections into a plan
//! the controller executes through its scheduler. Absent sections
//! contribute nothing, so partial documents never clear earlier state.

use std::time::Duration;

use coralchat_dom::{NodeId, RenderEffect};

use crate::context::ApplyContext;
use crate::defaults::{
    DEFAULT_ATTENTION_CYCLES, DEFAULT_ATTENTION_INTERVAL_SECS, DEFAULT_AUTO_OPEN_DELAY_SECS,
    DEFAULT_MAX_ANIMATION_SECS, DEFAULT_ROTATE_INTERVAL_SECS, DEFAULT_SCROLL_PERCENT,
    DEFAULT_VISIBILITY_DELAY_SECS, MIN_ROTATE_INTERVAL_SECS,
};
use crate::greeting;
use crate::schema::{IconKind, IconShape, Position, VisibilityMode, WidgetSettings};

/// How the launcher first becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityPlan {
    Immediate,
    Delay(Duration),
    /// Reveal once scroll depth crosses this percentage.
    Scroll(u8),
    ExitIntent {
        auto_open: bool,
    },
}

/// Periodic attention animation on the launcher.
#[derive(Debug, Clone, PartialEq)]
pub struct AttentionPlan {
    pub class: &'static str,
    /// Firings before the animation retires.
    pub cycles: u32,
    pub interval: Duration,
    /// How long one firing keeps the class applied.
    pub duration: Duration,
}

/// Rotating prompt texts for the label or bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationPlan {
    pub items: Vec<String>,
    pub interval: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutoOpenPlan {
    pub delay: Duration,
    pub message: Option<String>,
}

/// Behavioral intent derived from a settings document and page context.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionPlan {
    pub visibility: VisibilityPlan,
    /// Motion is suppressed wholesale by a matched rule.
    pub motion_disabled: bool,
    pub entry_class: Option<&'static str>,
    pub open_class: Option<&'static str>,
    pub attention: Option<AttentionPlan>,
    pub rotation: Option<RotationPlan>,
    pub auto_open: Option<AutoOpenPlan>,
}

impl Default for MotionPlan {
    fn default() -> Self {
        Self {
            visibility: VisibilityPlan::Immediate,
            motion_disabled: false,
            entry_class: None,
            open_class: None,
            attention: None,
            rotation: None,
            auto_open: None,
        }
    }
}

/// Resolve the header title/subtitle.
///
/// Precedence: social-proof avatar mode wins, then a non-empty computed
/// greeting, then the configured welcome copy. `None` means "leave the
/// current text alone".
pub fn resolve_header(
    settings: &WidgetSettings,
    ctx: &ApplyContext,
) -> (Option<String>, Option<String>) {
    let greeting = settings
        .copy
        .as_ref()
        .and_then(|c| c.greeting.as_ref())
        .map(|g| greeting::resolve(g, ctx))
        .unwrap_or_default();

    let social = settings.social_proof.as_ref();
    let availability = social.and_then(|s| s.availability_text.clone());

    if let Some(social) = social {
        if social.show_avatar == Some(true) {
            if let Some(name) = &social.agent_name {
                let subtitle = if greeting.is_empty() {
                    availability
                } else {
                    Some(greeting)
                };
                return (Some(name.clone()), subtitle);
            }
        }
    }

    if !greeting.is_empty() {
        return (Some(greeting), availability);
    }

    let copy = settings.copy.as_ref();
    (
        copy.and_then(|c| c.welcome_message.clone()),
        copy.and_then(|c| c.subtitle.clone()),
    )
}

/// Map the visual sections of a document to render effects.
pub fn effects(settings: &WidgetSettings, ctx: &ApplyContext) -> Vec<RenderEffect> {
    let mut out = Vec::new();

    if let Some(colors) = &settings.colors {
        let pairs = [
            ("--cc-primary", &colors.primary),
            ("--cc-primary-text", &colors.primary_text),
            ("--cc-bg", &colors.background),
            ("--cc-text", &colors.text),
            ("--cc-header-bg", &colors.header_background),
            ("--cc-header-text", &colors.header_text),
            ("--cc-user-bubble", &colors.user_bubble),
            ("--cc-user-bubble-text", &colors.user_bubble_text),
            ("--cc-assistant-bubble", &colors.assistant_bubble),
            ("--cc-assistant-bubble-text", &colors.assistant_bubble_text),
        ];
        for (var, value) in pairs {
            if let Some(value) = value {
                out.push(RenderEffect::SetVar(var, value.clone()));
            }
        }
    }

    if let Some(typography) = &settings.typography {
        if let Some(family) = &typography.font_family {
            out.push(RenderEffect::SetVar("--cc-font-family", family.clone()));
        }
        if let Some(size) = typography.font_size {
            out.push(RenderEffect::SetVar("--cc-font-size", format!("{size}px")));
        }
    }

    if let Some(layout) = &settings.layout {
        if let Some(position) = layout.position {
            let offset = format!("{}px", layout.offset.unwrap_or(24));
            // The two anchored sides get the offset; the opposite sides are
            // reset to auto so re-anchoring never leaves stale offsets.
            let (top, right, bottom, left) = match position {
                Position::BottomRight => ("auto".into(), offset.clone(), offset, "auto".into()),
                Position::BottomLeft => ("auto".into(), "auto".into(), offset.clone(), offset),
                Position::TopRight => (offset.clone(), offset, "auto".into(), "auto".into()),
                Position::TopLeft => (offset.clone(), "auto".into(), "auto".into(), offset),
            };
            out.push(RenderEffect::SetVar("--cc-top", top));
            out.push(RenderEffect::SetVar("--cc-right", right));
            out.push(RenderEffect::SetVar("--cc-bottom", bottom));
            out.push(RenderEffect::SetVar("--cc-left", left));
        }
        if let Some(width) = layout.width {
            out.push(RenderEffect::SetVar("--cc-width", format!("{width}px")));
        }
        if let Some(height) = layout.height {
            out.push(RenderEffect::SetVar("--cc-height", format!("{height}px")));
        }
        if let Some(z) = layout.z_index {
            out.push(RenderEffect::SetVar("--cc-z", z.to_string()));
        }
        if let Some(radius) = layout.corner_radius {
            out.push(RenderEffect::SetVar("--cc-radius", format!("{radius}px")));
        }
    }

    if let Some(copy) = &settings.copy {
        if let Some(placeholder) = &copy.input_placeholder {
            out.push(RenderEffect::SetAttr(
                NodeId::TextInput,
                "placeholder",
                placeholder.clone(),
            ));
        }
        if let Some(label) = &copy.send_label {
            out.push(RenderEffect::SetText(NodeId::SendButton, label.clone()));
        }
    }

    let (title, subtitle) = resolve_header(settings, ctx);
    if let Some(title) = title {
        out.push(RenderEffect::SetText(NodeId::HeaderTitle, title));
    }
    if let Some(subtitle) = subtitle {
        out.push(RenderEffect::SetText(NodeId::HeaderSubtitle, subtitle));
    }

    if let Some(social) = &settings.social_proof {
        match social.show_avatar {
            Some(true) => {
                if let Some(url) = &social.agent_avatar_url {
                    out.push(RenderEffect::SetAttr(
                        NodeId::HeaderAvatar,
                        "src",
                        url.clone(),
                    ));
                }
                out.push(RenderEffect::Show(NodeId::HeaderAvatar));
            }
            Some(false) => out.push(RenderEffect::Hide(NodeId::HeaderAvatar)),
            None => {}
        }
    }

    if let Some(accessibility) = &settings.accessibility {
        let toggles = [
            ("cc-dark", accessibility.dark_mode),
            ("cc-high-contrast", accessibility.high_contrast),
            ("cc-focus-outline", accessibility.focus_outline),
        ];
        for (class, value) in toggles {
            match value {
                Some(true) => out.push(RenderEffect::AddClass(NodeId::Root, class)),
                Some(false) => out.push(RenderEffect::RemoveClass(NodeId::Root, class)),
                None => {}
            }
        }
    }

    if let Some(icon) = &settings.icon {
        match icon.kind {
            Some(IconKind::Image) => {
                if let Some(url) = &icon.image_url {
                    out.push(RenderEffect::SetText(NodeId::LauncherIcon, String::new()));
                    out.push(RenderEffect::SetAttr(
                        NodeId::LauncherIcon,
                        "data-image",
                        url.clone(),
                    ));
                }
            }
            Some(IconKind::Emoji) | None => {
                if let Some(emoji) = &icon.emoji {
                    out.push(RenderEffect::SetText(NodeId::LauncherIcon, emoji.clone()));
                }
            }
        }
        if let Some(size) = icon.size {
            out.push(RenderEffect::SetVar(
                "--cc-launcher-size",
                format!("{size}px"),
            ));
        }
        if let Some(shape) = icon.shape {
            let all = [
                (IconShape::Circle, "cc-shape-circle"),
                (IconShape::Rounded, "cc-shape-rounded"),
                (IconShape::Square, "cc-shape-square"),
            ];
            for (candidate, class) in all {
                if candidate == shape {
                    out.push(RenderEffect::AddClass(NodeId::Launcher, class));
                } else {
                    out.push(RenderEffect::RemoveClass(NodeId::Launcher, class));
                }
            }
        }
        match icon.label.as_deref() {
            Some(label) if !label.is_empty() => {
                out.push(RenderEffect::SetText(NodeId::LauncherLabel, label.into()));
                out.push(RenderEffect::Show(NodeId::LauncherLabel));
            }
            Some(_) => out.push(RenderEffect::Hide(NodeId::LauncherLabel)),
            None => {}
        }
    }

    if let Some(micro) = &settings.micro_interactions {
        match micro.blink_cursor {
            Some(true) => out.push(RenderEffect::AddClass(NodeId::TextInput, "cc-blink")),
            Some(false) => out.push(RenderEffect::RemoveClass(NodeId::TextInput, "cc-blink")),
            None => {}
        }
    }

    out
}

/// Whether a configured rule disables motion in this context.
fn motion_disabled(settings: &WidgetSettings, ctx: &ApplyContext) -> bool {
    let Some(rules) = &settings.rules else {
        return false;
    };
    (rules.respect_reduced_motion == Some(true) && ctx.prefers_reduced_motion)
        || (rules.disable_on_mobile == Some(true) && ctx.is_mobile)
}

/// Distill the behavioral sections into a plan.
pub fn motion_plan(settings: &WidgetSettings, ctx: &ApplyContext) -> MotionPlan {
    let disabled = motion_disabled(settings, ctx);
    let motion = settings.motion.as_ref();

    // A matched reduced-motion or mobile rule forces immediate display
    // regardless of the configured trigger.
    let visibility = if disabled {
        VisibilityPlan::Immediate
    } else {
        match motion.and_then(|m| m.visibility.as_ref()) {
            None => VisibilityPlan::Immediate,
            Some(vis) => match vis.mode.unwrap_or(VisibilityMode::Immediate) {
                VisibilityMode::Immediate => VisibilityPlan::Immediate,
                VisibilityMode::Delay => VisibilityPlan::Delay(Duration::from_secs(
                    vis.delay_secs.unwrap_or(DEFAULT_VISIBILITY_DELAY_SECS),
                )),
                VisibilityMode::Scroll => VisibilityPlan::Scroll(
                    vis.scroll_percent.unwrap_or(DEFAULT_SCROLL_PERCENT).min(100),
                ),
                VisibilityMode::ExitIntent => VisibilityPlan::ExitIntent {
                    auto_open: vis.auto_open_on_exit == Some(true),
                },
            },
        }
    };

    let attention = if disabled {
        None
    } else {
        settings.attention.as_ref().and_then(|attention| {
            let kind = attention.animation?;
            let max_secs = settings
                .rules
                .as_ref()
                .and_then(|r| r.max_animation_secs)
                .unwrap_or(DEFAULT_MAX_ANIMATION_SECS);
            let secs = kind.nominal_secs().min(max_secs).max(0.0);
            Some(AttentionPlan {
                class: kind.class(),
                cycles: attention.cycles.unwrap_or(DEFAULT_ATTENTION_CYCLES).max(1),
                interval: Duration::from_secs(
                    attention
                        .interval_secs
                        .unwrap_or(DEFAULT_ATTENTION_INTERVAL_SECS),
                ),
                duration: Duration::from_secs_f32(secs),
            })
        })
    };

    let rotation = settings.prompts.as_ref().and_then(|prompts| {
        let mut items: Vec<String> = Vec::new();
        if prompts.use_contextual == Some(true) {
            items = prompts
                .contextual
                .iter()
                .filter(|p| ctx.page_path.contains(&p.path_contains))
                .map(|p| p.text.clone())
                .collect();
        }
        if items.is_empty() {
            items = prompts.rotating.clone();
        }
        if items.is_empty() {
            return None;
        }
        let secs = prompts
            .rotate_interval_secs
            .unwrap_or(DEFAULT_ROTATE_INTERVAL_SECS)
            .max(MIN_ROTATE_INTERVAL_SECS);
        Some(RotationPlan {
            items,
            interval: Duration::from_secs(secs),
        })
    });

    let auto_open = settings
        .behavior
        .as_ref()
        .and_then(|b| b.auto_open.as_ref())
        .filter(|auto| auto.enabled)
        .map(|auto| AutoOpenPlan {
            delay: Duration::from_secs(auto.delay_secs.unwrap_or(DEFAULT_AUTO_OPEN_DELAY_SECS)),
            message: auto.message.clone(),
        });

    MotionPlan {
        visibility,
        motion_disabled: disabled,
        entry_class: if disabled {
            None
        } else {
            motion.and_then(|m| m.entry_animation).map(|a| a.class())
        },
        open_class: if disabled {
            None
        } else {
            motion.and_then(|m| m.open_animation).map(|a| a.class())
        },
        attention,
        rotation,
        auto_open,
    }
}
