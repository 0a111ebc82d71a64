//! Settings document schema.
//!
//! Typed for serde JSON deserialization. Every section and nearly every
//! field is optional; absence means "leave the built-in default in place".

use serde::{Deserialize, Serialize};

/// Root of the tenant-configured settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub colors: Option<ColorSettings>,
    pub typography: Option<TypographySettings>,
    pub layout: Option<LayoutSettings>,
    pub copy: Option<CopySettings>,
    pub behavior: Option<BehaviorSettings>,
    pub accessibility: Option<AccessibilitySettings>,
    pub icon: Option<IconSettings>,
    pub social_proof: Option<SocialProofSettings>,
    pub motion: Option<MotionSettings>,
    pub attention: Option<AttentionSettings>,
    pub micro_interactions: Option<MicroSettings>,
    pub sound: Option<SoundSettings>,
    pub rules: Option<RuleSettings>,
    pub prompts: Option<PromptSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub primary: Option<String>,
    pub primary_text: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
    pub header_background: Option<String>,
    pub header_text: Option<String>,
    pub user_bubble: Option<String>,
    pub user_bubble_text: Option<String>,
    pub assistant_bubble: Option<String>,
    pub assistant_bubble_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographySettings {
    pub font_family: Option<String>,
    /// Base font size in pixels.
    pub font_size: Option<u32>,
}

/// Screen corner the widget is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub position: Option<Position>,
    /// Panel width in pixels.
    pub width: Option<u32>,
    /// Panel height in pixels.
    pub height: Option<u32>,
    /// Distance from the anchored edges in pixels.
    pub offset: Option<u32>,
    pub z_index: Option<i64>,
    pub corner_radius: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopySettings {
    pub welcome_message: Option<String>,
    pub subtitle: Option<String>,
    pub input_placeholder: Option<String>,
    pub send_label: Option<String>,
    pub greeting: Option<GreetingSettings>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreetingMode {
    /// Pick one of three strings by local hour.
    Time,
    /// Match the page path against ordered substring rules.
    Page,
    /// Page rules first, fall back to time.
    Both,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingSettings {
    pub mode: Option<GreetingMode>,
    pub morning: Option<String>,
    pub afternoon: Option<String>,
    pub evening: Option<String>,
    pub page_rules: Vec<PageRule>,
}

/// One page-matched greeting rule; first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRule {
    pub path_contains: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    pub auto_open: Option<AutoOpenSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoOpenSettings {
    pub enabled: bool,
    pub delay_secs: Option<u64>,
    /// Canned assistant message injected on first open, at most once per
    /// tab session.
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySettings {
    pub dark_mode: Option<bool>,
    pub high_contrast: Option<bool>,
    pub focus_outline: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Emoji,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconShape {
    Circle,
    Rounded,
    Square,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    #[serde(rename = "type")]
    pub kind: Option<IconKind>,
    pub emoji: Option<String>,
    pub image_url: Option<String>,
    /// Launcher size in pixels.
    pub size: Option<u32>,
    pub shape: Option<IconShape>,
    /// Text label shown beside the icon; empty or absent hides the label.
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialProofSettings {
    pub show_avatar: Option<bool>,
    pub agent_name: Option<String>,
    pub agent_avatar_url: Option<String>,
    pub availability_text: Option<String>,
}

/// Attention/entry animation families, each backed by a stylesheet class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    Bounce,
    Pulse,
    Shake,
    Wobble,
}

impl AnimationKind {
    pub fn class(self) -> &'static str {
        match self {
            AnimationKind::Bounce => "cc-anim-bounce",
            AnimationKind::Pulse => "cc-anim-pulse",
            AnimationKind::Shake => "cc-anim-shake",
            AnimationKind::Wobble => "cc-anim-wobble",
        }
    }

    /// Nominal duration of one play-through, in seconds. Clamped to
    /// `rules.max_animation_secs` when the attention plan is built.
    pub fn nominal_secs(self) -> f32 {
        match self {
            AnimationKind::Bounce => 1.0,
            AnimationKind::Pulse => 2.0,
            AnimationKind::Shake => 0.8,
            AnimationKind::Wobble => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryAnimation {
    FadeIn,
    SlideUp,
    Pop,
}

impl EntryAnimation {
    pub fn class(self) -> &'static str {
        match self {
            EntryAnimation::FadeIn => "cc-entry-fade-in",
            EntryAnimation::SlideUp => "cc-entry-slide-up",
            EntryAnimation::Pop => "cc-entry-pop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenAnimation {
    Fade,
    SlideUp,
    Scale,
}

impl OpenAnimation {
    pub fn class(self) -> &'static str {
        match self {
            OpenAnimation::Fade => "cc-open-fade",
            OpenAnimation::SlideUp => "cc-open-slide-up",
            OpenAnimation::Scale => "cc-open-scale",
        }
    }
}

/// When the launcher first becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityMode {
    Immediate,
    Delay,
    Scroll,
    ExitIntent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilitySettings {
    pub mode: Option<VisibilityMode>,
    pub delay_secs: Option<u64>,
    /// Scroll depth threshold, 0-100.
    pub scroll_percent: Option<u8>,
    /// Also open the panel when the exit-intent trigger fires.
    pub auto_open_on_exit: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    pub entry_animation: Option<EntryAnimation>,
    pub open_animation: Option<OpenAnimation>,
    pub visibility: Option<VisibilitySettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttentionSettings {
    pub animation: Option<AnimationKind>,
    /// How many periodic firings before the animation retires.
    pub cycles: Option<u32>,
    pub interval_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroSettings {
    pub ripple: Option<bool>,
    pub typing_indicator: Option<bool>,
    pub blink_cursor: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    pub chime: Option<bool>,
    pub ticks: Option<bool>,
    pub haptics: Option<bool>,
    /// 0.0 - 1.0.
    pub volume: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    pub respect_reduced_motion: Option<bool>,
    pub disable_on_mobile: Option<bool>,
    pub stop_after_interaction: Option<bool>,
    pub animate_once_per_session: Option<bool>,
    pub max_animation_secs: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    /// Rotating prompt texts, shown on the icon label or a bubble.
    pub rotating: Vec<String>,
    pub rotate_interval_secs: Option<u64>,
    pub use_contextual: Option<bool>,
    /// Page-matched prompt texts, preferred over `rotating` when enabled
    /// and at least one rule matches.
    pub contextual: Vec<ContextualPrompt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextualPrompt {
    pub path_contains: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_parses_to_all_absent() {
        let settings: WidgetSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, WidgetSettings::default());
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let settings: WidgetSettings =
            serde_json::from_str(r##"{"colors":{"primary":"#ff0000"},"future":{"x":1}}"##).unwrap();
        assert_eq!(
            settings.colors.unwrap().primary.as_deref(),
            Some("#ff0000")
        );
    }

    #[test]
    fn kebab_case_position() {
        let layout: LayoutSettings =
            serde_json::from_str(r#"{"position":"top-left"}"#).unwrap();
        assert_eq!(layout.position, Some(Position::TopLeft));
    }

    #[test]
    fn icon_type_field_is_renamed() {
        let icon: IconSettings =
            serde_json::from_str(r#"{"type":"image","image_url":"https://x/a.png"}"#).unwrap();
        assert_eq!(icon.kind, Some(IconKind::Image));
    }

    #[test]
    fn partial_sections_keep_other_fields_absent() {
        let settings: WidgetSettings =
            serde_json::from_str(r#"{"layout":{"width":400}}"#).unwrap();
        let layout = settings.layout.unwrap();
        assert_eq!(layout.width, Some(400));
        assert!(layout.position.is_none());
        assert!(settings.colors.is_none());
    }
}
