//! Built-in defaults for optional settings fields.

/// Minimum prompt rotation interval.
pub const MIN_ROTATE_INTERVAL_SECS: u64 = 3;

/// Rotation interval when the document does not set one.
pub const DEFAULT_ROTATE_INTERVAL_SECS: u64 = 5;

/// Delay before a `delay`-mode launcher becomes visible.
pub const DEFAULT_VISIBILITY_DELAY_SECS: u64 = 3;

/// Scroll depth threshold for `scroll`-mode visibility, percent.
pub const DEFAULT_SCROLL_PERCENT: u8 = 50;

/// Delay before auto-open fires when enabled without a delay.
pub const DEFAULT_AUTO_OPEN_DELAY_SECS: u64 = 5;

/// Periodic attention firings when the document does not set a count.
pub const DEFAULT_ATTENTION_CYCLES: u32 = 3;

/// Seconds between attention firings.
pub const DEFAULT_ATTENTION_INTERVAL_SECS: u64 = 12;

/// Upper bound on one attention play-through when no rule sets one.
pub const DEFAULT_MAX_ANIMATION_SECS: f32 = 4.0;

/// Sound volume when the document does not set one.
pub const DEFAULT_VOLUME: f32 = 0.4;

/// Canned time-of-day greetings.
pub const DEFAULT_MORNING_GREETING: &str = "Good morning! How can we help?";
pub const DEFAULT_AFTERNOON_GREETING: &str = "Good afternoon! How can we help?";
pub const DEFAULT_EVENING_GREETING: &str = "Good evening! How can we help?";

/// Assistant-role message shown when a chat request fails.
pub const DEFAULT_ERROR_MESSAGE: &str =
    "Sorry, something went wrong. Please try again in a moment.";
