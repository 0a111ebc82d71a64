use crate::message::ChatMessage;

/// Per-tab widget state, persisted piecewise under `cc_{tenant}_{suffix}`
/// storage keys by [`crate::store::SessionStore`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Conversation id minted by the remote API; `None` until the first
    /// successful exchange.
    pub session_id: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub is_open: bool,
}

/// One-time behavioral flags. Each gates a behavior that fires at most once
/// per tab session; flags survive "start new chat".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionFlag {
    /// The user focused the input or sent a message.
    Interacted,
    ChimePlayed,
    EntryPlayed,
    AttentionPlayed,
    ExitIntentTriggered,
    /// The canned auto-open message was already injected.
    AutoOpenMessage,
}

impl SessionFlag {
    /// Storage key suffix for this flag.
    pub fn suffix(self) -> &'static str {
        match self {
            SessionFlag::Interacted => "interacted",
            SessionFlag::ChimePlayed => "chime_played",
            SessionFlag::EntryPlayed => "entry_played",
            SessionFlag::AttentionPlayed => "attention_played",
            SessionFlag::ExitIntentTriggered => "exit_intent_triggered",
            SessionFlag::AutoOpenMessage => "auto_open_message",
        }
    }
}
