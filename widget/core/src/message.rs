use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Who authored a message bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One immutable conversation turn. Ordering is insertion order; messages
/// are never edited or deleted short of a full session clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub role: Role,
    /// Unix milliseconds at append time.
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn now(role: Role, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_snake_case() {
        let msg = ChatMessage {
            text: "hi".into(),
            role: Role::Assistant,
            timestamp: 1,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"assistant\""));
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
