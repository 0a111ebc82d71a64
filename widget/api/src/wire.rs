use serde::{Deserialize, Serialize};

/// Message body sent when a contact form is submitted without text.
pub const CONTACT_SENTINEL: &str = "contact info provided";

/// Body of `POST /chat`. Contact fields serialize as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub tenant_id: String,
    pub session_id: Option<String>,
    pub message: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_phone: Option<String>,
}

/// Response of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    /// Session id to adopt and persist for subsequent requests.
    pub session_id: Option<String>,
    /// Assistant message text.
    pub response: String,
    /// The server wants the contact-capture form shown.
    #[serde(default)]
    pub requires_contact_info: bool,
    /// The conversation is over; inputs stay disabled.
    #[serde(default)]
    pub conversation_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_null_contact_fields() {
        let request = ChatRequest {
            tenant_id: "acme".into(),
            session_id: None,
            message: "hello".into(),
            user_name: None,
            user_email: None,
            user_phone: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["tenant_id"], "acme");
        assert!(json["session_id"].is_null());
        assert!(json["user_email"].is_null());
    }

    #[test]
    fn reply_flags_default_to_false() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"session_id":"s1","response":"hi!"}"#).unwrap();
        assert_eq!(reply.session_id.as_deref(), Some("s1"));
        assert_eq!(reply.response, "hi!");
        assert!(!reply.requires_contact_info);
        assert!(!reply.conversation_complete);
    }

    #[test]
    fn reply_parses_full_payload() {
        let reply: ChatReply = serde_json::from_str(
            r#"{"session_id":"s2","response":"bye","requires_contact_info":true,"conversation_complete":true}"#,
        )
        .unwrap();
        assert!(reply.requires_contact_info);
        assert!(reply.conversation_complete);
    }
}
