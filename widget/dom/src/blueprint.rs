//! Static description of the widget subtree.
//!
//! The web adapter builds elements from this table once at mount; the
//! headless adapter seeds its visibility map from the same table. Parents
//! always precede their children.

use crate::node::NodeId;

/// One node in the widget subtree.
#[derive(Debug, Clone, Copy)]
pub struct NodeSpec {
    pub node: NodeId,
    pub tag: &'static str,
    pub class: &'static str,
    pub parent: Option<NodeId>,
    /// Initial text content.
    pub text: Option<&'static str>,
    pub aria_label: Option<&'static str>,
    /// Extra attributes set at creation.
    pub attrs: &'static [(&'static str, &'static str)],
    /// Hidden until logic shows it.
    pub hidden: bool,
}

const fn spec(node: NodeId, tag: &'static str, class: &'static str, parent: Option<NodeId>) -> NodeSpec {
    NodeSpec {
        node,
        tag,
        class,
        parent,
        text: None,
        aria_label: None,
        attrs: &[],
        hidden: false,
    }
}

/// The full widget subtree in document order.
pub const TREE: &[NodeSpec] = &[
    spec(NodeId::Root, "div", "cc-widget", None),
    // Launcher cluster. The launcher itself stays hidden until the
    // configured visibility trigger fires.
    NodeSpec {
        aria_label: Some("Open chat"),
        hidden: true,
        attrs: &[("type", "button")],
        ..spec(NodeId::Launcher, "button", "cc-launcher", Some(NodeId::Root))
    },
    NodeSpec {
        text: Some("\u{1F4AC}"),
        ..spec(NodeId::LauncherIcon, "span", "cc-launcher-icon", Some(NodeId::Launcher))
    },
    NodeSpec {
        hidden: true,
        ..spec(NodeId::LauncherLabel, "span", "cc-launcher-label", Some(NodeId::Launcher))
    },
    NodeSpec {
        hidden: true,
        text: Some("1"),
        ..spec(NodeId::UnreadBadge, "span", "cc-unread-badge", Some(NodeId::Launcher))
    },
    NodeSpec {
        hidden: true,
        ..spec(NodeId::PromptBubble, "div", "cc-prompt-bubble", Some(NodeId::Root))
    },
    // Panel.
    NodeSpec {
        hidden: true,
        ..spec(NodeId::Panel, "div", "cc-panel", Some(NodeId::Root))
    },
    spec(NodeId::Header, "div", "cc-header", Some(NodeId::Panel)),
    NodeSpec {
        hidden: true,
        attrs: &[("alt", "")],
        ..spec(NodeId::HeaderAvatar, "img", "cc-header-avatar", Some(NodeId::Header))
    },
    NodeSpec {
        text: Some("Chat with us"),
        ..spec(NodeId::HeaderTitle, "div", "cc-header-title", Some(NodeId::Header))
    },
    NodeSpec {
        text: Some("We usually reply in a few minutes"),
        ..spec(NodeId::HeaderSubtitle, "div", "cc-header-subtitle", Some(NodeId::Header))
    },
    NodeSpec {
        text: Some("\u{21BA}"),
        aria_label: Some("Start a new chat"),
        attrs: &[("type", "button")],
        ..spec(NodeId::NewChatButton, "button", "cc-header-btn", Some(NodeId::Header))
    },
    NodeSpec {
        text: Some("\u{2013}"),
        aria_label: Some("Minimize chat"),
        attrs: &[("type", "button")],
        ..spec(NodeId::MinimizeButton, "button", "cc-header-btn", Some(NodeId::Header))
    },
    NodeSpec {
        text: Some("\u{00D7}"),
        aria_label: Some("Close chat"),
        attrs: &[("type", "button")],
        ..spec(NodeId::CloseButton, "button", "cc-header-btn", Some(NodeId::Header))
    },
    NodeSpec {
        aria_label: Some("Conversation"),
        attrs: &[("role", "log"), ("aria-live", "polite")],
        ..spec(NodeId::MessageList, "div", "cc-messages", Some(NodeId::Panel))
    },
    NodeSpec {
        hidden: true,
        text: Some("\u{2022}\u{2022}\u{2022}"),
        ..spec(NodeId::TypingIndicator, "div", "cc-typing", Some(NodeId::Panel))
    },
    NodeSpec {
        hidden: true,
        text: Some("\u{2026}"),
        ..spec(NodeId::LoadingIndicator, "div", "cc-loading", Some(NodeId::Panel))
    },
    // Contact capture form, revealed when the server asks for it.
    NodeSpec {
        hidden: true,
        ..spec(NodeId::ContactForm, "div", "cc-contact-form", Some(NodeId::Panel))
    },
    NodeSpec {
        aria_label: Some("Your name"),
        attrs: &[("type", "text"), ("placeholder", "Name")],
        ..spec(NodeId::ContactNameInput, "input", "cc-contact-input", Some(NodeId::ContactForm))
    },
    NodeSpec {
        aria_label: Some("Your email"),
        attrs: &[("type", "email"), ("placeholder", "Email")],
        ..spec(NodeId::ContactEmailInput, "input", "cc-contact-input", Some(NodeId::ContactForm))
    },
    NodeSpec {
        aria_label: Some("Your phone number"),
        attrs: &[("type", "tel"), ("placeholder", "Phone")],
        ..spec(NodeId::ContactPhoneInput, "input", "cc-contact-input", Some(NodeId::ContactForm))
    },
    NodeSpec {
        text: Some("Send"),
        attrs: &[("type", "button")],
        ..spec(NodeId::ContactSubmitButton, "button", "cc-contact-submit", Some(NodeId::ContactForm))
    },
    NodeSpec {
        hidden: true,
        text: Some("Please share a name, email, or phone number."),
        ..spec(NodeId::ContactHint, "div", "cc-contact-hint", Some(NodeId::ContactForm))
    },
    // Input row.
    spec(NodeId::InputRow, "div", "cc-input-row", Some(NodeId::Panel)),
    NodeSpec {
        aria_label: Some("Type a message"),
        attrs: &[("type", "text"), ("placeholder", "Type a message\u{2026}")],
        ..spec(NodeId::TextInput, "input", "cc-input", Some(NodeId::InputRow))
    },
    NodeSpec {
        text: Some("Send"),
        aria_label: Some("Send message"),
        attrs: &[("type", "button")],
        ..spec(NodeId::SendButton, "button", "cc-send", Some(NodeId::InputRow))
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_precede_children() {
        let mut seen = Vec::new();
        for spec in TREE {
            if let Some(parent) = spec.parent {
                assert!(seen.contains(&parent), "{:?} before its parent", spec.node);
            }
            seen.push(spec.node);
        }
    }

    #[test]
    fn dom_ids_are_unique() {
        let mut ids: Vec<_> = TREE.iter().map(|s| s.node.dom_id()).collect();
        ids.sort();
        let len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn single_root() {
        assert_eq!(TREE.iter().filter(|s| s.parent.is_none()).count(), 1);
    }
}
