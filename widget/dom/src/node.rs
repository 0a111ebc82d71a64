/// Every addressable element in the widget subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// Container for the whole widget; CSS custom properties live here.
    Root,
    Launcher,
    LauncherIcon,
    LauncherLabel,
    UnreadBadge,
    PromptBubble,
    Panel,
    Header,
    HeaderAvatar,
    HeaderTitle,
    HeaderSubtitle,
    NewChatButton,
    MinimizeButton,
    CloseButton,
    MessageList,
    TypingIndicator,
    InputRow,
    TextInput,
    SendButton,
    LoadingIndicator,
    ContactForm,
    ContactNameInput,
    ContactEmailInput,
    ContactPhoneInput,
    ContactSubmitButton,
    ContactHint,
}

impl NodeId {
    /// Stable element id used by the web adapter for creation and lookup.
    pub fn dom_id(self) -> &'static str {
        match self {
            NodeId::Root => "cc-root",
            NodeId::Launcher => "cc-launcher",
            NodeId::LauncherIcon => "cc-launcher-icon",
            NodeId::LauncherLabel => "cc-launcher-label",
            NodeId::UnreadBadge => "cc-unread-badge",
            NodeId::PromptBubble => "cc-prompt-bubble",
            NodeId::Panel => "cc-panel",
            NodeId::Header => "cc-header",
            NodeId::HeaderAvatar => "cc-header-avatar",
            NodeId::HeaderTitle => "cc-header-title",
            NodeId::HeaderSubtitle => "cc-header-subtitle",
            NodeId::NewChatButton => "cc-new-chat",
            NodeId::MinimizeButton => "cc-minimize",
            NodeId::CloseButton => "cc-close",
            NodeId::MessageList => "cc-messages",
            NodeId::TypingIndicator => "cc-typing",
            NodeId::InputRow => "cc-input-row",
            NodeId::TextInput => "cc-input",
            NodeId::SendButton => "cc-send",
            NodeId::LoadingIndicator => "cc-loading",
            NodeId::ContactForm => "cc-contact-form",
            NodeId::ContactNameInput => "cc-contact-name",
            NodeId::ContactEmailInput => "cc-contact-email",
            NodeId::ContactPhoneInput => "cc-contact-phone",
            NodeId::ContactSubmitButton => "cc-contact-submit",
            NodeId::ContactHint => "cc-contact-hint",
        }
    }
}
