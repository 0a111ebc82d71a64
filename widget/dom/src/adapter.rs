use coralchat_core::Role;

use crate::node::NodeId;

/// Sound effects the widget can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Played once per tab session when the panel first opens.
    Chime,
    /// Short tick on assistant replies.
    Tick,
}

/// Rendering operations the widget logic needs from a page.
///
/// Implementations must treat unknown state gracefully: showing a visible
/// node or focusing an unfocusable one is a no-op, never an error.
pub trait Dom {
    /// Set a CSS custom property on the widget root.
    fn set_var(&mut self, name: &'static str, value: &str);
    fn set_text(&mut self, node: NodeId, text: &str);
    fn set_attr(&mut self, node: NodeId, name: &'static str, value: &str);
    fn add_class(&mut self, node: NodeId, class: &'static str);
    fn remove_class(&mut self, node: NodeId, class: &'static str);
    fn show(&mut self, node: NodeId);
    fn hide(&mut self, node: NodeId);
    fn set_enabled(&mut self, node: NodeId, enabled: bool);

    /// Append one message bubble to the message list.
    fn append_message(&mut self, role: Role, text: &str);
    /// Remove every message bubble.
    fn clear_messages(&mut self);
    fn scroll_messages_to_bottom(&mut self);

    fn focus(&mut self, node: NodeId);
    fn play_sound(&mut self, sound: Sound, volume: f32);
    fn vibrate(&mut self, millis: u32);
}
