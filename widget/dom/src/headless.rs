//! A recording [`Dom`] implementation.
//!
//! Backs the controller test suite and any host that embeds the widget
//! logic without a document. Visibility starts from the blueprint's
//! `hidden` flags so assertions match what a freshly mounted page shows.

use std::collections::{HashMap, HashSet};

use coralchat_core::Role;

use crate::adapter::{Dom, Sound};
use crate::blueprint::TREE;
use crate::node::NodeId;

#[derive(Debug, Default)]
pub struct HeadlessDom {
    vars: HashMap<&'static str, String>,
    texts: HashMap<NodeId, String>,
    attrs: HashMap<(NodeId, &'static str), String>,
    classes: HashMap<NodeId, HashSet<&'static str>>,
    hidden: HashSet<NodeId>,
    disabled: HashSet<NodeId>,
    messages: Vec<(Role, String)>,
    sounds: Vec<(Sound, f32)>,
    vibrations: Vec<u32>,
    focused: Option<NodeId>,
    scroll_to_bottom_calls: usize,
}

impl HeadlessDom {
    pub fn new() -> Self {
        let mut dom = Self::default();
        for spec in TREE {
            if spec.hidden {
                dom.hidden.insert(spec.node);
            }
            if let Some(text) = spec.text {
                dom.texts.insert(spec.node, text.to_string());
            }
        }
        dom
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.texts.get(&node).map(String::as_str)
    }

    pub fn attr(&self, node: NodeId, name: &'static str) -> Option<&str> {
        self.attrs.get(&(node, name)).map(String::as_str)
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes.get(&node).is_some_and(|set| set.contains(class))
    }

    pub fn is_visible(&self, node: NodeId) -> bool {
        !self.hidden.contains(&node)
    }

    pub fn is_enabled(&self, node: NodeId) -> bool {
        !self.disabled.contains(&node)
    }

    pub fn messages(&self) -> &[(Role, String)] {
        &self.messages
    }

    pub fn sounds(&self) -> &[(Sound, f32)] {
        &self.sounds
    }

    pub fn vibrations(&self) -> &[u32] {
        &self.vibrations
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn scroll_to_bottom_calls(&self) -> usize {
        self.scroll_to_bottom_calls
    }
}

impl Dom for HeadlessDom {
    fn set_var(&mut self, name: &'static str, value: &str) {
        self.vars.insert(name, value.to_string());
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.texts.insert(node, text.to_string());
    }

    fn set_attr(&mut self, node: NodeId, name: &'static str, value: &str) {
        self.attrs.insert((node, name), value.to_string());
    }

    fn add_class(&mut self, node: NodeId, class: &'static str) {
        self.classes.entry(node).or_default().insert(class);
    }

    fn remove_class(&mut self, node: NodeId, class: &'static str) {
        if let Some(set) = self.classes.get_mut(&node) {
            set.remove(class);
        }
    }

    fn show(&mut self, node: NodeId) {
        self.hidden.remove(&node);
    }

    fn hide(&mut self, node: NodeId) {
        self.hidden.insert(node);
    }

    fn set_enabled(&mut self, node: NodeId, enabled: bool) {
        if enabled {
            self.disabled.remove(&node);
        } else {
            self.disabled.insert(node);
        }
    }

    fn append_message(&mut self, role: Role, text: &str) {
        self.messages.push((role, text.to_string()));
    }

    fn clear_messages(&mut self) {
        self.messages.clear();
    }

    fn scroll_messages_to_bottom(&mut self) {
        self.scroll_to_bottom_calls += 1;
    }

    fn focus(&mut self, node: NodeId) {
        self.focused = Some(node);
    }

    fn play_sound(&mut self, sound: Sound, volume: f32) {
        self.sounds.push((sound, volume));
    }

    fn vibrate(&mut self, millis: u32) {
        self.vibrations.push(millis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_blueprint_visibility() {
        let dom = HeadlessDom::new();
        assert!(!dom.is_visible(NodeId::Launcher));
        assert!(!dom.is_visible(NodeId::Panel));
        assert!(dom.is_visible(NodeId::Root));
        assert!(dom.is_enabled(NodeId::TextInput));
    }
}
