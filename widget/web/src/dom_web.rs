//! Live-document adapter.
//!
//! Mounting builds the widget subtree described by the blueprint and
//! injects the stylesheet; afterwards every operation resolves through a
//! node map captured at mount, so the widget never queries the host page
//! by selector. Missing nodes and rejected DOM calls are no-ops.

use std::collections::HashMap;

use coralchat_core::Role;
use coralchat_dom::{blueprint, Dom, NodeId, Sound, STYLESHEET};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AudioContext, Document, Element, HtmlElement, OscillatorType, Window};

const HIDDEN_CLASS: &str = "cc-hidden";

pub struct WebDom {
    window: Window,
    document: Document,
    nodes: HashMap<NodeId, Element>,
    audio: Option<AudioContext>,
}

impl WebDom {
    /// Build the widget subtree under `document.body` and inject the
    /// stylesheet. Fails only when the document has no body.
    pub fn mount(window: Window, document: Document) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let style = document.create_element("style")?;
        style.set_text_content(Some(STYLESHEET));
        body.append_child(&style)?;

        let mut nodes: HashMap<NodeId, Element> = HashMap::new();
        for spec in blueprint::TREE {
            let element = document.create_element(spec.tag)?;
            element.set_id(spec.node.dom_id());
            element.set_class_name(spec.class);
            if let Some(text) = spec.text {
                element.set_text_content(Some(text));
            }
            if let Some(label) = spec.aria_label {
                element.set_attribute("aria-label", label)?;
            }
            for (name, value) in spec.attrs {
                element.set_attribute(name, value)?;
            }
            if spec.hidden {
                element.class_list().add_1(HIDDEN_CLASS)?;
            }
            match spec.parent {
                Some(parent) => {
                    if let Some(parent) = nodes.get(&parent) {
                        parent.append_child(&element)?;
                    }
                }
                None => {
                    body.append_child(&element)?;
                }
            }
            nodes.insert(spec.node, element);
        }

        Ok(Self {
            window,
            document,
            nodes,
            audio: None,
        })
    }

    fn node(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(&node)
    }

    fn html(&self, node: NodeId) -> Option<&HtmlElement> {
        self.node(node).and_then(|e| e.dyn_ref::<HtmlElement>())
    }

    fn play_tone(&mut self, frequency: f32, seconds: f64, volume: f32) -> Result<(), JsValue> {
        if self.audio.is_none() {
            self.audio = Some(AudioContext::new()?);
        }
        let ctx = match &self.audio {
            Some(ctx) => ctx,
            None => return Ok(()),
        };
        let oscillator = ctx.create_oscillator()?;
        oscillator.set_type(OscillatorType::Sine);
        oscillator.frequency().set_value(frequency);
        let gain = ctx.create_gain()?;
        gain.gain().set_value(volume);
        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        let now = ctx.current_time();
        oscillator.start()?;
        oscillator.stop_with_when(now + seconds)?;
        Ok(())
    }
}

impl Dom for WebDom {
    fn set_var(&mut self, name: &'static str, value: &str) {
        if let Some(root) = self.html(NodeId::Root) {
            if let Err(error) = root.style().set_property(name, value) {
                warn!(name, ?error, "setting css variable failed");
            }
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.node(node) {
            element.set_text_content(Some(text));
        }
    }

    fn set_attr(&mut self, node: NodeId, name: &'static str, value: &str) {
        // The image launcher icon renders as a child <img>, which the
        // stylesheet sizes to fill the button.
        if node == NodeId::LauncherIcon && name == "data-image" {
            if let Some(element) = self.node(node) {
                element.set_text_content(None);
                if let Ok(img) = self.document.create_element("img") {
                    let _ = img.set_attribute("src", value);
                    let _ = img.set_attribute("alt", "");
                    let _ = element.append_child(&img);
                }
            }
            return;
        }
        if let Some(element) = self.node(node) {
            let _ = element.set_attribute(name, value);
        }
    }

    fn add_class(&mut self, node: NodeId, class: &'static str) {
        if let Some(element) = self.node(node) {
            let _ = element.class_list().add_1(class);
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &'static str) {
        if let Some(element) = self.node(node) {
            let _ = element.class_list().remove_1(class);
        }
    }

    fn show(&mut self, node: NodeId) {
        self.remove_class(node, HIDDEN_CLASS);
    }

    fn hide(&mut self, node: NodeId) {
        self.add_class(node, HIDDEN_CLASS);
    }

    fn set_enabled(&mut self, node: NodeId, enabled: bool) {
        if let Some(element) = self.node(node) {
            if enabled {
                let _ = element.remove_attribute("disabled");
            } else {
                let _ = element.set_attribute("disabled", "");
            }
        }
    }

    fn append_message(&mut self, role: Role, text: &str) {
        let Some(list) = self.node(NodeId::MessageList) else {
            return;
        };
        let class = match role {
            Role::User => "cc-msg cc-msg-user",
            Role::Assistant => "cc-msg cc-msg-assistant",
        };
        if let Ok(bubble) = self.document.create_element("div") {
            bubble.set_class_name(class);
            bubble.set_text_content(Some(text));
            let _ = list.append_child(&bubble);
        }
    }

    fn clear_messages(&mut self) {
        if let Some(list) = self.node(NodeId::MessageList) {
            list.set_text_content(None);
        }
    }

    fn scroll_messages_to_bottom(&mut self) {
        if let Some(list) = self.node(NodeId::MessageList) {
            list.set_scroll_top(list.scroll_height());
        }
    }

    fn focus(&mut self, node: NodeId) {
        if let Some(element) = self.html(node) {
            let _ = element.focus();
        }
    }

    fn play_sound(&mut self, sound: Sound, volume: f32) {
        let (frequency, seconds) = match sound {
            Sound::Chime => (880.0, 0.25),
            Sound::Tick => (440.0, 0.06),
        };
        if let Err(error) = self.play_tone(frequency, seconds, volume) {
            warn!(?error, "sound playback failed");
        }
    }

    fn vibrate(&mut self, millis: u32) {
        let _ = self.window.navigator().vibrate_with_duration(millis);
    }
}
