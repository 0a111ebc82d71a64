//! The send/receive pipeline and contact capture.
//!
//! Sending is split into two synchronous phases around the one awaited
//! network call: [`WidgetController::begin_send`] validates, echoes the
//! user message, and locks the input; the host awaits the API; then
//! [`WidgetController::complete_send`] renders the outcome. The split
//! keeps the controller borrow-free across the await, and makes the whole
//! pipeline drivable from tests without a network.

use coralchat_api::{ChatReply, ChatRequest, CONTACT_SENTINEL};
use coralchat_core::{KeyValueStore, Role, WidgetError};
use coralchat_dom::{Dom, NodeId, Sound};
use coralchat_settings::defaults::DEFAULT_ERROR_MESSAGE;
use tracing::{debug, info, warn};

use crate::controller::WidgetController;
use crate::scheduler::Scheduler;

/// Contact details captured by the form. Blank strings normalize to
/// `None` so "at least one field" checks and wire nulls agree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactInfo {
    pub(crate) fn normalized(self) -> Self {
        let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            name: clean(self.name),
            email: clean(self.email),
            phone: clean(self.phone),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

impl<D: Dom, S: KeyValueStore, T: Scheduler> WidgetController<D, S, T> {
    /// Start a send. Returns the request to put on the wire, or `None`
    /// when there is nothing to send (empty input, a request already in
    /// flight, or a completed conversation).
    ///
    /// A non-empty message is echoed locally before any network I/O.
    pub fn begin_send(&mut self, text: &str, contact: Option<ContactInfo>) -> Option<ChatRequest> {
        let text = text.trim();
        let contact = contact.unwrap_or_default().normalized();
        if text.is_empty() && contact.is_empty() {
            return None;
        }
        if self.in_flight {
            // Single-flight: the UI disables send affordances, and
            // programmatic callers get the same refusal.
            debug!("send ignored, request already in flight");
            return None;
        }
        if self.conversation_complete {
            debug!("send ignored, conversation is complete");
            return None;
        }

        self.mark_interacted();
        if !text.is_empty() {
            self.push_message(Role::User, text);
        }
        self.in_flight = true;
        self.set_inputs_enabled(false);
        self.dom.show(NodeId::LoadingIndicator);

        Some(ChatRequest {
            tenant_id: self.config.tenant_id.clone(),
            session_id: self.session.session_id.clone(),
            message: if text.is_empty() {
                CONTACT_SENTINEL.to_string()
            } else {
                text.to_string()
            },
            user_name: contact.name,
            user_email: contact.email,
            user_phone: contact.phone,
        })
    }

    /// Finish a send with the network outcome. Failures become one canned
    /// assistant message; the optimistic user echo is never rolled back.
    pub fn complete_send(&mut self, result: Result<ChatReply, WidgetError>) {
        self.in_flight = false;
        self.dom.hide(NodeId::LoadingIndicator);

        match result {
            Ok(reply) => {
                if let Some(id) = &reply.session_id {
                    self.session.session_id = Some(id.clone());
                    self.store.save_session_id(id);
                }
                self.push_message(Role::Assistant, &reply.response);

                let sound = self.settings.sound.clone().unwrap_or_default();
                if sound.ticks == Some(true) {
                    let volume = self.volume();
                    self.dom.play_sound(Sound::Tick, volume);
                }
                if sound.haptics == Some(true) {
                    self.dom.vibrate(30);
                }
                if reply.requires_contact_info {
                    self.dom.show(NodeId::ContactForm);
                    self.dom.hide(NodeId::InputRow);
                }
                if reply.conversation_complete {
                    info!("conversation marked complete by server");
                    self.conversation_complete = true;
                }
            }
            Err(error) => {
                warn!(%error, "chat request failed");
                self.push_message(Role::Assistant, DEFAULT_ERROR_MESSAGE);
            }
        }

        if self.conversation_complete {
            self.set_inputs_enabled(false);
        } else {
            self.set_inputs_enabled(true);
            self.dom.focus(NodeId::TextInput);
        }
    }

    /// Contact-form submission. Requires at least one non-blank field,
    /// otherwise blocks with the validation hint; on success the form
    /// hides and the normal send pipeline takes over.
    pub fn submit_contact(&mut self, contact: ContactInfo) -> Option<ChatRequest> {
        let contact = contact.normalized();
        if contact.is_empty() {
            self.dom.show(NodeId::ContactHint);
            return None;
        }
        self.dom.hide(NodeId::ContactHint);
        self.dom.hide(NodeId::ContactForm);
        self.dom.show(NodeId::InputRow);
        self.begin_send("", Some(contact))
    }
}
