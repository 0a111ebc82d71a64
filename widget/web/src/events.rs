//! Event wiring between the live document and the controller.
//!
//! Listener closures hold an `Rc` of the shared controller and borrow it
//! only for the duration of one synchronous handler. Sends go through
//! `begin_send` on the event, an awaited network call off the borrow, and
//! `complete_send` when the future resolves.

use std::cell::RefCell;
use std::rc::Rc;

use coralchat_api::{ApiClient, ChatRequest};
use coralchat_controller::ContactInfo;
use coralchat_dom::NodeId;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlInputElement, KeyboardEvent, MouseEvent, Window};

use crate::boot::WebController;

type Shared = Rc<RefCell<WebController>>;

pub fn bind(
    controller: &Shared,
    api: Rc<ApiClient>,
    window: &Window,
    document: &Document,
) -> Result<(), JsValue> {
    {
        let c = controller.clone();
        on_click(document, NodeId::Launcher, move || {
            c.borrow_mut().launcher_clicked()
        })?;
    }
    {
        let c = controller.clone();
        on_click(document, NodeId::CloseButton, move || c.borrow_mut().close())?;
    }
    {
        let c = controller.clone();
        on_click(document, NodeId::MinimizeButton, move || {
            c.borrow_mut().minimize()
        })?;
    }
    {
        let c = controller.clone();
        on_click(document, NodeId::NewChatButton, move || {
            c.borrow_mut().start_new_chat()
        })?;
    }
    {
        let c = controller.clone();
        let a = api.clone();
        let d = document.clone();
        on_click(document, NodeId::SendButton, move || {
            send_from_input(&c, &a, &d)
        })?;
    }
    {
        let c = controller.clone();
        let a = api.clone();
        let d = document.clone();
        if let Some(input) = document.get_element_by_id(NodeId::TextInput.dom_id()) {
            let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    event.prevent_default();
                    send_from_input(&c, &a, &d);
                }
            });
            input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }
    {
        let c = controller.clone();
        if let Some(input) = document.get_element_by_id(NodeId::TextInput.dom_id()) {
            let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                c.borrow_mut().on_input_focus();
            });
            input.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }
    {
        let c = controller.clone();
        let a = api.clone();
        let d = document.clone();
        on_click(document, NodeId::ContactSubmitButton, move || {
            let contact = ContactInfo {
                name: input_value(&d, NodeId::ContactNameInput),
                email: input_value(&d, NodeId::ContactEmailInput),
                phone: input_value(&d, NodeId::ContactPhoneInput),
            };
            let request = c.borrow_mut().submit_contact(contact);
            dispatch(&c, &a, request);
        })?;
    }

    bind_scroll(controller, window, document)?;
    bind_exit_intent(controller, document)?;
    Ok(())
}

fn on_click(
    document: &Document,
    node: NodeId,
    mut handler: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let Some(target) = document.get_element_by_id(node.dom_id()) else {
        return Ok(());
    };
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler());
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn input_value(document: &Document, node: NodeId) -> Option<String> {
    let input = document
        .get_element_by_id(node.dom_id())?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    Some(input.value())
}

fn send_from_input(controller: &Shared, api: &Rc<ApiClient>, document: &Document) {
    let Some(input) = document
        .get_element_by_id(NodeId::TextInput.dom_id())
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let text = input.value();
    let request = controller.borrow_mut().begin_send(&text, None);
    if request.is_some() {
        input.set_value("");
    }
    dispatch(controller, api, request);
}

/// Put an accepted request on the wire and hand the outcome back to the
/// controller when it lands.
fn dispatch(controller: &Shared, api: &Rc<ApiClient>, request: Option<ChatRequest>) {
    let Some(request) = request else {
        return;
    };
    let controller = controller.clone();
    let api = api.clone();
    spawn_local(async move {
        let result = api.send_chat(&request).await;
        controller.borrow_mut().complete_send(result);
    });
}

/// Scroll-depth trigger. The listener detaches itself once the controller
/// reports the threshold consumed.
fn bind_scroll(controller: &Shared, window: &Window, document: &Document) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(Event)>>>> = Rc::new(RefCell::new(None));
    let c = controller.clone();
    let w = window.clone();
    let d = document.clone();
    let slot_in = slot.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let percent = scroll_percent(&w, &d);
        if c.borrow_mut().on_scroll(percent) {
            // Detach but keep the closure alive in its slot; the browser
            // may still be mid-invocation.
            if let Some(fired) = slot_in.borrow().as_ref() {
                let _ = w.remove_event_listener_with_callback(
                    "scroll",
                    fired.as_ref().unchecked_ref(),
                );
            }
        }
    });
    window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    *slot.borrow_mut() = Some(closure);
    Ok(())
}

fn scroll_percent(window: &Window, document: &Document) -> f64 {
    let scrolled = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let total = document
        .document_element()
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    let scrollable = (total - viewport).max(1.0);
    (scrolled / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Exit intent fires when the pointer leaves through the top edge of the
/// viewport.
fn bind_exit_intent(controller: &Shared, document: &Document) -> Result<(), JsValue> {
    let c = controller.clone();
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        if event.related_target().is_none() && event.client_y() <= 0 {
            c.borrow_mut().on_exit_intent();
        }
    });
    document.add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
