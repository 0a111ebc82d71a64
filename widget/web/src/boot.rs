//! Entry point called by the embedding page.

use std::cell::RefCell;
use std::rc::Rc;

use coralchat_api::ApiClient;
use coralchat_controller::WidgetController;
use coralchat_core::WidgetConfig;
use coralchat_settings::WidgetSettings;
use tracing::{info, warn};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::context;
use crate::dom_web::WebDom;
use crate::events;
use crate::schedule::WebScheduler;
use crate::storage::SessionStorageStore;

pub(crate) type WebController = WidgetController<WebDom, SessionStorageStore, WebScheduler>;

/// Mount the widget. Called once per page by the embed snippet:
///
/// ```js
/// import init_wasm, { init } from "./coralchat_web.js";
/// await init_wasm();
/// init("https://api.example.com", "my-tenant-id");
/// ```
///
/// The widget is interactive immediately with built-in defaults and the
/// prior tab session restored; the tenant settings document is fetched in
/// the background and applied when it lands.
#[wasm_bindgen]
pub fn init(api_url: &str, tenant_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = tracing_wasm::try_set_as_global_default();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = WidgetConfig::new(api_url, tenant_id);
    let ctx = context::probe(&window);
    let dom = WebDom::mount(window.clone(), document.clone())?;
    let store = SessionStorageStore::new(&window);
    let (scheduler, dispatch) = WebScheduler::new();
    let api = Rc::new(ApiClient::new(&config));

    let controller = Rc::new(RefCell::new(WidgetController::new(
        config, dom, store, scheduler, ctx,
    )));
    {
        let c = controller.clone();
        dispatch.set(move |key| c.borrow_mut().on_task(key));
    }

    controller.borrow_mut().init();
    events::bind(&controller, api.clone(), &window, &document)?;
    info!(tenant_id, "widget mounted");

    let c = controller.clone();
    spawn_local(async move {
        let settings = match api.fetch_settings().await {
            Ok(settings) => settings,
            Err(error) => {
                warn!(%error, "settings fetch failed, using defaults");
                WidgetSettings::default()
            }
        };
        c.borrow_mut().apply_settings(settings);
    });

    Ok(())
}
