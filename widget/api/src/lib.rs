//! HTTP client for the two remote endpoints the widget talks to.
//!
//! `GET {base}/widget/settings/public?tenant_id={id}` fetches the tenant
//! settings document once per page load; `POST {base}/chat` exchanges one
//! message. reqwest serves both the native build and the browser build
//! (fetch backend on `wasm32`).

mod client;
mod wire;

pub use client::ApiClient;
pub use wire::{ChatReply, ChatRequest, CONTACT_SENTINEL};
