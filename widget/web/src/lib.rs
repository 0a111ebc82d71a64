//! Browser glue for the CoralChat widget.
//!
//! Compiles to a `cdylib` for `wasm32`; the embedding page loads the
//! bundle and calls `init(api_url, tenant_id)` once. Everything here is
//! adapter code: the widget behavior lives in `coralchat-controller` and
//! its sibling crates, which this crate wires to the live document,
//! `sessionStorage`, and `setTimeout`.
//!
//! On non-wasm targets the crate compiles to an empty library so the
//! workspace builds and tests everywhere.

#[cfg(target_arch = "wasm32")]
mod boot;
#[cfg(target_arch = "wasm32")]
mod context;
#[cfg(target_arch = "wasm32")]
mod dom_web;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod schedule;
#[cfg(target_arch = "wasm32")]
mod storage;

#[cfg(target_arch = "wasm32")]
pub use boot::init;
