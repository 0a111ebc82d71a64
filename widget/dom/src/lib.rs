//! The rendering seam of the CoralChat widget.
//!
//! Widget logic never touches a live DOM directly. It addresses elements by
//! [`NodeId`], describes visual changes as [`RenderEffect`] values, and
//! performs them through the [`Dom`] trait. The browser build implements
//! `Dom` over `web-sys`; [`HeadlessDom`] records calls for the test suite
//! and for hosts without a document.

pub mod adapter;
pub mod blueprint;
pub mod effect;
pub mod headless;
pub mod node;
pub mod style;

pub use adapter::{Dom, Sound};
pub use blueprint::{NodeSpec, TREE};
pub use effect::{apply, RenderEffect};
pub use headless::HeadlessDom;
pub use node::NodeId;
pub use style::STYLESHEET;
