pub mod config;
pub mod error;
pub mod message;
pub mod session;
pub mod store;

pub use config::WidgetConfig;
pub use error::WidgetError;
pub use message::{ChatMessage, Role};
pub use session::{Session, SessionFlag};
pub use store::{KeyValueStore, MemoryStore, SessionStore};
