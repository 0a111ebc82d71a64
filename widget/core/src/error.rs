use thiserror::Error;

/// Top-level error type for the CoralChat widget.
///
/// Nothing here is fatal to the host page: callers surface chat failures as
/// a canned assistant message and swallow storage failures after logging.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("chat API returned HTTP {status}")]
    Api { status: u16 },

    #[error("network request failed: {0}")]
    Network(String),

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
