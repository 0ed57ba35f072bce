// Typed errors with thiserror. Surface meaningful messages to JS.
// The playback state machine itself has no error path; these only occur at the boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Engine error types.
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid media event: {0}")]
    InvalidEvent(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Gallery page {index} out of range (page count {page_count})")]
    PageOutOfRange { index: usize, page_count: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PlaybackError {
    fn from(err: serde_json::Error) -> Self {
        PlaybackError::Serialization(err.to_string())
    }
}

impl From<PlaybackError> for JsValue {
    fn from(err: PlaybackError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
