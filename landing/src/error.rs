//! Error type for page startup.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while configuring or wiring the page in the browser.
///
/// None of these are fatal: `main` logs them and still mounts the page.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("failed to parse landing config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid landing config: {0}")]
    InvalidConfig(String),

    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        LandingError::Dom(message)
    }
}

pub type Result<T> = std::result::Result<T, LandingError>;
