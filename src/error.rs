//! Error types for the browser binding

use folio_core::FolioError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors raised while wiring components to the page
#[derive(Error, Debug)]
pub enum DomError {
    /// Exception thrown by a browser API
    #[error("JavaScript error: {0}")]
    Js(String),

    /// Not running inside a browser window
    #[error("No global window")]
    NoWindow,

    /// Window without a document
    #[error("No document on window")]
    NoDocument,

    /// Element exists but is not the expected kind
    #[error("Element {0} is not an HTML element")]
    NotHtml(String),

    /// Error from the page logic
    #[error(transparent)]
    Core(#[from] FolioError),
}

/// Result type alias using DomError
pub type DomResult<T> = Result<T, DomError>;

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(describe(&value))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for a thrown JavaScript value.
pub fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        text
    } else if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        format!("{:?}", value)
    }
}
