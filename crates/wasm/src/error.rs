//! Error handling for WASM bindings.
//!
//! Converts vita's error types into JavaScript-friendly errors.

use vita_core::CoreError;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid sections or configuration passed from JavaScript
    Config,
    /// The container or the window is not available
    Dom,
}

/// A JavaScript-friendly error type.
#[derive(Debug)]
pub struct TocError {
    code: ErrorCode,
    message: String,
}

impl TocError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }
}

impl From<CoreError> for TocError {
    fn from(err: CoreError) -> Self {
        Self::config(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for TocError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::config(err.to_string())
    }
}

impl From<TocError> for JsValue {
    fn from(err: TocError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        let code_str = match err.code {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
        };

        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(code_str)).ok();

        js_error.into()
    }
}
