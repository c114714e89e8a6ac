// src/error.rs
//! Error types for page composition.

use thiserror::Error;
use vita_outline::OutlineError;

/// The main error enum for the integration layer.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Outline error: {0}")]
    Outline(#[from] OutlineError),
}
