// src/error.rs
use thiserror::Error;
use vita_core::CoreError;

/// Errors surfaced by the `vita` binary and the simulation helpers.
#[derive(Error, Debug)]
pub enum VitaError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid layout: {0}")]
    Layout(String),
}
