use thiserror::Error;
use wrapflow_style::StyleParseError;

/// Top-level error for hosts that load configuration and drive layout passes.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Invalid style value: {0}")]
    Style(#[from] StyleParseError),

    #[error("Configuration JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown flow attribute: {0}")]
    UnknownAttribute(String),
}
