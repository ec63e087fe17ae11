//! Error types shared by the panel and the CLI

use thiserror::Error;

/// Malformed settings data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// A control held something other than an integer
    #[error("invalid {key} value: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    /// `/get_settings` body was not the expected JSON object
    #[error("invalid settings JSON: {0}")]
    Json(String),
}

/// The request could not be performed at all (no response)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure of a panel request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("network error: {0}")]
    Transport(#[from] TransportError),
    #[error("HTTP {status} from {path}")]
    Status { status: u16, path: &'static str },
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
