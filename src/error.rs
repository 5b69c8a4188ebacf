//! Error types for the IJKLM core.

use thiserror::Error;

/// The main error type for IJKLM operations.
#[derive(Debug, Error)]
pub enum IjklmError {
    /// A label does not have the `<prefix><digits>` shape with a 1-based ordinal
    #[error("bad label {0:?}: expected `<prefix><digits>` with ordinal >= 1")]
    BadLabel(String),

    /// I/O failure while persisting experiment data
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for IJKLM operations.
pub type Result<T> = std::result::Result<T, IjklmError>;
