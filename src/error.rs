//! Error types for meteo
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using MeteoError
pub type Result<T> = std::result::Result<T, MeteoError>;

/// Unified error type for meteo operations
#[derive(Debug, Error)]
pub enum MeteoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Malformed request string: {0}")]
    RequestFormat(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),
}
