//! Error types for camctl
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CamError
pub type Result<T> = std::result::Result<T, CamError>;

/// Unified error type for camctl operations
#[derive(Debug, Error)]
pub enum CamError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Connection error: {0}")]
    Connection(String),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Framing error: {0}")]
    Framing(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    // -------------------------------------------------------------------------
    // Local Artifact Errors
    // -------------------------------------------------------------------------
    #[error("Artifact error: {0}")]
    Artifact(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
