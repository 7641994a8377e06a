//! Error types for meteo
//!
//! Provides a unified error type for all operations.
//!
//! Semantic rejections (unknown city, unrecognized measurement type) are
//! NOT errors: they travel as a [`Status`](crate::protocol::Status) inside
//! a normally-completed response. Only transport and input failures end up
//! here.

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
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid request input: {0}")]
    Input(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
