//! Glide error types

use thiserror::Error;

/// Errors raised by the configuration layer around Glide widgets
///
/// Widget commands themselves never fail: absent elements turn into
/// no-ops and out-of-range targets clamp.
#[derive(Error, Debug)]
pub enum GlideError {
    /// Options could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Options could not be written out
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
}

/// Result type for Glide configuration operations
pub type Result<T> = std::result::Result<T, GlideError>;
