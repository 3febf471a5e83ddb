//! Error types for readtime operations.
//!
//! Extraction and estimation never fail. Everything in [`ReadTimeError`]
//! comes from the edges: fetching markup, reading local files, and loading
//! configuration.
//!
//! # Example
//!
//! ```rust
//! use readtime_core::{ReadTimeError, Result};
//!
//! fn require_markup(html: &str) -> Result<&str> {
//!     if html.is_empty() {
//!         return Err(ReadTimeError::ConfigError("no markup supplied".to_string()));
//!     }
//!     Ok(html)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for reading-time operations.
#[derive(Error, Debug)]
pub enum ReadTimeError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other transport problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP request returned status {status}")]
    HttpStatus { status: u16 },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read and write errors.
    #[error("I/O error: {0}")]
    WriteError(#[from] std::io::Error),

    /// Invalid or unreadable reading configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for ReadTimeError.
pub type Result<T> = std::result::Result<T, ReadTimeError>;
