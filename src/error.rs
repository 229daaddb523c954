//! Error types for figma-variables
//!
//! Each pipeline stage has its own error enum (fetch, write, report), all
//! folded into one top-level [`Error`] so binaries surface a single
//! descriptive message and exit non-zero. No error is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for figma-variables operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for figma-variables
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The environment variable that caused the error (e.g., "FIGMA_ACCESS_TOKEN")
        key: Option<String>,
    },

    /// Remote API fetch failed
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Writing the variables document to disk failed
    #[error("write error: {0}")]
    Write(#[from] WriteError),

    /// Reading or analyzing a persisted document failed
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while fetching variables from the Figma API
///
/// A fetch is a single attempt: whichever variant occurs is terminal.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("Figma API error: {status} - {status_text}\nMessage: {body}")]
    Api {
        /// Numeric HTTP status code (e.g., 403)
        status: u16,
        /// Canonical reason phrase for the status (e.g., "Forbidden")
        status_text: String,
        /// The serialized response body as returned by the server
        body: String,
    },

    /// The request was sent but no response arrived
    #[error("no response from the Figma API: {0}")]
    NoResponse(String),

    /// The request could not be constructed or dispatched, or a successful
    /// response's body could not be decoded
    #[error("request failed: {0}")]
    Request(String),
}

/// Error raised while persisting a variables document
///
/// Wraps any failure from the pre-write deletion (other than "file does not
/// exist"), parent directory creation, or the write itself.
#[derive(Debug, Error)]
#[error("failed to write file: {0}")]
pub struct WriteError(pub String);

/// Errors raised while loading and analyzing a persisted document
#[derive(Debug, Error)]
pub enum ReportError {
    /// The persisted document does not exist at the given path
    #[error("file not found: {}", path.display())]
    NotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// The file exists but is not valid JSON
    #[error("invalid JSON format: {0}")]
    Parse(String),

    /// The document parsed but lacks the expected `meta` object
    #[error("invalid document structure: missing \"meta\" property")]
    MissingMeta,
}
