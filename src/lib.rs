//! # figma-variables
//!
//! Fetch the local variables (design tokens) of a Figma file through the
//! REST API, persist them as a pretty-printed JSON document, and report
//! aggregate statistics over a previously persisted document.
//!
//! The crate is three small, sequentially composed units:
//! - a fetcher issuing one authenticated GET to the `variables/local`
//!   endpoint ([`FigmaClient::fetch_variables`]),
//! - a persister with delete-then-recreate replacement semantics
//!   ([`persister::write_to_file`]),
//! - a reporter tallying a persisted document ([`report::analyze`]).
//!
//! Every operation is a single attempt: no retries, no pagination, no
//! concurrency. The `figma-fetch` and `figma-stats` binaries are thin
//! wrappers over the library.
//!
//! ## Quick Start
//!
//! ```no_run
//! use figma_variables::{Config, FigmaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads FIGMA_ACCESS_TOKEN and FIGMA_FILE_KEY from the environment
//!     let config = Config::from_env()?;
//!     let client = FigmaClient::new(config)?;
//!
//!     let path = client.fetch_and_save(None).await?;
//!     println!("wrote {}", path.display());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration and environment sourcing
pub mod config;
/// Error types
pub mod error;
/// Figma API client and fetch-and-save orchestration
pub mod fetcher;
/// JSON persistence with replacement semantics
pub mod persister;
/// Statistics over a persisted document
pub mod report;
/// Payload types for the variables document
pub mod types;

// Re-export commonly used types
pub use config::{Config, DEFAULT_OUTPUT_FILENAME};
pub use error::{Error, FetchError, ReportError, Result, WriteError};
pub use fetcher::FigmaClient;
pub use report::{LocalCollection, TypeCount, VariablesStats};
pub use types::{Meta, ResolvedType, Variable, VariableCollection, VariablesDocument};
