//! Figma API client — fetches local variables and chains into persistence.

use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::persister;
use crate::types::VariablesDocument;
use std::path::{Path, PathBuf};
use tracing::info;

/// Client for the Figma local-variables endpoint
///
/// One instance per file key. Every fetch is a single attempt: no retry,
/// no timeout, no pagination.
pub struct FigmaClient {
    http_client: reqwest::Client,
    config: Config,
}

impl FigmaClient {
    /// Create a new client for the configured file
    ///
    /// # Errors
    /// Returns [`FetchError::Request`] if the HTTP client cannot be created
    pub fn new(config: Config) -> Result<Self> {
        // No timeout: a fetch is one attempt that blocks until the server
        // answers or the connection drops.
        let http_client = reqwest::Client::builder()
            .user_agent("figma-variables")
            .build()
            .map_err(|e| FetchError::Request(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// URL of the local-variables resource for the configured file
    fn variables_url(&self) -> String {
        format!(
            "{}/files/{}/variables/local",
            self.config.api_base, self.config.file_key
        )
    }

    /// Fetch the local variables of the configured file
    ///
    /// Issues one GET request with the access token in the `X-Figma-Token`
    /// header and returns the parsed response body unchanged.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Api`] when the server answers with a non-success
    ///   status; the message carries the numeric status, the reason phrase,
    ///   and the response body.
    /// - [`FetchError::NoResponse`] when the request was sent but no
    ///   response arrived.
    /// - [`FetchError::Request`] for any failure before a request could be
    ///   dispatched, or when a successful response's body cannot be decoded.
    pub async fn fetch_variables(&self) -> Result<VariablesDocument> {
        let url = self.variables_url();
        info!(url = %url, "fetching local variables");

        let response = self
            .http_client
            .get(&url)
            .header("X-Figma-Token", &self.config.access_token)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    FetchError::NoResponse(format!(
                        "check your connection to '{}': {}",
                        url, e
                    ))
                } else if e.is_builder() || e.is_request() {
                    FetchError::Request(e.to_string())
                } else {
                    FetchError::NoResponse(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::NoResponse(format!("failed to read response body: {}", e)))?;

        let document: VariablesDocument = serde_json::from_str(&body)
            .map_err(|e| FetchError::Request(format!("failed to parse response body: {}", e)))?;
        Ok(document)
    }

    /// Fetch the variables and persist them as pretty-printed JSON
    ///
    /// Chains [`fetch_variables`](Self::fetch_variables) into
    /// [`persister::write_to_file`]; the first failing step's error is
    /// propagated unchanged. When `output_path` is `None` the default
    /// filename in the current working directory is used.
    ///
    /// Returns the path of the written file.
    pub async fn fetch_and_save(&self, output_path: Option<&Path>) -> Result<PathBuf> {
        info!(file_key = %self.config.file_key, "retrieving variables");
        let document = self.fetch_variables().await?;

        info!("variables retrieved, writing file");
        let path = persister::write_to_file(&document, output_path).await?;

        info!(path = %path.display(), "file created");
        Ok(path)
    }
}
