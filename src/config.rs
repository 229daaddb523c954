//! Configuration types for figma-variables

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable holding the Figma personal access token
pub const ENV_ACCESS_TOKEN: &str = "FIGMA_ACCESS_TOKEN";

/// Environment variable holding the Figma file key
pub const ENV_FILE_KEY: &str = "FIGMA_FILE_KEY";

/// Environment variable overriding the API base URL (used by tests)
pub const ENV_API_BASE: &str = "FIGMA_API_BASE";

/// Placeholder token value shipped in `.env.example`; treated as unset
const TOKEN_PLACEHOLDER: &str = "VOTRE_TOKEN_FIGMA";

/// Placeholder file key value shipped in `.env.example`; treated as unset
const FILE_KEY_PLACEHOLDER: &str = "VOTRE_FILE_KEY";

/// Default filename for the persisted variables document
pub const DEFAULT_OUTPUT_FILENAME: &str = "figma-variables.json";

/// Configuration for the Figma variables client
///
/// Credentials are sourced from the process environment via
/// [`Config::from_env`]; `.env` loading is the caller's concern (the CLI
/// binaries run `dotenvy::dotenv()` before reading the config).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Figma personal access token, sent as the `X-Figma-Token` header
    pub access_token: String,

    /// Key of the Figma file whose local variables are fetched
    pub file_key: String,

    /// Base URL of the Figma REST API (default: "https://api.figma.com/v1")
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    "https://api.figma.com/v1".to_string()
}

impl Config {
    /// Build a configuration from the process environment
    ///
    /// Reads `FIGMA_ACCESS_TOKEN` and `FIGMA_FILE_KEY`, refusing to proceed
    /// when either is missing, empty, or left at the placeholder value from
    /// `.env.example`. `FIGMA_API_BASE` optionally overrides the API base
    /// URL; when unset the production endpoint is used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending variable.
    pub fn from_env() -> Result<Self> {
        let access_token = require_env(ENV_ACCESS_TOKEN, TOKEN_PLACEHOLDER)?;
        let file_key = require_env(ENV_FILE_KEY, FILE_KEY_PLACEHOLDER)?;

        let api_base = match std::env::var(ENV_API_BASE) {
            Ok(base) if !base.trim().is_empty() => base.trim_end_matches('/').to_string(),
            _ => default_api_base(),
        };

        Ok(Self {
            access_token,
            file_key,
            api_base,
        })
    }
}

/// Read a required environment variable, rejecting placeholder values
fn require_env(key: &str, placeholder: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() && value != placeholder => Ok(value),
        _ => Err(Error::Config {
            message: format!(
                "{} is not set in the environment. Create a .env file and define your Figma credentials.",
                key
            ),
            key: Some(key.to_string()),
        }),
    }
}
