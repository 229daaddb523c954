//! Persistence of the variables document as pretty-printed JSON.
//!
//! Replacement semantics: delete any existing file, recreate parent
//! directories, then write the whole document. Re-running with the same
//! document and path produces byte-identical output. There is no temp-file
//! rename step, so a crash mid-sequence can leave the destination absent.

use crate::config::DEFAULT_OUTPUT_FILENAME;
use crate::error::{Result, WriteError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default destination: `figma-variables.json` in the current working directory
pub fn default_output_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| WriteError(e.to_string()))?;
    Ok(cwd.join(DEFAULT_OUTPUT_FILENAME))
}

/// Serialize `document` to `path` as UTF-8 JSON with 2-space indentation
///
/// When `path` is `None` the [`default_output_path`] is used. Any existing
/// file at the destination is deleted first (its absence is not an error),
/// then missing parent directories are created, then the document is
/// written, fully replacing prior content.
///
/// Returns the path that was written.
///
/// # Errors
///
/// [`WriteError`] wrapping any failure from deletion, directory creation,
/// serialization, or the write itself, with the source message preserved.
pub async fn write_to_file<T: Serialize>(document: &T, path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_output_path()?,
    };

    // Delete the existing file if there is one; NotFound is the expected
    // case and is swallowed.
    match tokio::fs::remove_file(&path).await {
        Ok(()) => debug!(path = %path.display(), "removed existing file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(WriteError(e.to_string()).into()),
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| WriteError(e.to_string()))?;
    }

    let json = serde_json::to_string_pretty(document).map_err(|e| WriteError(e.to_string()))?;

    tokio::fs::write(&path, json)
        .await
        .map_err(|e| WriteError(e.to_string()))?;

    Ok(path)
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use serial_test::serial;
    use tempfile::TempDir;

    #[tokio::test]
    async fn written_file_round_trips_to_the_same_value() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("variables.json");
        let document = json!({
            "meta": {
                "variableCollections": { "c1": { "name": "Colors", "remote": false } },
                "variables": { "v1": { "name": "primary", "resolvedType": "COLOR" } }
            }
        });

        let written = write_to_file(&document, Some(&path)).await.unwrap();
        assert_eq!(written, path, "should return the path it wrote");

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, document, "read-back content should deep-equal the input");
    }

    #[tokio::test]
    async fn output_is_pretty_printed_with_two_space_indent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("variables.json");

        write_to_file(&json!({ "meta": { "variables": {} } }), Some(&path))
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(
            content.contains("\n  \"meta\""),
            "top-level keys should be indented two spaces:\n{content}"
        );
    }

    #[tokio::test]
    async fn second_write_fully_replaces_the_first() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("variables.json");

        write_to_file(&json!({ "first": true, "padding": "x".repeat(1024) }), Some(&path))
            .await
            .unwrap();
        write_to_file(&json!({ "second": true }), Some(&path))
            .await
            .unwrap();

        let parsed: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!({ "second": true }),
            "no content of the first write should remain"
        );
    }

    #[tokio::test]
    async fn missing_parent_directories_are_created() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("variables.json");
        assert!(!path.parent().unwrap().exists());

        write_to_file(&json!({}), Some(&path)).await.unwrap();

        assert!(path.parent().unwrap().is_dir());
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn mapping_order_survives_a_parse_then_write_round_trip() {
        use crate::types::VariablesDocument;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("variables.json");

        // Collection ids deliberately out of lexicographic order.
        let payload = r#"{
            "meta": {
                "variableCollections": {
                    "VariableCollectionId:z": { "name": "Last" },
                    "VariableCollectionId:a": { "name": "First" }
                },
                "variables": {}
            }
        }"#;
        let document: VariablesDocument = serde_json::from_str(payload).unwrap();

        write_to_file(&document, Some(&path)).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let z = content.find("VariableCollectionId:z").unwrap();
        let a = content.find("VariableCollectionId:a").unwrap();
        assert!(
            z < a,
            "original mapping order should be preserved on disk:\n{content}"
        );
    }

    #[tokio::test]
    async fn repeated_writes_are_byte_identical() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("variables.json");
        let document = json!({ "meta": { "variables": { "v1": { "name": "x" } } } });

        write_to_file(&document, Some(&path)).await.unwrap();
        let first = std::fs::read(&path).unwrap();

        write_to_file(&document, Some(&path)).await.unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    #[serial]
    async fn default_path_is_the_fixed_filename_in_the_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        let original_cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp_dir.path()).unwrap();

        let written = write_to_file(&json!({}), None).await.unwrap();

        std::env::set_current_dir(original_cwd).unwrap();

        assert_eq!(
            written.file_name().and_then(|n| n.to_str()),
            Some(DEFAULT_OUTPUT_FILENAME)
        );
        assert!(written.is_file());
    }
}
