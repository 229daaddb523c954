//! Core types for the Figma local-variables payload
//!
//! The remote document is loosely typed: each record pins down the handful
//! of fields this crate reads and keeps everything else in a flattened
//! remainder, so upstream additions survive a fetch → persist round trip
//! without breaking deserialization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Full response payload of the `variables/local` endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VariablesDocument {
    /// The `meta` object holding the collection and variable mappings
    ///
    /// Optional at this layer: the fetcher passes the payload through
    /// unchanged and presence is only enforced by the reporter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Any other top-level fields (e.g., `status`, `error`), kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `meta` object of a variables document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Mapping from collection id to collection record, in payload order
    #[serde(default)]
    pub variable_collections: IndexMap<String, VariableCollection>,

    /// Mapping from variable id to variable record, in payload order
    #[serde(default)]
    pub variables: IndexMap<String, Variable>,

    /// Unrecognized `meta` fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named, ordered grouping of variable identifiers
///
/// A collection is either local (owned by the queried file) or remote
/// (imported from another file).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    /// Display name of the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the collection is imported from another file
    #[serde(default)]
    pub remote: bool,

    /// Ids of the variables belonging to this collection, in order
    #[serde(default)]
    pub variable_ids: Vec<String>,

    /// Unrecognized collection fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single design token
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Display name of the variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Resolved value type of the variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_type: Option<ResolvedType>,

    /// Unrecognized variable fields (modes, scopes, aliases, ...), kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Resolved value type of a variable
///
/// The closed set the Figma API documents today, plus a catch-all so new
/// upstream tags degrade to [`ResolvedType::Unknown`] instead of failing
/// deserialization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolvedType {
    /// Color token
    Color,
    /// Numeric token
    Float,
    /// String token
    String,
    /// Boolean token
    Boolean,
    /// Unset or unrecognized type tag
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ResolvedType::Color => "COLOR",
            ResolvedType::Float => "FLOAT",
            ResolvedType::String => "STRING",
            ResolvedType::Boolean => "BOOLEAN",
            ResolvedType::Unknown => "UNKNOWN",
        };
        f.write_str(tag)
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_round_trips_unknown_fields() {
        let payload = json!({
            "status": 200,
            "error": false,
            "meta": {
                "variableCollections": {
                    "VariableCollectionId:1:2": {
                        "name": "Colors",
                        "remote": false,
                        "variableIds": ["VariableID:1:3"],
                        "defaultModeId": "1:0"
                    }
                },
                "variables": {
                    "VariableID:1:3": {
                        "name": "primary/500",
                        "resolvedType": "COLOR",
                        "valuesByMode": { "1:0": { "r": 0.1, "g": 0.2, "b": 0.9, "a": 1.0 } }
                    }
                }
            }
        });

        let doc: VariablesDocument = serde_json::from_value(payload.clone()).unwrap();
        let back = serde_json::to_value(&doc).unwrap();

        assert_eq!(back, payload, "unrecognized fields should survive a round trip");
    }

    #[test]
    fn resolved_type_parses_documented_tags() {
        for (tag, expected) in [
            ("COLOR", ResolvedType::Color),
            ("FLOAT", ResolvedType::Float),
            ("STRING", ResolvedType::String),
            ("BOOLEAN", ResolvedType::Boolean),
        ] {
            let parsed: ResolvedType = serde_json::from_value(json!(tag)).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn unrecognized_resolved_type_degrades_to_unknown() {
        let parsed: ResolvedType = serde_json::from_value(json!("EXPRESSION")).unwrap();
        assert_eq!(parsed, ResolvedType::Unknown);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let variable: Variable = serde_json::from_value(json!({})).unwrap();
        assert_eq!(variable.name, None);
        assert_eq!(variable.resolved_type, None);

        let collection: VariableCollection = serde_json::from_value(json!({})).unwrap();
        assert!(!collection.remote);
        assert!(collection.variable_ids.is_empty());
    }

    #[test]
    fn meta_mappings_keep_payload_order() {
        // Ids deliberately out of lexicographic order.
        let payload = r#"{
            "meta": {
                "variableCollections": {
                    "VariableCollectionId:z": { "name": "Last" },
                    "VariableCollectionId:a": { "name": "First" }
                },
                "variables": {
                    "VariableID:9": { "resolvedType": "FLOAT" },
                    "VariableID:1": { "resolvedType": "COLOR" }
                }
            }
        }"#;

        let doc: VariablesDocument = serde_json::from_str(payload).unwrap();
        let meta = doc.meta.as_ref().unwrap();

        let collection_ids: Vec<&str> =
            meta.variable_collections.keys().map(String::as_str).collect();
        assert_eq!(
            collection_ids,
            vec!["VariableCollectionId:z", "VariableCollectionId:a"],
            "original mapping order should be preserved"
        );

        let variable_ids: Vec<&str> = meta.variables.keys().map(String::as_str).collect();
        assert_eq!(variable_ids, vec!["VariableID:9", "VariableID:1"]);
    }

    #[test]
    fn document_without_meta_parses() {
        let doc: VariablesDocument = serde_json::from_value(json!({ "status": 403 })).unwrap();
        assert!(doc.meta.is_none());
    }
}
