//! Analysis of a persisted variables document.
//!
//! Loads the JSON file the persister produced, checks the minimal expected
//! shape, and derives aggregate statistics. The stats are ephemeral: they
//! are rendered to the console and never written back to disk.

use crate::error::{Error, ReportError, Result};
use crate::types::{Meta, ResolvedType, VariablesDocument};
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

/// Aggregate statistics over a variables document
#[derive(Clone, Debug, PartialEq)]
pub struct VariablesStats {
    /// Total number of variable collections (local and remote)
    pub collection_count: usize,
    /// Total number of variables
    pub variable_count: usize,
    /// Collections owned by the queried file, with their variable counts
    pub local_collections: Vec<LocalCollection>,
    /// Frequency of each resolved type, sorted descending by count
    pub type_breakdown: Vec<TypeCount>,
}

/// A local collection entry in the report
#[derive(Clone, Debug, PartialEq)]
pub struct LocalCollection {
    /// Collection name, "Unnamed" when absent
    pub name: String,
    /// Number of variable ids the collection references
    pub variable_count: usize,
}

/// One row of the resolved-type frequency table
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCount {
    /// The resolved type tag
    pub resolved_type: ResolvedType,
    /// How many variables carry it
    pub count: usize,
}

impl VariablesStats {
    /// Compute statistics from a document's `meta` object
    pub fn from_meta(meta: &Meta) -> Self {
        let local_collections = meta
            .variable_collections
            .values()
            .filter(|collection| !collection.remote)
            .map(|collection| LocalCollection {
                name: collection
                    .name
                    .as_deref()
                    .filter(|name| !name.is_empty())
                    .unwrap_or("Unnamed")
                    .to_string(),
                variable_count: collection.variable_ids.len(),
            })
            .collect();

        // Count in first-seen order, then stable-sort by count so equal
        // counts keep that order.
        let mut type_breakdown: Vec<TypeCount> = Vec::new();
        for variable in meta.variables.values() {
            let resolved_type = variable.resolved_type.unwrap_or(ResolvedType::Unknown);
            match type_breakdown
                .iter_mut()
                .find(|entry| entry.resolved_type == resolved_type)
            {
                Some(entry) => entry.count += 1,
                None => type_breakdown.push(TypeCount {
                    resolved_type,
                    count: 1,
                }),
            }
        }
        type_breakdown.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            collection_count: meta.variable_collections.len(),
            variable_count: meta.variables.len(),
            local_collections,
            type_breakdown,
        }
    }
}

/// Load a persisted document and compute its statistics
///
/// # Errors
///
/// - [`ReportError::NotFound`] when no file exists at `path`
/// - [`ReportError::Parse`] when the content is not valid JSON
/// - [`ReportError::MissingMeta`] when the document lacks a `meta` object
pub async fn analyze(path: &Path) -> Result<VariablesStats> {
    debug!(path = %path.display(), "reading persisted variables document");

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ReportError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let document: VariablesDocument =
        serde_json::from_str(&content).map_err(|e| ReportError::Parse(e.to_string()))?;

    let meta = document.meta.ok_or(ReportError::MissingMeta)?;
    Ok(VariablesStats::from_meta(&meta))
}

/// Render the statistics as the console report
#[must_use]
pub fn render(stats: &VariablesStats) -> String {
    const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

    let mut out = String::new();
    out.push_str("\n📊 Figma Variables Statistics\n\n");
    out.push_str(RULE);
    out.push('\n');
    let _ = writeln!(out, "📦 Number of Collections: {}", stats.collection_count);
    let _ = writeln!(out, "🔧 Number of Variables:   {}", stats.variable_count);
    out.push_str(RULE);
    out.push_str("\n\n");

    if stats.collection_count > 0 {
        let _ = writeln!(
            out,
            "📋 Local Collections ({}):",
            stats.local_collections.len()
        );
        if stats.local_collections.is_empty() {
            out.push_str("   No local collections found.\n");
        } else {
            for (index, collection) in stats.local_collections.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "   {}. {} ({} variables)",
                    index + 1,
                    collection.name,
                    collection.variable_count
                );
            }
        }
        out.push('\n');
    }

    if stats.variable_count > 0 {
        out.push_str("🔍 Variable Types Breakdown:\n");
        for entry in &stats.type_breakdown {
            let _ = writeln!(out, "   • {}: {}", entry.resolved_type, entry.count);
        }
        out.push('\n');
    }

    out
}
