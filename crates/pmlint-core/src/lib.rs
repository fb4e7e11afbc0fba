//! # pmlint-core
//!
//! Core validation engine for Postman collections.
//!
//! Validates:
//! - Folder descriptions (every top-level folder documents what it holds)

pub mod config;
pub mod diagnostics;
pub mod file_utils;
pub mod parsers;
pub mod rules;
pub mod schemas;

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde_json::Value;

use schemas::collection::CollectionNode;

pub use config::LintConfig;
pub use diagnostics::{Diagnostic, DiagnosticLevel, LintError, LintResult, MalformedInput};
pub use rules::folder::{evaluate as evaluate_folder_descriptions, Finding};

/// Rule id used when a document does not have the shape a rule needs
pub const MALFORMED_RULE_ID: &str = "collection::malformed";

/// Run every enabled rule over a decoded collection document.
///
/// A rule that rejects the document shape is always reported as an error
/// diagnostic, whatever the rule configuration, and the remaining rules still
/// run.
pub fn validate_collection(path: &Path, document: &Value, config: &LintConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for validator in rules::collection_validators() {
        match validator.validate(path, document, config) {
            Ok(found) => diagnostics.extend(found),
            Err(e) => {
                tracing::debug!(file = %path.display(), error = %e, "rule rejected document");
                diagnostics.push(
                    Diagnostic::error(path.to_path_buf(), MALFORMED_RULE_ID, e.to_string())
                        .with_suggestion("Export the collection in Postman v2 format".to_string()),
                );
            }
        }
    }

    diagnostics.retain(|d| config.passes_threshold(d.level));
    diagnostics
}

/// Validate a single collection file
pub fn validate_file(path: &Path, config: &LintConfig) -> LintResult<Vec<Diagnostic>> {
    let content = file_utils::read_collection_file(path)?;
    let document = parsers::json::parse_collection(path, &content)?;

    let info = CollectionNode::new(&document).unwrap_envelope().info();
    tracing::debug!(
        file = %path.display(),
        collection = info.as_ref().and_then(|i| i.name.as_deref()).unwrap_or("<unnamed>"),
        "validating collection"
    );
    Ok(validate_collection(path, &document, config))
}

/// Validate many collection files in parallel.
///
/// Files that cannot be read or parsed yield one error diagnostic each.
/// Output is ordered by file, keeping each file's own diagnostic order.
pub fn validate_files(paths: &[PathBuf], config: &LintConfig) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = paths
        .par_iter()
        .flat_map(|file_path| match validate_file(file_path, config) {
            Ok(file_diagnostics) => file_diagnostics,
            Err(e) => {
                tracing::warn!(file = %file_path.display(), error = %e, "failed to validate file");
                vec![Diagnostic::error(
                    file_path.clone(),
                    "file::read",
                    format!("Failed to validate file: {}", e),
                )]
            }
        })
        .collect();

    diagnostics.sort_by(|a, b| a.file.cmp(&b.file));
    diagnostics
}
