//! JSON output format support.
//!
//! Provides a simple, machine-readable JSON report for pmlint diagnostics.
//! The same structure is written by `--output`.

use pmlint_core::diagnostics::{Diagnostic, DiagnosticLevel};
use serde::Serialize;
use std::path::Path;

/// Root structure for JSON output.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// Version of pmlint that produced this output.
    pub version: String,
    /// Number of collection files checked.
    pub files_checked: usize,
    /// List of diagnostics found.
    pub diagnostics: Vec<JsonDiagnostic>,
    /// Summary counts by level.
    pub summary: JsonSummary,
}

/// A single diagnostic in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    /// Severity level: error, warning, or info.
    pub level: String,
    /// Rule identifier (e.g., PM-FD-001).
    pub rule: String,
    /// File path (forward slashes for cross-platform consistency).
    pub file: String,
    /// JSON path segments of the offending item.
    pub path: Vec<String>,
    /// Name of the offending item, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Diagnostic message.
    pub message: String,
    /// Optional suggestion for fixing the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Summary counts by diagnostic level.
#[derive(Debug, Default, Serialize)]
pub struct JsonSummary {
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

fn level_to_string(level: DiagnosticLevel) -> &'static str {
    match level {
        DiagnosticLevel::Error => "error",
        DiagnosticLevel::Warning => "warning",
        DiagnosticLevel::Info => "info",
    }
}

fn path_to_string(path: &Path, base_path: &Path) -> String {
    path.strip_prefix(base_path)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Convert diagnostics to JSON output format.
pub fn diagnostics_to_json(
    diagnostics: &[Diagnostic],
    files_checked: usize,
    base_path: &Path,
) -> JsonOutput {
    let mut summary = JsonSummary::default();

    let json_diagnostics: Vec<JsonDiagnostic> = diagnostics
        .iter()
        .map(|diag| {
            match diag.level {
                DiagnosticLevel::Error => summary.errors += 1,
                DiagnosticLevel::Warning => summary.warnings += 1,
                DiagnosticLevel::Info => summary.info += 1,
            }
            JsonDiagnostic {
                level: level_to_string(diag.level).to_string(),
                rule: diag.rule.clone(),
                file: path_to_string(&diag.file, base_path),
                path: diag.location.clone(),
                name: diag.name.clone(),
                message: diag.message.clone(),
                suggestion: diag.suggestion.clone(),
            }
        })
        .collect();

    JsonOutput {
        version: env!("CARGO_PKG_VERSION").to_string(),
        files_checked,
        diagnostics: json_diagnostics,
        summary,
    }
}
