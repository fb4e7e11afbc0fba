//! JSON parser for collection exports

use crate::diagnostics::{LintError, LintResult};
use serde_json::Value;
use std::path::Path;

/// Parse a collection export into an untyped document
pub fn parse_collection(path: &Path, content: &str) -> LintResult<Value> {
    serde_json::from_str(content).map_err(|source| LintError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}
