//! Validation rules

pub mod folder;

use crate::{
    config::LintConfig,
    diagnostics::{Diagnostic, MalformedInput},
};
use serde_json::Value;
use std::path::Path;

/// Rule catalog: (rule id, rule name)
pub const RULES: &[(&str, &str)] = &[(folder::RULE_ID, "Folder requires description")];

/// Trait for collection validators
pub trait Validator: Send + Sync {
    /// Check a decoded collection document.
    ///
    /// Returns `Err` when the document does not have the shape the rule
    /// needs; the caller decides how to report it.
    fn validate(
        &self,
        path: &Path,
        document: &Value,
        config: &LintConfig,
    ) -> Result<Vec<Diagnostic>, MalformedInput>;
}

/// All validators run against a collection, in reporting order
pub fn collection_validators() -> Vec<Box<dyn Validator>> {
    vec![Box::new(folder::FolderDescriptionValidator)]
}
