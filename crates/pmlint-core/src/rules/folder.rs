//! Folder description validation (PM-FD-001)
//!
//! Every immediate child of a collection must either be a request or carry a
//! description. Nested folders are not descended into.

use crate::{
    config::LintConfig,
    diagnostics::{Diagnostic, DiagnosticLevel, MalformedInput},
    rules::Validator,
    schemas::collection::{CollectionNode, ItemView, ITEMS_KEY},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

pub const RULE_ID: &str = "PM-FD-001";

/// One folder-description violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub message: String,
}

/// Offending items of `node` with their index in the `item` array
fn violations<'a>(
    node: CollectionNode<'a>,
) -> Result<Vec<(usize, ItemView<'a>)>, MalformedInput> {
    let items = node.items().ok_or_else(|| MalformedInput {
        at: node.json_path(),
    })?;
    Ok(items
        .enumerate()
        .filter(|(_, item)| item.is_folder() && !item.has_description())
        .collect())
}

fn message_for(item: &ItemView<'_>) -> String {
    format!("Folder \"{}\" requires description.", item.display_name())
}

/// Check the immediate children of a collection document.
///
/// Strips at most one `collection` envelope. Returns `Ok(None)` when every
/// child is a request or has a description, and the findings in item order
/// otherwise.
pub fn evaluate(document: &Value) -> Result<Option<Vec<Finding>>, MalformedInput> {
    let node = CollectionNode::new(document).unwrap_envelope();
    let findings: Vec<Finding> = violations(node)?
        .iter()
        .map(|(_, item)| Finding {
            message: message_for(item),
        })
        .collect();

    if findings.is_empty() {
        Ok(None)
    } else {
        Ok(Some(findings))
    }
}

pub struct FolderDescriptionValidator;

impl Validator for FolderDescriptionValidator {
    fn validate(
        &self,
        path: &Path,
        document: &Value,
        config: &LintConfig,
    ) -> Result<Vec<Diagnostic>, MalformedInput> {
        if !config.is_rule_enabled(RULE_ID) {
            return Ok(Vec::new());
        }

        let node = CollectionNode::new(document).unwrap_envelope();
        let level: DiagnosticLevel = config.rules.folder_description_level.into();

        Ok(violations(node)?
            .into_iter()
            .map(|(index, item)| {
                let mut location = node.location();
                location.push(ITEMS_KEY.to_string());
                location.push(index.to_string());

                Diagnostic::new(level, path.to_path_buf(), RULE_ID, message_for(&item))
                    .at(location)
                    .with_name(item.label())
                    .with_suggestion(
                        "Add a `description` to the folder explaining what its requests cover"
                            .to_string(),
                    )
            })
            .collect())
    }
}
