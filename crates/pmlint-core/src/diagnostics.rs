//! Diagnostic types and error reporting

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub type LintResult<T> = Result<T, LintError>;

/// A diagnostic message from the linter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    pub file: PathBuf,
    pub rule: String,
    /// JSON path segments of the offending node, e.g. `["item", "3"]`
    pub location: Vec<String>,
    /// Display form of the offending item's name, when the name is truthy
    pub name: Option<String>,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, file: PathBuf, rule: &str, message: String) -> Self {
        Self {
            level,
            message,
            file,
            rule: rule.to_string(),
            location: Vec::new(),
            name: None,
            suggestion: None,
        }
    }

    pub fn error(file: PathBuf, rule: &str, message: String) -> Self {
        Self::new(DiagnosticLevel::Error, file, rule, message)
    }

    pub fn warning(file: PathBuf, rule: &str, message: String) -> Self {
        Self::new(DiagnosticLevel::Warning, file, rule, message)
    }

    pub fn at(mut self, location: Vec<String>) -> Self {
        self.location = location;
        self
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Dotted form of the location, e.g. `collection.item.2`
    pub fn location_path(&self) -> String {
        self.location.join(".")
    }
}

/// A collection node that does not expose an `item` array where one is required.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed collection: expected an `item` array at {at}")]
pub struct MalformedInput {
    /// JSON path of the node that was inspected (`$` or `$.collection`)
    pub at: String,
}

/// Linter errors
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a regular file: {path}")]
    FileNotRegular { path: PathBuf },

    #[error("File too large: {path} ({size} bytes, limit {limit} bytes)")]
    FileTooBig { path: PathBuf, size: u64, limit: u64 },

    #[error("Failed to parse JSON in {path}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read config: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
