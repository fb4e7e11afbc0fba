//! Linter configuration

use crate::diagnostics::{DiagnosticLevel, LintError, LintResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the linter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Severity level threshold; less severe diagnostics are dropped
    #[serde(default = "default_severity")]
    pub severity: SeverityLevel,

    /// Rules to enable/disable
    #[serde(default)]
    pub rules: RuleConfig,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            severity: default_severity(),
            rules: RuleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Error,
    Warning,
    Info,
}

impl From<SeverityLevel> for DiagnosticLevel {
    fn from(level: SeverityLevel) -> Self {
        match level {
            SeverityLevel::Error => DiagnosticLevel::Error,
            SeverityLevel::Warning => DiagnosticLevel::Warning,
            SeverityLevel::Info => DiagnosticLevel::Info,
        }
    }
}

fn default_severity() -> SeverityLevel {
    SeverityLevel::Warning
}

/// Helper function for serde default
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Enable folder validation (PM-FD-*)
    #[serde(default = "default_true")]
    pub folders: bool,

    /// Level reported for folders missing a description
    #[serde(default = "default_severity")]
    pub folder_description_level: SeverityLevel,

    /// Explicitly disabled rules by ID (e.g., ["PM-FD-001"])
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            folders: true,
            folder_description_level: default_severity(),
            disabled_rules: Vec::new(),
        }
    }
}

impl LintConfig {
    /// Load config from file
    pub fn load(path: &Path) -> LintResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LintError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| LintError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config or use default
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default config");
                Self::default()
            }
        }
    }

    /// Check if a specific rule is enabled based on config
    ///
    /// A rule is enabled if it is not in `disabled_rules` and its category
    /// is enabled.
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        if self.rules.disabled_rules.iter().any(|r| r == rule_id) {
            return false;
        }
        self.is_category_enabled(rule_id)
    }

    fn is_category_enabled(&self, rule_id: &str) -> bool {
        match rule_id {
            s if s.starts_with("PM-FD-") => self.rules.folders,
            _ => true,
        }
    }

    /// Whether a diagnostic at `level` passes the severity threshold
    pub fn passes_threshold(&self, level: DiagnosticLevel) -> bool {
        let threshold: DiagnosticLevel = self.severity.into();
        level <= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_enables_all_rules() {
        let config = LintConfig::default();
        assert!(config.is_rule_enabled("PM-FD-001"));
        assert!(config.is_rule_enabled("collection::malformed"));
    }

    #[test]
    fn test_category_disabled() {
        let mut config = LintConfig::default();
        config.rules.folders = false;
        assert!(!config.is_rule_enabled("PM-FD-001"));
    }

    #[test]
    fn test_disabled_rules_list() {
        let mut config = LintConfig::default();
        config.rules.disabled_rules = vec!["PM-FD-001".to_string()];
        assert!(!config.is_rule_enabled("PM-FD-001"));
    }

    #[test]
    fn test_threshold() {
        let mut config = LintConfig::default();
        assert!(config.passes_threshold(DiagnosticLevel::Error));
        assert!(config.passes_threshold(DiagnosticLevel::Warning));
        assert!(!config.passes_threshold(DiagnosticLevel::Info));

        config.severity = SeverityLevel::Error;
        assert!(!config.passes_threshold(DiagnosticLevel::Warning));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: LintConfig = toml::from_str(
            r#"
[rules]
disabled_rules = ["PM-FD-001"]
"#,
        )
        .unwrap();
        assert_eq!(config.severity, SeverityLevel::Warning);
        assert!(config.rules.folders);
        assert_eq!(config.rules.folder_description_level, SeverityLevel::Warning);
        assert_eq!(config.rules.disabled_rules, vec!["PM-FD-001"]);
    }

    #[test]
    fn test_toml_roundtrip_of_default() {
        let text = toml::to_string_pretty(&LintConfig::default()).unwrap();
        let parsed: LintConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, LintConfig::default());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = LintConfig::load(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, LintError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_invalid_toml_errors() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(".pmlint.toml");
        std::fs::write(&path, "severity = [").unwrap();
        let err = LintConfig::load(&path).unwrap_err();
        assert!(matches!(err, LintError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");
        assert_eq!(
            LintConfig::load_or_default(Some(&path)),
            LintConfig::default()
        );
        assert_eq!(LintConfig::load_or_default(None), LintConfig::default());
    }

    #[test]
    fn test_load_valid_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(".pmlint.toml");
        std::fs::write(
            &path,
            "severity = \"info\"\n[rules]\nfolder_description_level = \"error\"\n",
        )
        .unwrap();
        let config = LintConfig::load(&path).unwrap();
        assert_eq!(config.severity, SeverityLevel::Info);
        assert_eq!(config.rules.folder_description_level, SeverityLevel::Error);
    }
}
