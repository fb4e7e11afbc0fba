//! Human-readable report, grouped by message.

use colored::*;
use pmlint_core::diagnostics::{Diagnostic, DiagnosticLevel};
use std::collections::HashMap;
use std::fmt::Write;

/// Diagnostics sharing one message, in first-seen order
struct Group<'a> {
    message: &'a str,
    level: DiagnosticLevel,
    entries: Vec<&'a Diagnostic>,
}

fn group_by_message(diagnostics: &[Diagnostic]) -> Vec<Group<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Group<'_>> = Vec::new();

    for diag in diagnostics {
        match index.get(diag.message.as_str()) {
            Some(&i) => groups[i].entries.push(diag),
            None => {
                index.insert(&diag.message, groups.len());
                groups.push(Group {
                    message: &diag.message,
                    level: diag.level,
                    entries: vec![diag],
                });
            }
        }
    }

    groups
}

/// `Name: <name>` when the item has a name, otherwise `Path: <json path>`
fn locate(diag: &Diagnostic) -> String {
    match &diag.name {
        Some(name) if !name.is_empty() => format!("Name: {}", name),
        _ if diag.location.is_empty() => "Path: $".to_string(),
        _ => format!("Path: {}", diag.location_path()),
    }
}

/// Render the grouped report followed by a summary line.
pub fn render(diagnostics: &[Diagnostic], verbose: bool) -> String {
    let mut out = String::new();

    for group in group_by_message(diagnostics) {
        let level_str = match group.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };
        let _ = writeln!(
            out,
            "{} {} occurrences of: {}",
            level_str,
            group.entries.len(),
            group.message
        );

        for diag in &group.entries {
            let _ = writeln!(
                out,
                "  {} {}",
                diag.file.display().to_string().dimmed(),
                locate(diag)
            );
        }

        if verbose {
            let first = group.entries[0];
            let _ = writeln!(out, "  {} {}", "rule:".dimmed(), first.rule.dimmed());
            if let Some(suggestion) = &first.suggestion {
                let _ = writeln!(out, "  {} {}", "help:".cyan(), suggestion);
            }
        }
        out.push('\n');
    }

    let errors = count(diagnostics, DiagnosticLevel::Error);
    let warnings = count(diagnostics, DiagnosticLevel::Warning);
    let infos = count(diagnostics, DiagnosticLevel::Info);

    let _ = writeln!(out, "{}", "─".repeat(60).dimmed());
    let _ = writeln!(
        out,
        "Found {} {}, {} {}",
        errors,
        if errors == 1 { "error" } else { "errors" },
        warnings,
        if warnings == 1 { "warning" } else { "warnings" }
    );
    if infos > 0 {
        let _ = writeln!(out, "  {} info messages", infos);
    }

    out
}

pub fn count(diagnostics: &[Diagnostic], level: DiagnosticLevel) -> usize {
    diagnostics.iter().filter(|d| d.level == level).count()
}
