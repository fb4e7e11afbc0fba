//! pmlint CLI - lint Postman collections

mod json;
mod text;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use pmlint_core::{config::LintConfig, diagnostics::DiagnosticLevel, rules, validate_files};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pmlint")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Lint Postman collections",
    long_about = "Check exported Postman collections for documentation gaps.\n\nChecks: folder descriptions"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Collection files to validate
    paths: Vec<PathBuf>,

    /// Strict mode (treat warnings as errors)
    #[arg(short, long, global = true)]
    strict: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Also write the JSON report to this file
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate collection files
    Validate {
        /// Collection files to validate
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List available rules
    Rules,

    /// Initialize config file
    Init {
        /// Output path for config
        #[arg(default_value = ".pmlint.toml")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Some(Commands::Validate { paths }) => validate_command(paths, &cli),
        Some(Commands::Init { output }) => init_command(output),
        Some(Commands::Rules) => rules_command(),
        None if cli.paths.is_empty() => Err(anyhow::anyhow!(
            "no collection files given (try `pmlint --help`)"
        )),
        None => validate_command(&cli.paths, &cli),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the run should fail the build.
fn validate_command(paths: &[PathBuf], cli: &Cli) -> anyhow::Result<bool> {
    let config = LintConfig::load_or_default(cli.config.as_deref());
    tracing::debug!(files = paths.len(), ?config, "starting validation");

    let diagnostics = validate_files(paths, &config);
    let base_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let report = json::diagnostics_to_json(&diagnostics, paths.len(), &base_path);

    if let Some(output) = &cli.output {
        let content = serde_json::to_string_pretty(&report)?;
        std::fs::write(output, content)
            .with_context(|| format!("failed to write report to {}", output.display()))?;
        tracing::debug!(path = %output.display(), "wrote JSON report");
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for path in paths {
                println!("{} {}", "Validating:".cyan().bold(), path.display());
            }
            println!();
            if diagnostics.is_empty() {
                println!("{}", "✓ No issues found".green().bold());
            } else {
                print!("{}", text::render(&diagnostics, cli.verbose));
            }
        }
    }

    let errors = text::count(&diagnostics, DiagnosticLevel::Error);
    let warnings = text::count(&diagnostics, DiagnosticLevel::Warning);
    Ok(errors == 0 && !(cli.strict && warnings > 0))
}

fn rules_command() -> anyhow::Result<bool> {
    for (id, name) in rules::RULES {
        println!("{}  {}", id.bold(), name);
    }
    Ok(true)
}

fn init_command(output: &Path) -> anyhow::Result<bool> {
    let default_config = LintConfig::default();
    let toml_content = toml::to_string_pretty(&default_config)?;

    std::fs::write(output, toml_content)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "{} Created config file: {}",
        "✓".green().bold(),
        output.display()
    );

    Ok(true)
}
