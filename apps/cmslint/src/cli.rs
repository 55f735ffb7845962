//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cmslint",
    version,
    about = "Validate a CMS config.yml against built-in rules",
    long_about = "cmslint — check a CMS configuration document (YAML or JSON) for missing backend settings, malformed collections, incomplete field definitions and redundant settings.\n\nConfiguration precedence: CLI > cmslint.toml > defaults.",
    after_help = "Examples:\n  cmslint static/admin/config.yml\n  cmslint config.yml --output json-pretty\n  cmslint config.yml -q --check\n  cmslint config.yml --disable noUnnecessaryDomainSettings"
)]
/// Top-level CLI options.
pub struct Cli {
    /// Document to validate
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "MODE",
        help = "Output mode: pretty|json|json-pretty|json-lines (default: pretty)"
    )]
    pub output: Option<String>,
    #[arg(long, value_name = "PATH", help = "Settings file (default: discovered cmslint.toml)")]
    pub config: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Only report warnings and errors")]
    pub quiet: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if any error is reported")]
    pub check: bool,
    #[arg(long, value_name = "RULE", help = "Skip a built-in rule by name (repeatable)")]
    pub disable: Vec<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr")]
    pub debug: bool,
}
