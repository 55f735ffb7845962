//! Settings discovery and effective settings resolution.
//!
//! cmslint reads `cmslint.toml|yaml|yml` from the document's directory or the
//! closest ancestor (stopping at a `.git` directory) and merges it with CLI
//! flags to produce an `Effective` configuration.
//! Defaults:
//! - `output`: `pretty`
//! - `quiet`: false (success records are reported)
//! - `check`: false (error records do not change the exit code)
//! - `rules.disable`: empty
//!
//! Overrides precedence: CLI > settings file > defaults. Disabled rule names
//! are the union of both sources.

use crate::error::{LintError, Result};
use crate::output::OutputMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILES: [&str; 3] = ["cmslint.toml", "cmslint.yaml", "cmslint.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Rule selection under `[rules]`.
pub struct RulesCfg {
    #[serde(default)]
    pub disable: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root settings loaded from `cmslint.toml|yaml`.
pub struct CmslintConfig {
    pub output: Option<String>,
    pub quiet: Option<bool>,
    pub check: Option<bool>,
    #[serde(default)]
    pub rules: Option<RulesCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by the lint run after applying precedence.
pub struct Effective {
    pub output: OutputMode,
    pub quiet: bool,
    pub check: bool,
    pub disabled: Vec<String>,
    /// Settings file that contributed, if any.
    pub config_path: Option<PathBuf>,
}

/// Walk upward from `start` looking for a settings file.
///
/// Stops at the first directory holding one, or at a `.git` directory.
pub fn detect_config_file(start: &Path) -> Option<PathBuf> {
    let start = fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
    let mut cur = start.as_path();
    loop {
        for name in CONFIG_FILES {
            let candidate = cur.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Load settings from an explicit file. The syntax follows the extension.
pub fn load_config(path: &Path) -> Result<CmslintConfig> {
    let text = fs::read_to_string(path).map_err(|e| LintError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
    let parsed = if is_toml {
        toml::from_str::<CmslintConfig>(&text).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<CmslintConfig>(&text).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| LintError::Config {
        path: path.to_path_buf(),
        message,
    })
}

/// Directory to start discovery from for a given document path.
fn document_dir(document: &Path) -> PathBuf {
    match document.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Resolve `Effective` by merging CLI flags, discovered settings, and defaults.
pub fn resolve_effective(
    document: &Path,
    cli_config: Option<&Path>,
    cli_output: Option<&str>,
    cli_quiet: Option<bool>,
    cli_check: Option<bool>,
    cli_disable: &[String],
) -> Result<Effective> {
    let config_path = match cli_config {
        Some(p) => Some(p.to_path_buf()),
        None => detect_config_file(&document_dir(document)),
    };
    let cfg = match config_path.as_deref() {
        Some(p) => {
            tracing::debug!(path = %p.display(), "using settings file");
            load_config(p)?
        }
        None => CmslintConfig::default(),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .map(|s| OutputMode::parse_lenient(&s))
        .unwrap_or_default();
    let quiet = cli_quiet.or(cfg.quiet).unwrap_or(false);
    let check = cli_check.or(cfg.check).unwrap_or(false);

    let mut disabled = cfg.rules.map(|r| r.disable).unwrap_or_default();
    for name in cli_disable {
        if !disabled.contains(name) {
            disabled.push(name.clone());
        }
    }

    Ok(Effective {
        output,
        quiet,
        check,
        disabled,
        config_path,
    })
}
