//! Output rendering for lint reports.
//!
//! Supports `pretty` (default), `json`, `json-pretty` and `json-lines`. The
//! JSON forms serialize the record list only; the pretty form ends with a
//! summary line.

use crate::error::Result;
use crate::models::{Kind, LintResult, ResultRecord};
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Pretty,
    Json,
    JsonPretty,
    JsonLines,
}

impl OutputMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pretty" => Some(OutputMode::Pretty),
            "json" => Some(OutputMode::Json),
            "json-pretty" => Some(OutputMode::JsonPretty),
            "json-lines" => Some(OutputMode::JsonLines),
            _ => None,
        }
    }

    /// Like `parse`, but unknown names fall back to `pretty`.
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::warn!(mode = s, "unknown output mode; using pretty");
            OutputMode::Pretty
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Pretty => "pretty",
            OutputMode::Json => "json",
            OutputMode::JsonPretty => "json-pretty",
            OutputMode::JsonLines => "json-lines",
        }
    }
}

fn use_colors(mode: OutputMode) -> bool {
    mode == OutputMode::Pretty && std::env::var_os("NO_COLOR").is_none()
}

/// `error:` prefix for messages on stderr.
pub fn error_prefix() -> String {
    if std::env::var_os("NO_COLOR").is_none() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Print a lint report to stdout in the requested mode.
pub fn print_lint(res: &LintResult, mode: OutputMode) -> Result<()> {
    println!("{}", render(res, mode, use_colors(mode))?);
    Ok(())
}

/// Render a report (pure) for printing or testing.
pub fn render(res: &LintResult, mode: OutputMode, color: bool) -> Result<String> {
    let out = match mode {
        OutputMode::Pretty => render_pretty(res, color),
        OutputMode::Json => serde_json::to_string(&res.records)?,
        OutputMode::JsonPretty => serde_json::to_string_pretty(&res.records)?,
        OutputMode::JsonLines => res
            .records
            .iter()
            .map(serde_json::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()?
            .join("\n"),
    };
    Ok(out)
}

fn label(r: &ResultRecord) -> String {
    format!("{}/{}", r.path, r.rule_name)
}

fn paint(text: &str, kind: Kind) -> String {
    match kind {
        Kind::Success => text.green().to_string(),
        Kind::Warning => text.yellow().to_string(),
        Kind::Error => text.red().to_string(),
    }
}

/// One line per record: `root.<path>/<rule>` padded with dots past the
/// longest label, then the message.
fn render_pretty(res: &LintResult, color: bool) -> String {
    let labels: Vec<String> = res.records.iter().map(label).collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 3;
    let mut lines: Vec<String> = res
        .records
        .iter()
        .zip(&labels)
        .map(|(r, l)| {
            let dots = ".".repeat(width - l.chars().count());
            let l = if color { paint(l, r.kind) } else { l.clone() };
            format!("{}{}{}", l, dots, r.message)
        })
        .collect();
    let summary = format!(
        "— Summary — errors={} warnings={} successes={}",
        res.summary.errors, res.summary.warnings, res.summary.successes
    );
    lines.push(if color {
        summary.bold().to_string()
    } else {
        summary
    });
    lines.join("\n")
}
