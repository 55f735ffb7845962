//! Lint runner: load the document, select rules, traverse, summarize.
//!
//! Produces a `LintResult` with the flat record list and a summary. With
//! `quiet` set, success records are dropped after traversal; the relative
//! order of the remaining records is unchanged.

use crate::config::Effective;
use crate::document::load_document;
use crate::engine::traverse;
use crate::error::Result;
use crate::models::{Kind, LintResult};
use crate::rule::RuleSet;
use crate::rules;
use serde_json::Value as Json;
use std::path::Path;

/// Run the built-in rules over the document at `document`.
pub fn run_lint(document: &Path, eff: &Effective) -> Result<LintResult> {
    let doc = load_document(document)?;
    let rules = select_rules(rules::builtin()?, &eff.disabled);
    Ok(lint_value(&doc, &rules, eff.quiet))
}

/// Drop disabled rules, logging names that match nothing.
pub fn select_rules(all: RuleSet, disabled: &[String]) -> RuleSet {
    for name in disabled {
        if all.get(name).is_none() {
            tracing::warn!(rule = %name, "cannot disable unknown rule");
        }
    }
    if disabled.is_empty() {
        all
    } else {
        all.without(disabled)
    }
}

/// Lint an already-parsed document.
pub fn lint_value(doc: &Json, rules: &RuleSet, quiet: bool) -> LintResult {
    let mut records = traverse(rules, doc);
    if quiet {
        records.retain(|r| r.kind != Kind::Success);
    }
    LintResult::new(records)
}
