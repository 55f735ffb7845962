//! cmslint core library.
//!
//! Validates a parsed CMS configuration document against an ordered table of
//! declarative rules and produces a flat report of successes, warnings and
//! errors, with suggested fixes where a rule provides one.
//!
//! High-level modules:
//! - `matcher`: Path patterns with wildcards, regexes, suffix and exact matching.
//! - `predicate`: Typed `(node, path)` predicates and their combinators.
//! - `rule`: Rules and ordered rule sets.
//! - `engine`: Per-node evaluation and pre-order traversal.
//! - `rules`: The built-in rule table.
//! - `document`: YAML/JSON loading.
//! - `config`: Settings discovery and effective settings resolution.
//! - `lint`: Runs a full lint over a document.
//! - `output`: Pretty/JSON printers.
//! - `models`: Paths, records and summaries.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `error`: Error type.
pub mod cli;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod lint;
pub mod matcher;
pub mod models;
pub mod output;
pub mod predicate;
pub mod rule;
pub mod rules;

pub use engine::{evaluate, traverse};
pub use error::{LintError, Result};
pub use models::{ConfigPath, Kind, LintResult, PathSegment, ResultRecord};
pub use rule::{Rule, RuleSet, Severity};
