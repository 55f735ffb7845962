//! Error types for cmslint operations.
//!
//! Rule violations are not errors: they are ordinary `ResultRecord`s. The
//! variants here cover usage mistakes, unreadable or malformed input, and
//! faults in how a rule set was put together.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    /// No document path was given on the command line.
    #[error("You must pass a filename!")]
    MissingDocument,

    /// The document could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML/JSON.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A settings file exists but could not be loaded.
    #[error("Failed to load settings at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Two rules in one rule set share a name.
    #[error("Duplicate rule name: {name}")]
    DuplicateRule { name: String },

    /// A regular-expression pattern segment did not compile.
    #[error("Invalid pattern segment {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LintError>;
