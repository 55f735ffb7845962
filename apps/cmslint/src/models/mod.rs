//! Shared data models for paths, rule outcomes and lint reports.

pub mod path;
pub mod record;

pub use path::{ConfigPath, PathSegment};
pub use record::{Kind, LintResult, ResultRecord, Summary};
