//! Per-node rule outcomes and the aggregated report.

use super::path::ConfigPath;
use serde::Serialize;
use serde_json::Value as Json;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Outcome category of a single record.
pub enum Kind {
    Success,
    Warning,
    Error,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Success => write!(f, "success"),
            Kind::Warning => write!(f, "warning"),
            Kind::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// One rule's outcome at one node.
pub struct ResultRecord {
    #[serde(rename = "name")]
    pub rule_name: String,
    pub path: ConfigPath,
    #[serde(rename = "type")]
    pub kind: Kind,
    pub message: String,
    /// Suggested replacement for the node, only on failures of rules that
    /// declare a fix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Json>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers and exit handling.
pub struct Summary {
    pub successes: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl Summary {
    pub fn from_records(records: &[ResultRecord]) -> Self {
        let mut s = Summary::default();
        for r in records {
            match r.kind {
                Kind::Success => s.successes += 1,
                Kind::Warning => s.warnings += 1,
                Kind::Error => s.errors += 1,
            }
        }
        s
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Lint results container.
pub struct LintResult {
    pub records: Vec<ResultRecord>,
    pub summary: Summary,
}

impl LintResult {
    pub fn new(records: Vec<ResultRecord>) -> Self {
        let summary = Summary::from_records(&records);
        Self { records, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_path;
    use serde_json::json;

    fn record(kind: Kind, fix: Option<Json>) -> ResultRecord {
        ResultRecord {
            rule_name: "r".into(),
            path: config_path!["backend"],
            kind,
            message: "m".into(),
            fix,
        }
    }

    #[test]
    fn serialized_shape_uses_name_and_type() {
        let v = serde_json::to_value(record(Kind::Warning, None)).unwrap();
        assert_eq!(
            v,
            json!({"name": "r", "path": ["backend"], "type": "warning", "message": "m"})
        );
    }

    #[test]
    fn fix_is_serialized_when_present() {
        let v = serde_json::to_value(record(Kind::Error, Some(json!({"a": 1})))).unwrap();
        assert_eq!(v["fix"], json!({"a": 1}));
    }

    #[test]
    fn summary_counts_each_kind() {
        let res = LintResult::new(vec![
            record(Kind::Success, None),
            record(Kind::Error, None),
            record(Kind::Error, None),
            record(Kind::Warning, None),
        ]);
        assert_eq!(
            res.summary,
            Summary {
                successes: 1,
                warnings: 1,
                errors: 2
            }
        );
    }
}
