//! Path pattern matching used by rule applicability predicates.
//!
//! A pattern matches a path only when both have the same number of
//! segments and every pattern segment accepts the path segment at the same
//! position. Comparison stops at the first segment that does not match.

use crate::error::{LintError, Result};
use crate::models::PathSegment;
use regex::Regex;

#[derive(Debug, Clone)]
/// One element of a match pattern.
pub enum PatternSegment {
    /// Equal type and value.
    Exact(PathSegment),
    /// Any single segment, key or index.
    Wildcard,
    /// A key whose text satisfies the expression (unanchored search).
    Regex(Regex),
}

impl PatternSegment {
    /// Compile a regular-expression segment.
    pub fn regex(src: &str) -> Result<Self> {
        Regex::new(src)
            .map(PatternSegment::Regex)
            .map_err(|source| LintError::Pattern {
                pattern: src.to_string(),
                source,
            })
    }

    pub fn matches(&self, segment: &PathSegment) -> bool {
        match self {
            PatternSegment::Wildcard => true,
            PatternSegment::Regex(re) => segment.as_key().is_some_and(|k| re.is_match(k)),
            PatternSegment::Exact(expected) => expected == segment,
        }
    }
}

impl From<&str> for PatternSegment {
    /// `"*"` becomes a wildcard; anything else an exact key.
    fn from(s: &str) -> Self {
        if s == "*" {
            PatternSegment::Wildcard
        } else {
            PatternSegment::Exact(PathSegment::from(s))
        }
    }
}

impl From<usize> for PatternSegment {
    fn from(index: usize) -> Self {
        PatternSegment::Exact(PathSegment::Index(index))
    }
}

impl From<PathSegment> for PatternSegment {
    fn from(segment: PathSegment) -> Self {
        PatternSegment::Exact(segment)
    }
}

#[derive(Debug, Clone, Default)]
/// An ordered sequence of pattern segments.
pub struct Pattern(Vec<PatternSegment>);

impl Pattern {
    pub fn new(segments: Vec<PatternSegment>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PatternSegment>> for Pattern {
    fn from(segments: Vec<PatternSegment>) -> Self {
        Self(segments)
    }
}

/// Build a `Pattern` from literals; `"*"` is a wildcard.
///
/// ```
/// use cmslint::{config_path, pattern};
/// use cmslint::matcher::matches;
/// let p = pattern!["collections", "*"];
/// assert!(matches(&p, config_path!["collections", 3usize].segments()));
/// ```
#[macro_export]
macro_rules! pattern {
    () => { $crate::matcher::Pattern::default() };
    ($($seg:expr),+ $(,)?) => {
        $crate::matcher::Pattern::new(vec![$($crate::matcher::PatternSegment::from($seg)),+])
    };
}

/// Whole-path match: equal arity, every segment accepted.
pub fn matches(pattern: &Pattern, path: &[PathSegment]) -> bool {
    pattern.len() == path.len()
        && pattern
            .segments()
            .iter()
            .zip(path)
            .all(|(p, s)| p.matches(s))
}

/// Match `pattern` against the trailing `pattern.len()` segments of `path`.
/// Paths shorter than the pattern never match.
pub fn matches_suffix(pattern: &Pattern, path: &[PathSegment]) -> bool {
    match path.len().checked_sub(pattern.len()) {
        Some(start) => matches(pattern, &path[start..]),
        None => false,
    }
}

/// Plain segment-wise equality, no pattern semantics.
pub fn matches_exact(path: &[PathSegment], other: &[PathSegment]) -> bool {
    path == other
}
