//! Structural locations inside a parsed document.
//!
//! A `ConfigPath` is recomputed during traversal; it identifies a node, it
//! does not own it.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
/// One step from a parent node to a child: an object key or an array index.
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    /// String form of a key segment; `None` for indices.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(k) => Some(k.as_str()),
            PathSegment::Index(_) => None,
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, "{}", k),
            PathSegment::Index(i) => write!(f, "{}", i),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Ordered segments from the document root; the root itself is empty.
pub struct ConfigPath(Vec<PathSegment>);

impl ConfigPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// A new path one level deeper. The receiver is left untouched.
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathSegment>> for ConfigPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        for seg in &self.0 {
            write!(f, ".{}", seg)?;
        }
        Ok(())
    }
}

/// Build a `ConfigPath` from a mix of keys and indices.
///
/// ```
/// use cmslint::config_path;
/// let p = config_path!["collections", 0usize, "fields"];
/// assert_eq!(p.to_string(), "root.collections.0.fields");
/// ```
#[macro_export]
macro_rules! config_path {
    () => { $crate::models::ConfigPath::root() };
    ($($seg:expr),+ $(,)?) => {
        $crate::models::ConfigPath::from(vec![$($crate::models::PathSegment::from($seg)),+])
    };
}
