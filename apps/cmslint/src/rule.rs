//! Declarative rules and ordered rule sets.
//!
//! A [`Rule`] pairs an applicability predicate with a pass/fail predicate and
//! the messages (and optional fix) for each outcome. Rules are immutable once
//! built and never look at each other's results; a [`RuleSet`] only fixes
//! the order in which they are reported.

use crate::error::{LintError, Result};
use crate::models::{ConfigPath, Kind};
use crate::predicate::{always, Predicate};
use serde_json::Value as Json;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Produces a message for a node.
pub type Message = Arc<dyn Fn(&Json, &ConfigPath) -> String + Send + Sync>;
/// Produces a suggested replacement for a node.
pub type Fix = Arc<dyn Fn(&Json, &ConfigPath) -> Json + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Kind reported when a rule's test fails.
pub enum Severity {
    Warning,
    Error,
}

impl From<Severity> for Kind {
    fn from(s: Severity) -> Self {
        match s {
            Severity::Warning => Kind::Warning,
            Severity::Error => Kind::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Kind::from(*self).fmt(f)
    }
}

#[derive(Clone)]
pub struct Rule {
    name: String,
    severity: Severity,
    applies: Predicate,
    test: Predicate,
    success: Message,
    failure: Message,
    fix: Option<Fix>,
}

impl Rule {
    /// A rule that reports `Error` on failure.
    pub fn error(name: impl Into<String>) -> Self {
        Self::with_severity(name, Severity::Error)
    }

    /// A rule that reports `Warning` on failure.
    pub fn warning(name: impl Into<String>) -> Self {
        Self::with_severity(name, Severity::Warning)
    }

    fn with_severity(name: impl Into<String>, severity: Severity) -> Self {
        let name = name.into();
        let passed = format!("{} passed.", name);
        let failed = format!("{} failed.", name);
        Self {
            name,
            severity,
            applies: always(),
            test: always(),
            success: Arc::new(move |_: &Json, _: &ConfigPath| passed.clone()),
            failure: Arc::new(move |_: &Json, _: &ConfigPath| failed.clone()),
            fix: None,
        }
    }

    /// Applicability predicate. Defaults to every node.
    pub fn when(mut self, applies: Predicate) -> Self {
        self.applies = applies;
        self
    }

    pub fn test(mut self, test: Predicate) -> Self {
        self.test = test;
        self
    }

    pub fn success<F>(mut self, f: F) -> Self
    where
        F: Fn(&Json, &ConfigPath) -> String + Send + Sync + 'static,
    {
        self.success = Arc::new(f);
        self
    }

    pub fn success_text(self, text: &'static str) -> Self {
        self.success(move |_, _| text.to_string())
    }

    pub fn failure<F>(mut self, f: F) -> Self
    where
        F: Fn(&Json, &ConfigPath) -> String + Send + Sync + 'static,
    {
        self.failure = Arc::new(f);
        self
    }

    pub fn failure_text(self, text: &'static str) -> Self {
        self.failure(move |_, _| text.to_string())
    }

    pub fn fix<F>(mut self, f: F) -> Self
    where
        F: Fn(&Json, &ConfigPath) -> Json + Send + Sync + 'static,
    {
        self.fix = Some(Arc::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_applicable(&self, node: &Json, path: &ConfigPath) -> bool {
        (self.applies)(node, path)
    }

    pub fn passes(&self, node: &Json, path: &ConfigPath) -> bool {
        (self.test)(node, path)
    }

    pub fn success_message(&self, node: &Json, path: &ConfigPath) -> String {
        (self.success)(node, path)
    }

    pub fn failure_message(&self, node: &Json, path: &ConfigPath) -> String {
        (self.failure)(node, path)
    }

    /// Suggested replacement, when the rule declares one.
    pub fn fixed(&self, node: &Json, path: &ConfigPath) -> Option<Json> {
        self.fix.as_ref().map(|f| f(node, path))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("severity", &self.severity)
            .field("fix", &self.fix.is_some())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
/// Ordered collection of rules with unique names.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set, rejecting duplicate names.
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        let mut seen = HashSet::new();
        for r in &rules {
            if !seen.insert(r.name.as_str()) {
                return Err(LintError::DuplicateRule {
                    name: r.name.clone(),
                });
            }
        }
        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    /// Same order, minus the named rules.
    pub fn without<S: AsRef<str>>(&self, names: &[S]) -> RuleSet {
        let rules = self
            .rules
            .iter()
            .filter(|r| !names.iter().any(|n| n.as_ref() == r.name))
            .cloned()
            .collect();
        RuleSet { rules }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
