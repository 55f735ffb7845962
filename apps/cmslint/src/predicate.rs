//! Typed predicates over `(node, path)` and small combinators to compose them.
//!
//! Every predicate here is total: a node that is not an object simply has
//! no properties, so property checks answer `false` instead of failing.

use crate::matcher::{self, Pattern};
use crate::models::ConfigPath;
use serde_json::Value as Json;
use std::sync::Arc;

/// A shareable boolean test over a node and its location.
pub type Predicate = Arc<dyn Fn(&Json, &ConfigPath) -> bool + Send + Sync>;

/// Wrap a closure as a `Predicate`.
pub fn pred<F>(f: F) -> Predicate
where
    F: Fn(&Json, &ConfigPath) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Lift a test that only looks at the node.
pub fn on_node<F>(f: F) -> Predicate
where
    F: Fn(&Json) -> bool + Send + Sync + 'static,
{
    pred(move |node, _| f(node))
}

pub fn always() -> Predicate {
    pred(|_, _| true)
}

// ---- presence accessors ----

/// Optional-field accessor; `None` for absent keys and non-object nodes.
pub fn get<'a>(node: &'a Json, key: &str) -> Option<&'a Json> {
    node.as_object().and_then(|obj| obj.get(key))
}

/// Key present on an object node (a `null` value still counts as present).
pub fn has_key(node: &Json, key: &str) -> bool {
    get(node, key).is_some()
}

/// The subset of `keys` that `node` lacks, in the order given.
pub fn missing_keys<'k>(node: &Json, keys: &[&'k str]) -> Vec<&'k str> {
    keys.iter().copied().filter(|k| !has_key(node, k)).collect()
}

/// Non-empty list.
pub fn is_non_empty_list(value: Option<&Json>) -> bool {
    value.and_then(Json::as_array).is_some_and(|a| !a.is_empty())
}

// ---- path predicates ----

/// Fixed location.
pub fn at_path(path: ConfigPath) -> Predicate {
    pred(move |_, current| matcher::matches_exact(path.segments(), current.segments()))
}

/// Whole-path pattern match.
pub fn match_path(pattern: Pattern) -> Predicate {
    pred(move |_, current| matcher::matches(&pattern, current.segments()))
}

/// Pattern matched against the tail of the path, regardless of ancestry.
pub fn path_ends_with(pattern: Pattern) -> Predicate {
    pred(move |_, current| matcher::matches_suffix(&pattern, current.segments()))
}

// ---- node predicates ----

pub fn has(key: &'static str) -> Predicate {
    on_node(move |node| has_key(node, key))
}

pub fn has_all(keys: &'static [&'static str]) -> Predicate {
    on_node(move |node| keys.iter().all(|k| has_key(node, k)))
}

pub fn has_any(keys: &'static [&'static str]) -> Predicate {
    on_node(move |node| keys.iter().any(|k| has_key(node, k)))
}

/// Property present and equal to `value`.
pub fn prop_eq(key: &'static str, value: Json) -> Predicate {
    on_node(move |node| get(node, key) == Some(&value))
}

// ---- combinators ----

pub fn all(preds: Vec<Predicate>) -> Predicate {
    pred(move |node, path| preds.iter().all(|p| p(node, path)))
}

pub fn any(preds: Vec<Predicate>) -> Predicate {
    pred(move |node, path| preds.iter().any(|p| p(node, path)))
}

pub fn both(a: Predicate, b: Predicate) -> Predicate {
    pred(move |node, path| a(node, path) && b(node, path))
}

pub fn either(a: Predicate, b: Predicate) -> Predicate {
    pred(move |node, path| a(node, path) || b(node, path))
}

pub fn not(p: Predicate) -> Predicate {
    pred(move |node, path| !p(node, path))
}
