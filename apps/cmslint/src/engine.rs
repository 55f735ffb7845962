//! Rule evaluation and document traversal.
//!
//! `traverse` walks the document depth-first, pre-order, starting at the
//! root with an empty path. At each node every rule in the set is tried in
//! order; a node's own records always precede those of its descendants.
//! Objects are walked in declared key order, arrays in index order, and
//! scalars end the descent. The document is only ever borrowed.

use crate::models::{ConfigPath, Kind, PathSegment, ResultRecord};
use crate::rule::{Rule, RuleSet};
use serde_json::Value as Json;

/// Apply one rule at one node. `None` when the rule does not apply.
pub fn evaluate_rule(rule: &Rule, node: &Json, path: &ConfigPath) -> Option<ResultRecord> {
    if !rule.is_applicable(node, path) {
        return None;
    }
    let record = if rule.passes(node, path) {
        ResultRecord {
            rule_name: rule.name().to_string(),
            path: path.clone(),
            kind: Kind::Success,
            message: rule.success_message(node, path),
            fix: None,
        }
    } else {
        tracing::debug!(rule = rule.name(), path = %path, "rule failed");
        ResultRecord {
            rule_name: rule.name().to_string(),
            path: path.clone(),
            kind: rule.severity().into(),
            message: rule.failure_message(node, path),
            fix: rule.fixed(node, path),
        }
    };
    Some(record)
}

/// All records the rule set produces at a single node, in rule-set order.
pub fn evaluate(rules: &RuleSet, node: &Json, path: &ConfigPath) -> Vec<ResultRecord> {
    rules
        .iter()
        .filter_map(|rule| evaluate_rule(rule, node, path))
        .collect()
}

/// Evaluate the rule set at every node of `root`, flattened pre-order.
pub fn traverse(rules: &RuleSet, root: &Json) -> Vec<ResultRecord> {
    let mut out = Vec::new();
    walk(rules, root, &ConfigPath::root(), &mut out);
    tracing::debug!(records = out.len(), "traversal finished");
    out
}

fn walk(rules: &RuleSet, node: &Json, path: &ConfigPath, out: &mut Vec<ResultRecord>) {
    tracing::trace!(path = %path, "visiting node");
    out.extend(evaluate(rules, node, path));
    match node {
        Json::Object(map) => {
            for (key, child) in map {
                walk(rules, child, &path.child(PathSegment::Key(key.clone())), out);
            }
        }
        Json::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                walk(rules, child, &path.child(PathSegment::Index(i)), out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_path;
    use crate::predicate::{at_path, has, on_node};
    use serde_json::json;

    /// Succeeds at every node; the message is the node's path.
    fn visit_rule(name: &str) -> Rule {
        Rule::error(name.to_string()).success(|_, p| p.to_string())
    }

    fn paths(records: &[ResultRecord]) -> Vec<String> {
        records.iter().map(|r| r.path.to_string()).collect()
    }

    #[test]
    fn evaluate_skips_inapplicable_rules() {
        let rules = RuleSet::new(vec![Rule::error("root").when(at_path(config_path![]))]).unwrap();
        assert!(evaluate(&rules, &json!({}), &config_path!["backend"]).is_empty());
        assert_eq!(evaluate(&rules, &json!({}), &config_path![]).len(), 1);
    }

    #[test]
    fn success_and_failure_records() {
        let rule = Rule::warning("hasName")
            .test(has("name"))
            .success_text("named")
            .failure_text("unnamed")
            .fix(|_, _| json!({"name": "<name>"}));
        let ok = evaluate_rule(&rule, &json!({"name": "x"}), &config_path![]).unwrap();
        assert_eq!(ok.kind, Kind::Success);
        assert_eq!(ok.message, "named");
        assert!(ok.fix.is_none());

        let bad = evaluate_rule(&rule, &json!({}), &config_path!["a"]).unwrap();
        assert_eq!(bad.kind, Kind::Warning);
        assert_eq!(bad.message, "unnamed");
        assert_eq!(bad.path, config_path!["a"]);
        assert_eq!(bad.fix, Some(json!({"name": "<name>"})));
    }

    #[test]
    fn failure_without_fix_has_no_fix() {
        let rule = Rule::error("never").test(on_node(|_| false));
        let bad = evaluate_rule(&rule, &json!(1), &config_path![]).unwrap();
        assert_eq!(bad.kind, Kind::Error);
        assert!(bad.fix.is_none());
    }

    #[test]
    fn rule_order_is_preserved_at_a_node() {
        let rules = RuleSet::new(vec![
            Rule::error("R1").when(at_path(config_path![])),
            Rule::error("R2").when(at_path(config_path![])),
        ])
        .unwrap();
        let out = traverse(&rules, &json!({}));
        let names: Vec<_> = out.iter().map(|r| r.rule_name.as_str()).collect();
        assert_eq!(names, vec!["R1", "R2"]);
    }

    #[test]
    fn traversal_is_pre_order_in_declared_key_order() {
        let rules = RuleSet::new(vec![visit_rule("visit")]).unwrap();
        let doc = json!({
            "z": {"b": 1, "a": [true, null]},
            "c": "leaf"
        });
        let out = traverse(&rules, &doc);
        assert_eq!(
            paths(&out),
            vec![
                "root",
                "root.z",
                "root.z.b",
                "root.z.a",
                "root.z.a.0",
                "root.z.a.1",
                "root.c",
            ]
        );
    }

    #[test]
    fn node_records_precede_descendant_records() {
        let rules = RuleSet::new(vec![visit_rule("first"), visit_rule("second")]).unwrap();
        let out = traverse(&rules, &json!({"c1": {"x": 1}, "c2": 2}));
        let labels: Vec<_> = out
            .iter()
            .map(|r| format!("{}/{}", r.path, r.rule_name))
            .collect();
        assert_eq!(
            labels,
            vec![
                "root/first",
                "root/second",
                "root.c1/first",
                "root.c1/second",
                "root.c1.x/first",
                "root.c1.x/second",
                "root.c2/first",
                "root.c2/second",
            ]
        );
    }

    #[test]
    fn scalars_and_empty_containers_are_terminal() {
        let rules = RuleSet::new(vec![visit_rule("visit")]).unwrap();
        assert_eq!(traverse(&rules, &json!("text")).len(), 1);
        assert_eq!(traverse(&rules, &json!(null)).len(), 1);
        assert_eq!(traverse(&rules, &json!([])).len(), 1);
        assert_eq!(traverse(&rules, &json!({})).len(), 1);
    }

    #[test]
    fn traversal_is_idempotent_and_read_only() {
        let rules = RuleSet::new(vec![
            visit_rule("visit"),
            Rule::error("fixes").test(has("never")).fix(|_, _| json!(0)),
        ])
        .unwrap();
        let doc = json!({"a": [1, {"b": 2}]});
        let before = doc.clone();
        let first = traverse(&rules, &doc);
        let second = traverse(&rules, &doc);
        assert_eq!(first, second);
        assert_eq!(doc, before);
    }

    #[test]
    fn empty_rule_set_yields_nothing() {
        let rules = RuleSet::default();
        assert!(traverse(&rules, &json!({"a": [1, 2, 3]})).is_empty());
    }
}
