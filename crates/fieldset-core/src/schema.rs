//! # Rules & Schemas
//!
//! A [`Rule`] pairs a predicate over the whole data snapshot with the
//! error message to surface when the predicate fails. A [`Schema`] maps
//! field names to ordered rule lists.
//!
//! ## Ordering
//!
//! Rule order within a field is significant: the first failing rule's
//! message wins for single-error queries, and multi-error queries
//! collect messages in rule order (no dedupe — two rules sharing a
//! message produce the message twice). Field iteration order is the
//! sorted key order of the underlying map.

use std::collections::BTreeMap;
use std::fmt;

/// The data snapshot a schema validates: a dynamic string-keyed object.
///
/// Rules receive the whole snapshot, so any key is readable from any
/// rule regardless of which field the rule is declared under.
pub type FormData = serde_json::Map<String, serde_json::Value>;

/// A single validation rule: predicate + error message.
///
/// The predicate is `Send + Sync` so schemas can be shared across
/// threads behind an `Arc`. Predicates must be total functions of the
/// snapshot — a panicking predicate propagates to the caller.
pub struct Rule {
    message: String,
    predicate: Box<dyn Fn(&FormData) -> bool + Send + Sync>,
}

impl Rule {
    /// Create a rule from an error message and a predicate.
    pub fn new(
        message: impl Into<String>,
        predicate: impl Fn(&FormData) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            predicate: Box::new(predicate),
        }
    }

    /// The error message surfaced when this rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run the predicate against a data snapshot.
    pub fn check(&self, data: &FormData) -> bool {
        (self.predicate)(data)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// An ordered mapping from field name to that field's rule list.
///
/// Built once by the caller and treated as immutable afterwards. An
/// empty schema is valid and yields an empty validation state — the
/// engine never rejects a schema.
#[derive(Debug, Default)]
pub struct Schema {
    fields: BTreeMap<String, Vec<Rule>>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field with its ordered rule list.
    ///
    /// Declaring the same field twice appends the new rules after the
    /// existing ones, preserving declaration order.
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.fields.entry(name.into()).or_default().extend(rules);
        self
    }

    /// Whether the schema declares any rules for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// The ordered rule list for `field`, if declared.
    pub fn rules(&self, field: &str) -> Option<&[Rule]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Iterate declared field names in field-iteration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> FormData {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn rule_checks_predicate_against_whole_snapshot() {
        let rule = Rule::new("Must be dingo.", |data: &FormData| {
            match data.get("dingo").and_then(|v| v.as_bool()) {
                Some(true) => data.get("name").and_then(|v| v.as_str()) == Some("dingo"),
                _ => true,
            }
        });

        assert!(rule.check(&snapshot(json!({"name": "jack", "dingo": false}))));
        assert!(!rule.check(&snapshot(json!({"name": "jack", "dingo": true}))));
        assert_eq!(rule.message(), "Must be dingo.");
    }

    #[test]
    fn rule_debug_elides_predicate() {
        let rule = Rule::new("Name is required.", |_: &FormData| true);
        let rendered = format!("{rule:?}");
        assert!(rendered.contains("Name is required."));
        assert!(!rendered.contains("predicate"));
    }

    #[test]
    fn schema_builder_declares_fields() {
        let schema = Schema::new()
            .field("name", vec![Rule::new("Name is required.", |_| true)])
            .field("age", vec![Rule::new("Must be 18", |_| true)]);

        assert_eq!(schema.len(), 2);
        assert!(schema.contains("name"));
        assert!(schema.contains("age"));
        assert!(!schema.contains("balls"));
        assert!(schema.rules("name").is_some());
        assert!(schema.rules("balls").is_none());
    }

    #[test]
    fn redeclaring_a_field_appends_rules_in_order() {
        let schema = Schema::new()
            .field("name", vec![Rule::new("first", |_| true)])
            .field("name", vec![Rule::new("second", |_| true)]);

        let messages: Vec<&str> = schema
            .rules("name")
            .unwrap()
            .iter()
            .map(Rule::message)
            .collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn field_names_iterate_in_sorted_order() {
        let schema = Schema::new()
            .field("zeta", vec![])
            .field("alpha", vec![])
            .field("mid", vec![]);

        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn empty_schema_is_empty() {
        let schema = Schema::new();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
        assert_eq!(schema.field_names().count(), 0);
    }
}
