//! # Stock Rule Constructors
//!
//! Ready-made rules for the common string checks so schemas don't
//! hand-roll the same trim-and-measure predicate everywhere. Each
//! constructor closes over the field name it inspects; the value is
//! trimmed before it is measured, so whitespace-only input counts as
//! empty. A missing or non-string value fails the rule.

use crate::schema::{FormData, Rule};

fn trimmed_str<'a>(data: &'a FormData, field: &str) -> Option<&'a str> {
    data.get(field).and_then(|v| v.as_str()).map(str::trim)
}

/// The field must hold a non-empty string after trimming.
pub fn required(field: &str, message: impl Into<String>) -> Rule {
    let field = field.to_string();
    Rule::new(message, move |data: &FormData| {
        trimmed_str(data, &field).map_or(false, |s| !s.is_empty())
    })
}

/// The field's trimmed length must be strictly greater than `n`.
pub fn min_len(field: &str, n: usize, message: impl Into<String>) -> Rule {
    let field = field.to_string();
    Rule::new(message, move |data: &FormData| {
        trimmed_str(data, &field).map_or(false, |s| s.chars().count() > n)
    })
}

/// The field's trimmed length must be strictly less than `n`.
pub fn max_len(field: &str, n: usize, message: impl Into<String>) -> Rule {
    let field = field.to_string();
    Rule::new(message, move |data: &FormData| {
        trimmed_str(data, &field).map_or(false, |s| s.chars().count() < n)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> FormData {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn required_accepts_non_empty_strings() {
        let rule = required("name", "Name is required.");
        assert!(rule.check(&snapshot(json!({"name": "dingo"}))));
    }

    #[test]
    fn required_rejects_empty_and_whitespace_only() {
        let rule = required("name", "Name is required.");
        assert!(!rule.check(&snapshot(json!({"name": ""}))));
        assert!(!rule.check(&snapshot(json!({"name": " "}))));
    }

    #[test]
    fn required_rejects_missing_and_non_string_values() {
        let rule = required("name", "Name is required.");
        assert!(!rule.check(&snapshot(json!({}))));
        assert!(!rule.check(&snapshot(json!({"name": 42}))));
    }

    #[test]
    fn min_len_is_strict_and_trims() {
        let rule = min_len("name", 0, "too short");
        assert!(rule.check(&snapshot(json!({"name": "f"}))));

        let rule = min_len("name", 5, "too short");
        assert!(!rule.check(&snapshot(json!({"name": "dingo"}))));

        let rule = min_len("name", 1, "too short");
        assert!(!rule.check(&snapshot(json!({"name": " s"}))));
    }

    #[test]
    fn max_len_is_strict_and_trims() {
        let rule = max_len("name", 6, "too long");
        assert!(rule.check(&snapshot(json!({"name": "dingo"}))));

        let rule = max_len("name", 0, "too long");
        assert!(!rule.check(&snapshot(json!({"name": "f"}))));

        let rule = max_len("name", 2, "too long");
        assert!(rule.check(&snapshot(json!({"name": " s"}))));
    }
}
