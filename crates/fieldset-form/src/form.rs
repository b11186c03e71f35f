//! # Form Sessions
//!
//! A [`Form`] binds a shared schema to one owned `ValidationState`.
//! Every mutating method delegates to the pure reducer in
//! `fieldset-core`, replaces the owned state with the returned value,
//! and hands back the operation's overall-validity flag. Two forms
//! built over the same schema are fully isolated; [`Form::replace_state`]
//! is the only sanctioned way to synchronize them and is a plain value
//! copy.

use std::sync::Arc;

use fieldset_core::{FormData, Schema, ValidationState};

/// A validation session: one schema handle, one owned state.
#[derive(Debug)]
pub struct Form {
    schema: Arc<Schema>,
    state: ValidationState,
}

impl Form {
    /// Create a session with the pristine state for `schema`.
    ///
    /// Accepts either a `Schema` by value or an `Arc<Schema>` so one
    /// schema can back several concurrent sessions.
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        let schema = schema.into();
        let state = ValidationState::for_schema(&schema);
        Self { schema, state }
    }

    /// The schema this session validates against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The current validation state.
    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    // -- Reducer operations ---------------------------------------------------

    /// Unconditionally re-validate one field. Returns overall validity.
    pub fn validate(&mut self, field: &str, data: &FormData) -> bool {
        let (next, overall) = fieldset_core::validate(&self.schema, &self.state, field, data);
        self.state = next;
        overall
    }

    /// Re-validate one field, keeping the previous entry when the new
    /// result is invalid. Returns overall validity.
    pub fn validate_if_dirty(&mut self, field: &str, data: &FormData) -> bool {
        let (next, overall) =
            fieldset_core::validate_if_dirty(&self.schema, &self.state, field, data);
        self.state = next;
        overall
    }

    /// Unconditionally re-validate a subset of fields (default: all).
    /// Returns overall validity.
    pub fn validate_all(&mut self, data: &FormData, fields: Option<&[&str]>) -> bool {
        let (next, overall) = fieldset_core::validate_all(&self.schema, &self.state, data, fields);
        self.state = next;
        overall
    }

    /// Re-validate a subset, keeping each previous entry whose
    /// re-evaluation fails. Returns overall validity.
    pub fn validate_all_if_dirty(&mut self, data: &FormData, fields: Option<&[&str]>) -> bool {
        let (next, overall) =
            fieldset_core::validate_all_if_dirty(&self.schema, &self.state, data, fields);
        self.state = next;
        overall
    }

    // -- Aggregate queries ----------------------------------------------------

    /// First error message for `field`, `""` when valid or unknown.
    pub fn error_of(&self, field: &str) -> &str {
        self.state.error_of(field)
    }

    /// Every error message for `field`, empty when valid or unknown.
    pub fn errors_of(&self, field: &str) -> &[String] {
        self.state.errors_of(field)
    }

    /// The field's validity, `true` for unknown fields.
    pub fn field_valid(&self, field: &str) -> bool {
        self.state.field_valid(field)
    }

    /// Overall validity of the current state.
    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// Display-ready error list: first error of each invalid field, in
    /// field-iteration order.
    pub fn validation_errors(&self) -> Vec<String> {
        self.state.gather_errors()
    }

    // -- State lifecycle ------------------------------------------------------

    /// Discard the owned state and return to the pristine state for the
    /// schema.
    pub fn reset(&mut self) {
        self.state = ValidationState::for_schema(&self.schema);
        tracing::debug!("form state reset");
    }

    /// Replace the owned state wholesale.
    ///
    /// Intended for synchronizing two sessions over the same schema
    /// shape (e.g. parent/child forms). The value is copied as-is; no
    /// key reconciliation happens.
    pub fn replace_state(&mut self, state: ValidationState) {
        tracing::debug!(overall_valid = state.is_valid(), "form state replaced");
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldset_core::rules::required;
    use fieldset_core::Rule;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> FormData {
        value.as_object().expect("object literal").clone()
    }

    fn schema() -> Schema {
        Schema::new()
            .field("name", vec![required("name", "Name is required.")])
            .field(
                "age",
                vec![Rule::new("Must be 18", |data: &FormData| {
                    data.get("age").and_then(|v| v.as_i64()).map_or(false, |n| n >= 18)
                })],
            )
    }

    #[test]
    fn new_form_is_pristine_and_valid() {
        let form = Form::new(schema());
        assert!(form.is_valid());
        assert!(form.validation_errors().is_empty());
        assert_eq!(form.error_of("name"), "");
        assert_eq!(form.state().len(), 2);
    }

    #[test]
    fn validate_updates_owned_state() {
        let mut form = Form::new(schema());
        let overall = form.validate("name", &snapshot(json!({"name": ""})));
        assert!(!overall);
        assert!(!form.is_valid());
        assert_eq!(form.error_of("name"), "Name is required.");
        assert_eq!(form.errors_of("name"), ["Name is required."]);
        assert!(!form.field_valid("name"));
    }

    #[test]
    fn validation_errors_tracks_state_changes() {
        let mut form = Form::new(schema());
        form.validate("name", &snapshot(json!({"name": ""})));
        assert_eq!(form.validation_errors(), ["Name is required."]);

        form.validate("name", &snapshot(json!({"name": "jack"})));
        assert!(form.validation_errors().is_empty());
    }

    #[test]
    fn reset_returns_to_pristine() {
        let mut form = Form::new(schema());
        form.validate_all(&snapshot(json!({"name": "", "age": 15})), None);
        assert!(!form.is_valid());

        form.reset();
        assert!(form.is_valid());
        assert_eq!(form.state(), &ValidationState::for_schema(form.schema()));
    }

    #[test]
    fn replace_state_synchronizes_two_sessions() {
        let shared = Arc::new(schema());
        let mut parent = Form::new(Arc::clone(&shared));
        let mut child = Form::new(shared);

        parent.validate_all(&snapshot(json!({"name": "bob", "age": 15})), None);
        assert!(!parent.is_valid());
        assert!(child.is_valid());

        child.replace_state(parent.state().clone());
        assert_eq!(parent.state(), child.state());
        assert!(!child.is_valid());
    }

    #[test]
    fn sessions_over_a_shared_schema_are_isolated() {
        let shared = Arc::new(schema());
        let mut a = Form::new(Arc::clone(&shared));
        let b = Form::new(shared);

        a.validate("age", &snapshot(json!({"age": 15})));
        assert!(!a.is_valid());
        assert!(b.is_valid());
    }
}
