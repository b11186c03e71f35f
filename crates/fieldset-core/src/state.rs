//! # Validation State & Aggregate Queries
//!
//! [`FieldState`] is the computed validity for one field; a
//! [`ValidationState`] maps every schema field to its entry. States are
//! updated immutably — the reducer operations in [`crate::evaluate`]
//! clone the previous state and replace entries, never mutate in place
//! behind the caller's back.
//!
//! Both types are serializable so a state can be snapshotted and
//! transferred wholesale between two form instances built over the same
//! schema shape (the only sanctioned cross-instance synchronization).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// Computed validity for a single field.
///
/// Invariant: `is_valid == errors.is_empty()`. Construct evaluated
/// entries through [`FieldState::from_errors`] to keep the two in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    /// Whether every rule for the field passed on the last evaluation.
    pub is_valid: bool,
    /// One message per failing rule, in rule-declaration order.
    pub errors: Vec<String>,
    /// Whether the field has been stamped by an unconditional validate.
    ///
    /// Lets a UI defer showing errors on fields the user never touched
    /// while still surfacing them progressively as fields are fixed.
    #[serde(default)]
    pub dirty: bool,
}

impl Default for FieldState {
    /// The pristine entry: valid, no errors, not dirty.
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            dirty: false,
        }
    }
}

impl FieldState {
    /// Build an evaluated entry from the collected failure messages.
    ///
    /// `is_valid` is derived from the error list, never supplied, so the
    /// `is_valid == errors.is_empty()` invariant holds by construction.
    /// The entry starts with `dirty == false`; dirty stamping is the
    /// reducer's decision, not the evaluator's.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            dirty: false,
        }
    }
}

/// Mapping of every schema field to its [`FieldState`].
///
/// Keys equal the schema's keys at construction time and individual
/// keys are never added or removed afterwards — entries are replaced
/// one at a time by the reducer, or the whole value is replaced or
/// reset by the owning session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationState {
    fields: BTreeMap<String, FieldState>,
}

impl ValidationState {
    /// Derive the initial state for a schema: one pristine entry per
    /// declared field. An empty schema yields an empty state.
    pub fn for_schema(schema: &Schema) -> Self {
        let fields = schema
            .field_names()
            .map(|name| (name.to_string(), FieldState::default()))
            .collect();
        Self { fields }
    }

    /// The entry for `field`, if the state tracks it.
    pub fn get(&self, field: &str) -> Option<&FieldState> {
        self.fields.get(field)
    }

    /// Replace (or create) the entry for `field`.
    pub(crate) fn insert(&mut self, field: String, entry: FieldState) {
        self.fields.insert(field, entry);
    }

    /// Iterate `(field, entry)` pairs in field-iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of tracked fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the state tracks no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // -- Aggregate queries ----------------------------------------------------

    /// First error message for `field`, or `""` when the field is valid
    /// or unknown.
    pub fn error_of(&self, field: &str) -> &str {
        self.fields
            .get(field)
            .and_then(|entry| entry.errors.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Every error message for `field`, or empty when the field is
    /// valid or unknown.
    pub fn errors_of(&self, field: &str) -> &[String] {
        self.fields
            .get(field)
            .map(|entry| entry.errors.as_slice())
            .unwrap_or(&[])
    }

    /// The field's validity, or `true` for unknown fields — the absence
    /// of rules means there is nothing to fail.
    pub fn field_valid(&self, field: &str) -> bool {
        self.fields.get(field).map_or(true, |entry| entry.is_valid)
    }

    /// Overall validity: the conjunction of every entry's `is_valid`.
    /// An empty state is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|entry| entry.is_valid)
    }

    /// Display-ready error list: the first message of every invalid
    /// field, in field-iteration order. Fields with no error are
    /// omitted, so the list holds one message per invalid field rather
    /// than every rule failure.
    pub fn gather_errors(&self) -> Vec<String> {
        self.fields
            .values()
            .filter_map(|entry| entry.errors.first().cloned())
            .collect()
    }
}
