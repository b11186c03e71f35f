//! # Field Evaluator & State Reducer
//!
//! [`evaluate_field`] runs one field's rules against a snapshot and
//! produces that field's new entry. The four reducer operations compose
//! evaluations into a merged [`ValidationState`], differing in scope
//! (one field vs. a subset) and write policy (always write vs.
//! write-only-if-valid):
//!
//! | op | scope | write policy |
//! |---|---|---|
//! | [`validate`] | one field | always |
//! | [`validate_if_dirty`] | one field | only when the new entry is valid |
//! | [`validate_all`] | subset (default: all) | always |
//! | [`validate_all_if_dirty`] | subset | per field, only when valid |
//!
//! The unconditional paths stamp `dirty = true` on every entry they
//! write; the conditional paths carry the previous entry's flag forward
//! when they write and touch nothing when they suppress a failing
//! result. Fields outside the evaluated subset are left byte-for-byte
//! equal to their previous entries.
//!
//! Every operation returns the post-update overall validity of the full
//! merged state. The single-field operations short-circuit to `true`
//! with an unchanged state when the named field is unknown; unknown
//! names in a subset are silently skipped.

use thiserror::Error;

use crate::schema::{FormData, Schema};
use crate::state::{FieldState, ValidationState};

/// Signal that a field has no rules declared in the schema.
///
/// This is the explicit "absent" marker the public operations map to
/// their documented fallbacks — it never escapes through the reducer
/// API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no validation rules declared for field `{field}`")]
pub struct UnknownField {
    /// The field name that was looked up.
    pub field: String,
}

/// Run every rule for `field` against `data`, in declared order.
///
/// Collects the message of every failing rule, preserving rule order
/// and keeping duplicates (two rules sharing a message fail as two
/// messages). The returned entry has `dirty == false`; stamping is the
/// reducer's job.
///
/// # Errors
///
/// Returns [`UnknownField`] when the schema declares no rules for
/// `field`.
pub fn evaluate_field(
    schema: &Schema,
    field: &str,
    data: &FormData,
) -> Result<FieldState, UnknownField> {
    let rules = schema.rules(field).ok_or_else(|| UnknownField {
        field: field.to_string(),
    })?;

    let errors: Vec<String> = rules
        .iter()
        .filter(|rule| !rule.check(data))
        .map(|rule| rule.message().to_string())
        .collect();

    let entry = FieldState::from_errors(errors);
    tracing::trace!(field, is_valid = entry.is_valid, "evaluated field");
    Ok(entry)
}

/// Re-evaluate one field and write the result unconditionally.
///
/// The written entry is stamped `dirty = true` regardless of outcome.
/// Returns the merged state and its overall validity; an unknown field
/// returns `(state.clone(), true)` without touching anything.
pub fn validate(
    schema: &Schema,
    state: &ValidationState,
    field: &str,
    data: &FormData,
) -> (ValidationState, bool) {
    match evaluate_field(schema, field, data) {
        Ok(mut entry) => {
            entry.dirty = true;
            let mut next = state.clone();
            next.insert(field.to_string(), entry);
            let overall = next.is_valid();
            tracing::debug!(field, overall_valid = overall, "validate: entry replaced");
            (next, overall)
        }
        Err(_) => (state.clone(), true),
    }
}

/// Re-evaluate one field and write the result only when it is valid.
///
/// A failing re-evaluation is discarded — the previous entry (including
/// its `dirty` flag) stays untouched, which lets a UI keep showing a
/// stale error until the user actually fixes the field. When the result
/// is written, the previous entry's `dirty` flag is carried forward.
/// An unknown field returns `(state.clone(), true)`.
pub fn validate_if_dirty(
    schema: &Schema,
    state: &ValidationState,
    field: &str,
    data: &FormData,
) -> (ValidationState, bool) {
    match evaluate_field(schema, field, data) {
        Ok(mut entry) if entry.is_valid => {
            entry.dirty = state.get(field).map_or(false, |prev| prev.dirty);
            let mut next = state.clone();
            next.insert(field.to_string(), entry);
            let overall = next.is_valid();
            tracing::debug!(field, overall_valid = overall, "validate_if_dirty: entry replaced");
            (next, overall)
        }
        Ok(_) => {
            tracing::debug!(field, "validate_if_dirty: failing result suppressed");
            let overall = state.is_valid();
            (state.clone(), overall)
        }
        Err(_) => (state.clone(), true),
    }
}

/// Re-evaluate a subset of fields (default: every schema field) and
/// write each result unconditionally, stamped `dirty = true`.
///
/// Unknown names in `fields` are silently skipped — no entry is
/// created for them. Fields outside the subset keep their previous
/// entries. Returns the merged state and its overall validity.
pub fn validate_all(
    schema: &Schema,
    state: &ValidationState,
    data: &FormData,
    fields: Option<&[&str]>,
) -> (ValidationState, bool) {
    let targets: Vec<&str> = match fields {
        Some(names) => names.to_vec(),
        None => schema.field_names().collect(),
    };

    let mut next = state.clone();
    for field in targets {
        if let Ok(mut entry) = evaluate_field(schema, field, data) {
            entry.dirty = true;
            next.insert(field.to_string(), entry);
        }
    }

    let overall = next.is_valid();
    tracing::debug!(overall_valid = overall, "validate_all: subset replaced");
    (next, overall)
}

/// Re-evaluate a subset of fields, writing each result only when it is
/// valid; a field whose re-evaluation fails keeps its previous entry.
///
/// Written entries carry the previous entry's `dirty` flag forward.
/// Unknown names are silently skipped. Overall validity is computed
/// over the merged state, exactly as [`validate_all`] does.
pub fn validate_all_if_dirty(
    schema: &Schema,
    state: &ValidationState,
    data: &FormData,
    fields: Option<&[&str]>,
) -> (ValidationState, bool) {
    let targets: Vec<&str> = match fields {
        Some(names) => names.to_vec(),
        None => schema.field_names().collect(),
    };

    let mut next = state.clone();
    for field in targets {
        if let Ok(mut entry) = evaluate_field(schema, field, data) {
            if entry.is_valid {
                entry.dirty = next.get(field).map_or(false, |prev| prev.dirty);
                next.insert(field.to_string(), entry);
            }
        }
    }

    let overall = next.is_valid();
    tracing::debug!(overall_valid = overall, "validate_all_if_dirty: subset merged");
    (next, overall)
}
