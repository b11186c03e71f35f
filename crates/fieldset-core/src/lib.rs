//! # fieldset-core — Declarative Field Validation
//!
//! The pure engine behind `fieldset`: a [`Schema`] maps field names to
//! ordered lists of [`Rule`]s (predicate + error message), and the engine
//! computes a per-field [`ValidationState`] over an arbitrary data
//! snapshot ([`FormData`]).
//!
//! ## Model
//!
//! ```text
//! evaluate(schema, field, data)          → FieldState
//! reduce(schema, state, data)            → (ValidationState, overall_valid)
//! ```
//!
//! Every operation here is a pure function: it receives the schema, the
//! previous state, and a data snapshot, and returns a brand-new state.
//! The engine holds no state of its own — ownership of the
//! `ValidationState` value belongs to the caller (see `fieldset-form`
//! for the session layer that owns one state per form instance).
//!
//! ## Predicates
//!
//! Rule predicates receive the *entire* data snapshot, not just the
//! field's own value, so cross-field rules ("must equal X when Y is
//! set") are expressible. Predicates must be total over the snapshot
//! shape: the engine does not catch panics in rule code.
//!
//! ## Unknown fields
//!
//! A field with no rules is trivially valid. Lookups against fields
//! absent from the schema are signalled internally via [`UnknownField`]
//! and mapped to documented fallbacks (`true` / `""` / empty) at every
//! public operation — never an error, never a panic.

pub mod evaluate;
pub mod rules;
pub mod schema;
pub mod state;

// Re-export primary types for ergonomic imports.
pub use evaluate::{
    evaluate_field, validate, validate_all, validate_all_if_dirty, validate_if_dirty, UnknownField,
};
pub use schema::{FormData, Rule, Schema};
pub use state::{FieldState, ValidationState};
