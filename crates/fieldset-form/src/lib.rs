//! # fieldset-form — Form Sessions & Event Adapters
//!
//! The stateful layer over `fieldset-core`: a [`Form`] owns exactly one
//! `ValidationState` for its lifetime, exposes the reducer operations
//! as methods that replace that state, and re-exposes the aggregate
//! queries. The host UI layer reads the state after each call and
//! re-renders however it likes — this crate schedules nothing.
//!
//! [`InputEvent`] is the boundary type for input events: the adapters
//! on [`Form`] merge the event's name/value into the caller's data
//! snapshot and run the matching engine operation, so event-shape
//! knowledge never leaks into the core.

pub mod event;
pub mod form;

// Re-export primary types.
pub use event::{InputEvent, InputKind};
pub use form::Form;

pub use fieldset_core::{FieldState, FormData, Rule, Schema, ValidationState};
