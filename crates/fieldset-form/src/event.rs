//! # Input-Event Adapters
//!
//! Boundary conversion between host-UI input events and engine calls.
//! An [`InputEvent`] carries a target field name and either a text
//! value or a checkbox state; the adapters merge that value into the
//! caller's data snapshot (`{..data, [name]: value}`) before
//! validating, so the snapshot the rules see already reflects the
//! edit being handled.
//!
//! Blur validates unconditionally (the user has left the field — show
//! the error). Change validates through the write-only-if-valid path
//! (don't flash errors mid-keystroke) and then always invokes the
//! user's own change handler exactly once, after validation, returning
//! its result unchanged.

use fieldset_core::FormData;

use crate::form::Form;

/// What kind of control produced the event, deciding which payload
/// carries the field's new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A text-like control: the payload is [`InputEvent::value`].
    Text,
    /// A checkbox-like control: the payload is [`InputEvent::checked`].
    Checkbox,
}

/// An input event as consumed by the adapters: target name plus the
/// value/checked pair, mirroring `target.name` / `target.value` /
/// `target.checked` of host-UI change and blur events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// The target field's name.
    pub name: String,
    /// Which payload carries the new value.
    pub kind: InputKind,
    /// Text payload; ignored for checkbox events.
    pub value: String,
    /// Checkbox payload; ignored for text events.
    pub checked: bool,
}

impl InputEvent {
    /// An event from a text-like control.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Text,
            value: value.into(),
            checked: false,
        }
    }

    /// An event from a checkbox-like control.
    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Checkbox,
            value: String::new(),
            checked,
        }
    }

    /// The value to merge into the snapshot under [`Self::name`].
    fn merged_value(&self) -> serde_json::Value {
        match self.kind {
            InputKind::Text => serde_json::Value::String(self.value.clone()),
            InputKind::Checkbox => serde_json::Value::Bool(self.checked),
        }
    }
}

/// `{..data, [event.name]: event value}`.
fn merge(data: &FormData, event: &InputEvent) -> FormData {
    let mut merged = data.clone();
    merged.insert(event.name.clone(), event.merged_value());
    merged
}

impl Form {
    /// Blur adapter: merge the event's value into `data` and validate
    /// the named field unconditionally, discarding the boolean result.
    pub fn handle_blur(&mut self, data: &FormData, event: &InputEvent) {
        let merged = merge(data, event);
        let _ = self.validate(&event.name, &merged);
    }

    /// Change adapter: merge the event's value into `data`, run the
    /// write-only-if-valid validation for its side effect, then invoke
    /// `handler` with the event and return its result unchanged.
    ///
    /// The handler runs exactly once, after validation, regardless of
    /// the validation outcome.
    pub fn handle_change<R>(
        &mut self,
        handler: impl FnOnce(&InputEvent) -> R,
        data: &FormData,
        event: &InputEvent,
    ) -> R {
        let merged = merge(data, event);
        let _ = self.validate_if_dirty(&event.name, &merged);
        handler(event)
    }
}
