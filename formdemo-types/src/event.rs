use crate::{ColorChoice, FieldName};

/// A user interaction the form state reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field received a new value.
    Change { field: FieldName, value: String },

    /// The submit control was triggered.
    Submit,
}

impl FormEvent {
    /// Create a change event.
    pub fn change(field: FieldName, value: impl Into<String>) -> Self {
        Self::Change {
            field,
            value: value.into(),
        }
    }

    /// Create a change event for the color selector.
    pub fn color(choice: ColorChoice) -> Self {
        Self::change(FieldName::Color, choice.as_str())
    }
}
