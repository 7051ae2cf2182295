use serde::{Deserialize, Serialize};

use crate::{ColorChoice, FieldName, FormError};

/// The current value of every editable field.
///
/// All three keys are always present. Struct field order is the declared
/// order (`email`, `name`, `color`), which is also the iteration and
/// serialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    email: String,
    name: String,
    color: ColorChoice,
}

impl FormValues {
    /// Create the initial values: empty name and email, color `red`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the initial email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the initial color.
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn color(&self) -> ColorChoice {
        self.color
    }

    /// Get the value of a field as a string.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Color => self.color.as_str(),
        }
    }

    /// Replace the value of a field.
    ///
    /// Text fields accept any string. The color field accepts only the
    /// values of its options; anything else leaves the values untouched.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Color => self.color = value.parse()?,
        }
        Ok(())
    }

    /// Set the color directly.
    pub fn set_color(&mut self, color: ColorChoice) {
        self.color = color;
    }

    /// Iterate over `(field, value)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::DECLARED
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Number of fields. Always 3.
    pub fn len(&self) -> usize {
        FieldName::DECLARED.len()
    }

    /// Always false: every field has a value.
    pub fn is_empty(&self) -> bool {
        false
    }
}
