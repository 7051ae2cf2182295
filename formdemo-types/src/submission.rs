//! The submission handler and the string it produces.

use std::fmt;

use serde_json::{Map, Value};

use crate::FormValues;

/// The text shown in the read-only output area.
///
/// Starts out empty and is replaced wholesale on every submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DisplayString(String);

impl DisplayString {
    /// The empty display shown before the first submission.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for DisplayString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DisplayString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for DisplayString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialize the values into a compact JSON object.
///
/// Keys follow `FormValues::iter` order (`email`, `name`, `color`). The map
/// keeps insertion order (`preserve_order`), and rendering a `Value` cannot
/// fail, so neither can this.
pub fn serialize_values(values: &FormValues) -> DisplayString {
    let object: Map<String, Value> = values
        .iter()
        .map(|(field, value)| (field.as_str().to_string(), Value::from(value)))
        .collect();
    DisplayString(Value::Object(object).to_string())
}
