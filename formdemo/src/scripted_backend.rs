//! Scripted backend for running the form without user interaction.
//!
//! `ScriptedBackend` replays a fixed list of events against a form, the
//! way a user would produce them by typing and clicking. This is useful for
//! testing the form end to end without a window or a terminal.
//!
//! # Example
//!
//! ```rust
//! use formdemo::{ColorChoice, FormState, ScriptedBackend};
//!
//! let mut form = FormState::new();
//! form.run(
//!     &ScriptedBackend::new()
//!         .type_into("name", "Alice")
//!         .select("color", ColorChoice::Blue.as_str())
//!         .submit(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     form.display().as_str(),
//!     r#"{"email":"","name":"Alice","color":"blue"}"#
//! );
//! ```

use crate::{FieldName, FormBackend, FormError, FormEvent, FormState};

/// A single recorded step, with the field still addressed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Change { field: String, value: String },
    Submit,
}

/// A backend that replays pre-recorded interactions.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    steps: Vec<Step>,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Step {step} was rejected: {source}")]
    Rejected {
        step: usize,
        #[source]
        source: FormError,
    },
}

impl ScriptedBackend {
    /// Create an empty script.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Replace the value of a text field, addressed by its name.
    pub fn type_into(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.steps.push(Step::Change {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Choose an option of a select field, addressed by its name.
    pub fn select(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.type_into(field, value)
    }

    /// Press the submit control.
    pub fn submit(mut self) -> Self {
        self.steps.push(Step::Submit);
        self
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FormBackend for ScriptedBackend {
    type Error = ScriptError;

    fn run(&self, form: &mut FormState) -> Result<(), Self::Error> {
        for (step, recorded) in self.steps.iter().enumerate() {
            let event = match recorded {
                Step::Change { field, value } => field
                    .parse::<FieldName>()
                    .map(|field| FormEvent::change(field, value.clone())),
                Step::Submit => Ok(FormEvent::Submit),
            };

            event
                .and_then(|event| form.dispatch(event))
                .map_err(|source| ScriptError::Rejected { step, source })?;
        }

        tracing::debug!(steps = self.steps.len(), "script finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_leaves_form_untouched() {
        let mut form = FormState::new();
        ScriptedBackend::new().run(&mut form).unwrap();
        assert!(form.display().is_empty());
        assert_eq!(form.submissions(), 0);
    }

    #[test]
    fn unknown_field_reports_step() {
        let mut form = FormState::new();
        let script = ScriptedBackend::new()
            .type_into("name", "ok")
            .type_into("age", "42")
            .submit();
        assert_eq!(script.len(), 3);

        let err = script.run(&mut form).unwrap_err();
        assert_eq!(err.to_string(), "Step 1 was rejected: Unknown field: age");
        assert_eq!(form.values().name(), "ok");
        assert_eq!(form.submissions(), 0);
    }

    #[test]
    fn unknown_color_is_rejected() {
        let mut form = FormState::new();
        let err = ScriptedBackend::new()
            .select("color", "purple")
            .run(&mut form)
            .unwrap_err();
        assert!(matches!(
            err,
            ScriptError::Rejected {
                step: 0,
                source: FormError::UnknownColor(_)
            }
        ));
    }
}
