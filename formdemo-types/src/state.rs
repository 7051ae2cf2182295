use std::fmt;

use crate::{
    ColorChoice, DisplayString, FieldName, FormBackend, FormDefinition, FormError, FormEvent,
    FormValues, serialize_values,
};

/// Function turning the submitted values into the display string.
pub type SubmitHandler = Box<dyn Fn(&FormValues) -> DisplayString>;

/// Callback notified after a field's value changed.
pub type ChangeObserver = Box<dyn FnMut(FieldName, &FormValues)>;

/// The explicit state of a form: its layout, current values and the
/// display string derived from the last submission.
///
/// Frontends never write values directly; they translate user input into
/// `FormEvent`s and pass them to `dispatch`.
pub struct FormState {
    definition: FormDefinition,
    values: FormValues,
    display: DisplayString,
    submissions: usize,
    on_submit: SubmitHandler,
    on_change: Option<ChangeObserver>,
}

impl FormState {
    /// Create the standard form with default values and the JSON handler.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> FormStateBuilder {
        FormStateBuilder::default()
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn display(&self) -> &DisplayString {
        &self.display
    }

    /// How many times the form has been submitted.
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    /// Apply a single event.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<(), FormError> {
        match event {
            FormEvent::Change { field, value } => self.change(field, value),
            FormEvent::Submit => {
                self.submit();
                Ok(())
            }
        }
    }

    /// Give a field a new value.
    pub fn change(&mut self, field: FieldName, value: impl Into<String>) -> Result<(), FormError> {
        self.values.set(field, value)?;
        tracing::debug!(field = %field, value = self.values.get(field), "field changed");
        self.notify_change(field);
        Ok(())
    }

    /// Choose an option of the color selector.
    pub fn select_color(&mut self, choice: ColorChoice) {
        self.values.set_color(choice);
        tracing::debug!(field = %FieldName::Color, value = choice.as_str(), "field changed");
        self.notify_change(FieldName::Color);
    }

    /// Run the submission handler on the current values and replace the
    /// display string with its output.
    pub fn submit(&mut self) -> &DisplayString {
        self.display = (self.on_submit)(&self.values);
        self.submissions += 1;
        tracing::info!(
            submissions = self.submissions,
            display = self.display.as_str(),
            "form submitted"
        );
        &self.display
    }

    /// Hand the form to a frontend until the user closes it.
    pub fn run<B: FormBackend>(&mut self, backend: &B) -> anyhow::Result<()> {
        backend.run(self).map_err(Into::into)
    }

    fn notify_change(&mut self, field: FieldName) {
        if let Some(observer) = self.on_change.as_mut() {
            observer(field, &self.values);
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("definition", &self.definition)
            .field("values", &self.values)
            .field("display", &self.display)
            .field("submissions", &self.submissions)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for `FormState`. Handlers are registered here, once, before
/// any event is dispatched.
pub struct FormStateBuilder {
    definition: FormDefinition,
    values: FormValues,
    on_submit: SubmitHandler,
    on_change: Option<ChangeObserver>,
}

impl Default for FormStateBuilder {
    fn default() -> Self {
        Self {
            definition: FormDefinition::standard(),
            values: FormValues::new(),
            on_submit: Box::new(serialize_values),
            on_change: None,
        }
    }
}

impl FormStateBuilder {
    /// Use a different layout.
    pub fn definition(mut self, definition: FormDefinition) -> Self {
        self.definition = definition;
        self
    }

    /// Start from the given values instead of the defaults.
    pub fn values(mut self, values: FormValues) -> Self {
        self.values = values;
        self
    }

    /// Replace the submission handler.
    pub fn on_submit(mut self, handler: impl Fn(&FormValues) -> DisplayString + 'static) -> Self {
        self.on_submit = Box::new(handler);
        self
    }

    /// Observe every accepted field change.
    pub fn on_change(mut self, observer: impl FnMut(FieldName, &FormValues) + 'static) -> Self {
        self.on_change = Some(Box::new(observer));
        self
    }

    pub fn build(self) -> FormState {
        FormState {
            definition: self.definition,
            values: self.values,
            display: DisplayString::empty(),
            submissions: 0,
            on_submit: self.on_submit,
            on_change: self.on_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn starts_with_defaults_and_empty_display() {
        let state = FormState::new();
        assert_eq!(state.values(), &FormValues::new());
        assert!(state.display().is_empty());
        assert_eq!(state.submissions(), 0);
    }

    #[test]
    fn change_events_update_values_only() {
        let mut state = FormState::new();
        state
            .dispatch(FormEvent::change(FieldName::Name, "mockname"))
            .unwrap();
        state.dispatch(FormEvent::color(ColorChoice::Blue)).unwrap();

        assert_eq!(state.values().name(), "mockname");
        assert_eq!(state.values().color(), ColorChoice::Blue);
        assert!(state.display().is_empty());
    }

    #[test]
    fn submit_replaces_display() {
        let mut state = FormState::new();
        state.change(FieldName::Name, "first").unwrap();
        state.submit();
        assert_eq!(
            state.display().as_str(),
            r#"{"email":"","name":"first","color":"red"}"#
        );

        state.change(FieldName::Name, "second").unwrap();
        assert_eq!(
            state.display().as_str(),
            r#"{"email":"","name":"first","color":"red"}"#
        );

        state.dispatch(FormEvent::Submit).unwrap();
        assert_eq!(
            state.display().as_str(),
            r#"{"email":"","name":"second","color":"red"}"#
        );
        assert_eq!(state.submissions(), 2);
    }

    #[test]
    fn repeated_submit_is_stable() {
        let mut state = FormState::new();
        state.change(FieldName::Email, "a@b.c").unwrap();
        let first = state.submit().clone();
        let second = state.submit().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn rejected_change_is_not_observed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut state = FormState::builder()
            .on_change(move |field, _| sink.borrow_mut().push(field))
            .build();

        assert!(state.change(FieldName::Color, "purple").is_err());
        state.change(FieldName::Email, "x@y").unwrap();
        state.select_color(ColorChoice::None);

        assert_eq!(*seen.borrow(), [FieldName::Email, FieldName::Color]);
        assert_eq!(state.values().color(), ColorChoice::None);
    }

    #[test]
    fn custom_submit_handler() {
        let mut state = FormState::builder()
            .values(FormValues::new().with_name("Ada"))
            .on_submit(|values| DisplayString::from(format!("hello {}", values.name())))
            .build();
        assert_eq!(state.submit().as_str(), "hello Ada");
    }

    #[test]
    fn debug_omits_handlers() {
        let state = FormState::new();
        let debug = format!("{state:?}");
        assert!(debug.contains("FormState"));
        assert!(debug.contains("submissions: 0"));
    }
}
