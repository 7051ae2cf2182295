use crate::{ColorChoice, FieldName};

/// An option in a select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// The value stored when this option is chosen.
    pub value: String,

    /// The text shown for this option.
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The kind of an editable field, determining how it is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text.
    Text,

    /// Single-line text expected to hold an email address.
    ///
    /// The shape is presentation metadata only; nothing checks it.
    Email,

    /// Exactly one option out of a fixed list.
    Select(Vec<SelectOption>),
}

impl FieldKind {
    /// Check if this kind is edited as text.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text | Self::Email)
    }

    /// The options of a select field.
    pub fn options(&self) -> Option<&[SelectOption]> {
        match self {
            Self::Select(options) => Some(options),
            _ => None,
        }
    }
}

/// A single editable field in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: FieldName,
    kind: FieldKind,
    label: Option<String>,
    placeholder: Option<String>,
    required: bool,
}

impl Field {
    /// Create a field without label, placeholder or required marker.
    pub fn new(name: FieldName, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            label: None,
            placeholder: None,
            required: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn name(&self) -> FieldName {
        self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// The read-only area showing the display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputField {
    /// Whether the area spans the full width of the form.
    pub full_width: bool,
}

impl Default for OutputField {
    fn default() -> Self {
        Self { full_width: true }
    }
}

/// The static layout of the form: editable fields in render order, the
/// submit control and the output area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefinition {
    fields: Vec<Field>,
    submit_label: String,
    output: OutputField,
}

impl FormDefinition {
    /// Create a definition with the given fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            submit_label: "Submit".to_string(),
            output: OutputField::default(),
        }
    }

    /// The demo form: name, email and color, followed by the output area.
    pub fn standard() -> Self {
        let colors = ColorChoice::ALL
            .into_iter()
            .map(|choice| SelectOption::new(choice.as_str(), choice.label()))
            .collect();

        Self::new(vec![
            Field::new(FieldName::Name, FieldKind::Text)
                .with_placeholder("Name")
                .required(),
            Field::new(FieldName::Email, FieldKind::Email)
                .with_label("email:")
                .with_placeholder("Email")
                .required(),
            Field::new(FieldName::Color, FieldKind::Select(colors)),
        ])
    }

    /// Set the text of the submit control.
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up the field bound to the given name.
    pub fn field(&self, name: FieldName) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn output(&self) -> &OutputField {
        &self.output
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FormDefinition {
    fn default() -> Self {
        Self::standard()
    }
}
