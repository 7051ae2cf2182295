/// Error type for form operations.
///
/// Submission never fails; only edits that cannot be represented in
/// `FormValues` are rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A field was addressed by a name the form does not declare.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The color selector received a value outside its option list.
    #[error("Unknown color '{0}', expected one of: none, red, green, blue")]
    UnknownColor(String),
}
