use crate::FormState;

/// Trait for frontends that present a form to the user.
///
/// A frontend renders `form.definition()`, turns user input into
/// `FormEvent`s for `form.dispatch`, and shows `form.display()` in the
/// output area. It returns once the user closes the form.
pub trait FormBackend {
    /// The error type for this frontend.
    type Error: Into<anyhow::Error>;

    /// Present the form until it is closed.
    ///
    /// # Returns
    /// * `Ok(())` when the user closed the form normally
    /// * `Err` on a frontend failure (window, terminal I/O)
    fn run(&self, form: &mut FormState) -> Result<(), Self::Error>;
}
