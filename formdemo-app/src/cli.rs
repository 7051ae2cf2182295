use clap::{Parser, ValueEnum};
use formdemo::{ColorChoice, FormDefinition, FormValues};

/// Which frontend presents the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Frontend {
    /// Native window (egui).
    Egui,
    /// Terminal UI (ratatui).
    Tui,
}

/// Show a small form and print the last submission on exit.
///
/// Logs go to stderr; redirect it when using the terminal frontend.
#[derive(Parser, Debug)]
#[command(name = "formdemo", version)]
pub struct Args {
    /// Frontend used to present the form.
    #[arg(long, value_enum, default_value_t = Frontend::Egui)]
    pub frontend: Frontend,

    /// Window or screen title.
    #[arg(long, default_value = "Form Demo")]
    pub title: String,

    /// Initial value of the name field.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Initial value of the email field.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Initially selected color (none, red, green, blue).
    #[arg(long, default_value_t = ColorChoice::Red)]
    pub color: ColorChoice,

    /// Text of the submit button.
    #[arg(long, default_value = "Submit")]
    pub submit_label: String,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The standard form with the configured submit label.
    pub fn definition(&self) -> FormDefinition {
        FormDefinition::standard().with_submit_label(self.submit_label.as_str())
    }

    /// The values the form starts out with.
    pub fn initial_values(&self) -> FormValues {
        FormValues::new()
            .with_name(self.name.clone())
            .with_email(self.email.clone())
            .with_color(self.color)
    }
}
