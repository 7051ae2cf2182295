//! Shows the demo form in the terminal.
//!
//! Run with: cargo run -p formdemo-ratatui --example terminal

use formdemo::FormState;
use formdemo_ratatui::RatatuiFormBackend;

fn main() -> anyhow::Result<()> {
    let backend = RatatuiFormBackend::new().with_title("Form Demo");
    let mut form = FormState::new();
    form.run(&backend)?;
    println!("Last submission: {}", form.display());
    Ok(())
}
