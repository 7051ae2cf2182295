//! Simple example showing the demo form in an egui window.
//!
//! Run with: cargo run -p formdemo-egui --example simple

use formdemo::FormState;
use formdemo_egui::EguiBackend;

fn main() -> anyhow::Result<()> {
    let backend = EguiBackend::new()
        .with_title("Form Demo")
        .with_window_size([420.0, 360.0]);

    let mut form = FormState::new();
    form.run(&backend)?;
    println!("Last submission: {}", form.display());
    Ok(())
}
