//! # formdemo-egui
//!
//! An egui frontend for formdemo that renders the form in a native window.
//!
//! All fields are shown at once. Every edit is sent to the form state as a
//! change event; the Submit button sends a submit event, and the output area
//! below it shows the resulting display string.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formdemo::FormState;
//! use formdemo_egui::EguiBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let backend = EguiBackend::new()
//!         .with_title("Form Demo")
//!         .with_window_size([400.0, 300.0]);
//!
//!     let mut form = FormState::new();
//!     form.run(&backend)?;
//!     println!("{}", form.display());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{EguiBackend, EguiError, FormView};
