//! # formdemo-ratatui
//!
//! Ratatui frontend for formdemo.
//!
//! This frontend displays every field of the form at once in the terminal,
//! followed by a Submit button and the read-only output area. Tab and
//! Shift+Tab move the focus, Left/Right cycle the color selector, Enter on
//! the button (or F10/Ctrl+S anywhere) submits, and Esc or Ctrl+C closes
//! the form.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formdemo::FormState;
//! use formdemo_ratatui::RatatuiFormBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let backend = RatatuiFormBackend::new().with_title("Form Demo");
//!     let mut form = FormState::new();
//!     form.run(&backend)?;
//!     println!("{}", form.display());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{RatatuiFormBackend, RatatuiFormError, Theme};
