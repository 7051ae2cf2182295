//! # formdemo
//!
//! A demo form with three editable fields (name, email, color) and a
//! read-only output area. Submitting the form serializes the current values
//! to JSON and shows the result in the output area.
//!
//! The form is an explicit state object driven by events; there is no
//! hidden form library. Frontends only translate user input into events.
//!
//! ## Usage
//!
//! ```rust
//! use formdemo::{ColorChoice, FieldName, FormEvent, FormState};
//!
//! let mut form = FormState::new();
//! form.dispatch(FormEvent::change(FieldName::Name, "mockname")).unwrap();
//! form.dispatch(FormEvent::change(FieldName::Email, "mock@email.com")).unwrap();
//! form.dispatch(FormEvent::color(ColorChoice::Green)).unwrap();
//! form.dispatch(FormEvent::Submit).unwrap();
//!
//! assert_eq!(
//!     form.display().as_str(),
//!     r#"{"email":"mock@email.com","name":"mockname","color":"green"}"#
//! );
//! ```
//!
//! ## Frontends
//!
//! Frontends are separate crates that implement `FormBackend`:
//! - `formdemo-egui` - GUI form via egui
//! - `formdemo-ratatui` - TUI form via ratatui

// Re-export all types from formdemo-types
pub use formdemo_types::*;

// Scripted backend for driving the form without user interaction
mod scripted_backend;
pub use scripted_backend::{ScriptError, ScriptedBackend};
