//! Core types for the formdemo crate.
//!
//! This crate provides the presentation-agnostic parts of the demo form:
//! - `FormDefinition`, `Field` and `FieldKind` - The static field registry
//! - `FormValues` and `FieldName` - The current value of every field
//! - `serialize_values` and `DisplayString` - The submission handler and its output
//! - `FormState` and `FormEvent` - Explicit form state driven by events
//! - `FormBackend` trait - For implementing frontends

mod field_name;
pub use field_name::FieldName;

mod color;
pub use color::ColorChoice;

mod form_values;
pub use form_values::FormValues;

mod submission;
pub use submission::{DisplayString, serialize_values};

mod definition;
pub use definition::{Field, FieldKind, FormDefinition, OutputField, SelectOption};

mod event;
pub use event::FormEvent;

mod state;
pub use state::{ChangeObserver, FormState, FormStateBuilder, SubmitHandler};

mod error;
pub use error::FormError;

mod traits;
pub use traits::FormBackend;
