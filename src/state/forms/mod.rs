//! Form domain layer
//!
//! Type-safe field values, the live edit buffer and the controller that
//! validates and commits it.

mod controller;
mod field;
mod form_state;

pub use controller::{FormController, FormPhase, SubmitOutcome};
pub use field::{FieldValue, FormField};
pub use form_state::Form;
