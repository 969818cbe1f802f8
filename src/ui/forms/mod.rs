//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `signup_form`: The sign-up form itself

mod field_renderer;
mod signup_form;

pub use signup_form::draw as draw_signup;
