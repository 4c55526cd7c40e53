//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field and error indicator rendering utilities
//! - `contact_form`: The contact form itself

mod contact_form;
mod field_renderer;

pub use contact_form::draw as draw_contact_form;
