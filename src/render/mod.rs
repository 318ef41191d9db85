//! Hand-off to the rendering collaborator: views serialised as JSON.

pub mod json;

pub use json::{render_dashboard, render_section, render_table};
