//! Notification message templates.
//!
//! Each notification type has a fixed template. Features build a context
//! with `minijinja::context!` and call [`render_template`].

pub mod engine;

pub use engine::{render_template, TemplateError};
