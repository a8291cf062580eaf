//! Template engine for notification bodies using Jinja2 syntax.
//!
//! Templates live in `templates/notifications/` and are compiled into the
//! binary, so a deployment cannot end up with a missing template file.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// (name, source) pairs registered at first use
const TEMPLATES: &[(&str, &str)] = &[
    (
        "contact_text.jinja",
        include_str!("../../../templates/notifications/contact_text.jinja"),
    ),
    (
        "contact_email_subject.jinja",
        include_str!("../../../templates/notifications/contact_email_subject.jinja"),
    ),
    (
        "contact_email.jinja",
        include_str!("../../../templates/notifications/contact_email.jinja"),
    ),
    (
        "review_text.jinja",
        include_str!("../../../templates/notifications/review_text.jinja"),
    ),
    (
        "review_email_subject.jinja",
        include_str!("../../../templates/notifications/review_email_subject.jinja"),
    ),
    (
        "review_email.jinja",
        include_str!("../../../templates/notifications/review_email.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    // Bodies go out as plain text and SMS, never HTML
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);
    env.set_trim_blocks(true);

    for &(name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template with the given context.
///
/// # Example
/// ```ignore
/// let body = render_template(
///     "contact_text.jinja",
///     minijinja::context! { name => "Jo", contact => "555-1234", message => "Hi" },
/// )?;
/// ```
pub fn render_template(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map(|s| s.trim().to_string())
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Check if a template exists
#[cfg(test)]
pub fn template_exists(template_name: &str) -> bool {
    get_environment().get_template(template_name).is_ok()
}
