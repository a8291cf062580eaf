use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::shared::validation::{validate_email_format, validate_not_blank};

const MAX_MESSAGE_CHARS: usize = 5000;

/// Contact form submission. At least one of `email` or `phone` must be given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageDto {
    #[serde(default)]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactMessageDto {
    /// Email with surrounding whitespace removed, `None` if blank
    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    pub fn phone(&self) -> Option<&str> {
        non_blank(self.phone.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn with_message(mut error: ValidationError, message: &'static str) -> ValidationError {
    error.message = Some(Cow::Borrowed(message));
    error
}

// The email-or-phone rule spans two fields, which the derive can't express
impl Validate for ContactMessageDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_not_blank(&self.name) {
            errors.add("name", with_message(e, "Name is required"));
        }
        if let Err(e) = validate_not_blank(&self.message) {
            errors.add("message", with_message(e, "Message is required"));
        } else if self.message.chars().count() > MAX_MESSAGE_CHARS {
            errors.add(
                "message",
                ValidationError::new("length")
                    .with_message(Cow::Borrowed("Message must not exceed 5000 characters")),
            );
        }

        match (self.email(), self.phone()) {
            (None, None) => errors.add(
                "email",
                ValidationError::new("required")
                    .with_message(Cow::Borrowed("Provide an email address or a phone number")),
            ),
            (Some(email), _) => {
                if let Err(e) = validate_email_format(email) {
                    errors.add("email", e);
                }
            }
            (None, Some(_)) => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
