use std::sync::Arc;

use chrono::Utc;
use minijinja::{context, Value};
use validator::Validate;

use crate::core::error::Result;
use crate::features::contact::dtos::ContactMessageDto;
use crate::modules::notifications::{DispatchOutcome, Notifier, OutboundEmail};
use crate::shared::templates::render_template;

/// Forwards contact form messages to the owner. Nothing is stored.
pub struct ContactService {
    notifier: Arc<Notifier>,
}

impl ContactService {
    pub fn new(notifier: Arc<Notifier>) -> Self {
        Self { notifier }
    }

    /// Forward by email. Returns whether the provider accepted it.
    pub async fn send_email(&self, dto: ContactMessageDto) -> Result<bool> {
        dto.validate()?;
        log_received(&dto, "email");

        let ctx = message_context(&dto);
        let rendered = render_template("contact_email_subject.jinja", ctx.clone())
            .and_then(|subject| Ok((subject, render_template("contact_email.jinja", ctx)?)));

        let (subject, body) = match rendered {
            Ok(parts) => parts,
            Err(e) => {
                tracing::error!("Skipping contact email: {}", e);
                return Ok(false);
            }
        };

        let email = OutboundEmail {
            subject,
            body,
            reply_to: dto.email().map(String::from),
        };
        let sent = self.notifier.send_email(&email).await;
        if !sent {
            tracing::warn!(
                name = %dto.name.trim(),
                "Contact email not delivered, message kept in log only"
            );
        }
        Ok(sent)
    }

    /// Forward as a short text through the fallback channels
    pub async fn send_text(&self, dto: ContactMessageDto) -> Result<DispatchOutcome> {
        dto.validate()?;
        log_received(&dto, "text");

        let text = match render_template("contact_text.jinja", message_context(&dto)) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Skipping contact text: {}", e);
                return Ok(DispatchOutcome::NoChannelConfigured);
            }
        };

        let outcome = self.notifier.send_text(&text).await;
        if !outcome.is_delivered() {
            tracing::warn!(
                name = %dto.name.trim(),
                "Contact text not delivered, message kept in log only"
            );
        }
        Ok(outcome)
    }
}

/// The log line is the only record of a message whose delivery fails
fn log_received(dto: &ContactMessageDto, route: &str) {
    tracing::info!(
        route,
        name = %dto.name.trim(),
        email = dto.email().unwrap_or("-"),
        phone = dto.phone().unwrap_or("-"),
        body = %dto.message.trim(),
        "Contact message received"
    );
}

fn message_context(dto: &ContactMessageDto) -> Value {
    let contact = [dto.email(), dto.phone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" / ");

    context! {
        name => dto.name.trim(),
        email => dto.email(),
        phone => dto.phone(),
        contact => contact,
        message => dto.message.trim(),
        received_at => Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::{failing_notifier, CapturedLogs};

    fn service() -> ContactService {
        ContactService::new(Arc::new(Notifier::disabled()))
    }

    fn dto() -> ContactMessageDto {
        ContactMessageDto {
            name: "Sam".to_string(),
            email: Some("sam@example.com".to_string()),
            phone: None,
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_no_channels_is_not_an_error() {
        let service = service();
        assert!(!service.send_email(dto()).await.unwrap());
        assert!(matches!(
            service.send_text(dto()).await.unwrap(),
            DispatchOutcome::NoChannelConfigured
        ));
    }

    #[tokio::test]
    async fn test_undelivered_text_is_kept_in_log() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let outcome = service()
            .send_text(ContactMessageDto {
                email: None,
                phone: Some("555-1234".to_string()),
                message: "Call me about the 14th".to_string(),
                ..dto()
            })
            .await
            .unwrap();
        assert!(!outcome.is_delivered());

        let output = logs.contents();
        assert!(output.contains("Call me about the 14th"));
        assert!(output.contains("555-1234"));
        assert!(output.contains("Sam"));
    }

    #[tokio::test]
    async fn test_undelivered_email_is_kept_in_log() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let sent = service()
            .send_email(ContactMessageDto {
                message: "Booking question for March".to_string(),
                ..dto()
            })
            .await
            .unwrap();
        assert!(!sent);

        let output = logs.contents();
        assert!(output.contains("Booking question for March"));
        assert!(output.contains("sam@example.com"));
    }

    #[tokio::test]
    async fn test_exhausted_channels_are_not_an_error() {
        let service = ContactService::new(Arc::new(failing_notifier()));
        let outcome = service.send_text(dto()).await.unwrap();
        assert!(matches!(outcome, DispatchOutcome::Exhausted { .. }));
    }

    #[tokio::test]
    async fn test_invalid_message_is_rejected() {
        let invalid = ContactMessageDto {
            email: None,
            ..dto()
        };
        assert!(matches!(
            service().send_text(invalid).await,
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_text_lists_every_contact_route() {
        let ctx = message_context(&ContactMessageDto {
            phone: Some("555-1234".to_string()),
            ..dto()
        });
        let text = render_template("contact_text.jinja", ctx).unwrap();
        assert!(text.starts_with("New message from Sam (sam@example.com / 555-1234) at "));
        assert!(text.ends_with(": Hello"));
    }

    #[test]
    fn test_email_body_skips_missing_phone() {
        let body = render_template("contact_email.jinja", message_context(&dto())).unwrap();
        assert!(body.contains("Email: sam@example.com"));
        assert!(!body.contains("Phone:"));
    }
}
