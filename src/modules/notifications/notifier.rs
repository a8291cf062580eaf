use std::time::Duration;

use crate::core::config::{EmailConfig, NotificationConfig};
use crate::modules::notifications::channel::DeliveryError;
use crate::modules::notifications::dispatcher::{DispatchOutcome, NotificationDispatcher};
use crate::modules::notifications::email::{EmailService, OutboundEmail};

const USER_AGENT: &str = concat!("linkpage-core/", env!("CARGO_PKG_VERSION"));

/// Best-effort delivery of owner notifications.
///
/// Nothing here returns an error. Callers get the outcome for logging or
/// tests and are expected to answer the end user the same way regardless.
pub struct Notifier {
    dispatcher: NotificationDispatcher,
    email: EmailService,
    attempt_timeout: Duration,
}

impl Notifier {
    pub fn new(
        dispatcher: NotificationDispatcher,
        email: EmailService,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            dispatcher,
            email,
            attempt_timeout,
        }
    }

    /// Wire up every channel from configuration, sharing one HTTP client
    pub fn from_config(
        notifications: &NotificationConfig,
        email: &EmailConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(notifications.attempt_timeout)
            .build()?;

        let notifier = Self::new(
            NotificationDispatcher::from_config(notifications, client.clone()),
            EmailService::new(client, email.sendgrid.clone()),
            notifications.attempt_timeout,
        );

        let channels = notifier.dispatcher.configured_channels();
        if channels.is_empty() {
            tracing::warn!("No text notification channels configured");
        } else {
            tracing::info!(
                "Text notification channels (in order): {}",
                channels
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        if !notifier.email.is_configured() {
            tracing::warn!("Email notifications disabled (SENDGRID_API_KEY / NOTIFY_EMAIL_TO unset)");
        }

        Ok(notifier)
    }

    /// A notifier with no channels at all
    pub fn disabled() -> Self {
        Self::new(
            NotificationDispatcher::new(Vec::new(), Duration::from_secs(1)),
            EmailService::new(reqwest::Client::new(), None),
            Duration::from_secs(1),
        )
    }

    pub async fn send_text(&self, text: &str) -> DispatchOutcome {
        self.dispatcher.dispatch(text).await
    }

    /// Returns whether the email was accepted by the provider
    pub async fn send_email(&self, email: &OutboundEmail) -> bool {
        if !self.email.is_configured() {
            tracing::warn!(subject = %email.subject, "Email not sent: email channel not configured");
            return false;
        }

        let result = match tokio::time::timeout(self.attempt_timeout, self.email.send(email)).await
        {
            Ok(result) => result,
            Err(_) => Err(DeliveryError::Timeout(self.attempt_timeout)),
        };

        match result {
            Ok(()) => {
                tracing::info!(subject = %email.subject, "Email notification sent");
                true
            }
            Err(e) => {
                tracing::error!(subject = %email.subject, "Email notification failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_notifier_never_errors() {
        let notifier = Notifier::disabled();

        let outcome = notifier.send_text("hello").await;
        assert!(matches!(outcome, DispatchOutcome::NoChannelConfigured));

        let sent = notifier
            .send_email(&OutboundEmail {
                subject: "s".to_string(),
                body: "b".to_string(),
                reply_to: None,
            })
            .await;
        assert!(!sent);
    }

    #[test]
    fn test_from_config_without_credentials() {
        let notifier =
            Notifier::from_config(&NotificationConfig::default(), &EmailConfig::default())
                .unwrap();
        assert!(notifier.dispatcher.configured_channels().is_empty());
        assert!(!notifier.email.is_configured());
    }
}
