use std::time::Duration;

use crate::core::config::NotificationConfig;
use crate::modules::notifications::channel::{ChannelKind, DeliveryError, NotificationChannel};
use crate::modules::notifications::channels::{
    SmsToChannel, TextBeltChannel, TwilioChannel, VonageChannel, WebhookChannel,
};

/// One failed attempt inside a dispatch
#[derive(Debug)]
pub struct ChannelFailure {
    pub channel: ChannelKind,
    pub error: DeliveryError,
}

/// Result of trying the channels for one message
#[derive(Debug)]
pub enum DispatchOutcome {
    /// `attempts` counts every channel tried, including the successful one
    Delivered {
        channel: ChannelKind,
        attempts: usize,
    },
    /// Every configured channel was tried and failed
    Exhausted { failures: Vec<ChannelFailure> },
    NoChannelConfigured,
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered { .. })
    }
}

/// Tries text channels in priority order until one accepts the message.
///
/// Unconfigured channels are skipped. Each configured channel gets exactly one
/// attempt bounded by `attempt_timeout`. Failures are logged and never
/// returned as errors.
pub struct NotificationDispatcher {
    channels: Vec<Box<dyn NotificationChannel>>,
    attempt_timeout: Duration,
}

impl NotificationDispatcher {
    /// `channels` must already be in priority order
    pub fn new(channels: Vec<Box<dyn NotificationChannel>>, attempt_timeout: Duration) -> Self {
        Self {
            channels,
            attempt_timeout,
        }
    }

    /// Build every known channel in [`ChannelKind::PRIORITY`] order
    pub fn from_config(config: &NotificationConfig, client: reqwest::Client) -> Self {
        let channels = ChannelKind::PRIORITY
            .iter()
            .map(|kind| -> Box<dyn NotificationChannel> {
                match kind {
                    ChannelKind::Webhook => Box::new(WebhookChannel::new(client.clone(), config)),
                    ChannelKind::SmsTo => Box::new(SmsToChannel::new(client.clone(), config)),
                    ChannelKind::Vonage => Box::new(VonageChannel::new(client.clone(), config)),
                    ChannelKind::TextBelt => {
                        Box::new(TextBeltChannel::new(client.clone(), config))
                    }
                    ChannelKind::Twilio => Box::new(TwilioChannel::new(client.clone(), config)),
                }
            })
            .collect();

        Self::new(channels, config.attempt_timeout)
    }

    pub fn configured_channels(&self) -> Vec<ChannelKind> {
        self.channels
            .iter()
            .filter(|c| c.is_configured())
            .map(|c| c.kind())
            .collect()
    }

    pub async fn dispatch(&self, text: &str) -> DispatchOutcome {
        let mut failures = Vec::new();
        let mut attempts = 0;

        for channel in self.channels.iter().filter(|c| c.is_configured()) {
            let kind = channel.kind();
            attempts += 1;
            tracing::debug!(channel = %kind, "Attempting notification delivery");

            let result = match tokio::time::timeout(self.attempt_timeout, channel.deliver(text))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(DeliveryError::Timeout(self.attempt_timeout)),
            };

            match result {
                Ok(()) => {
                    tracing::info!(channel = %kind, attempts, "Notification delivered");
                    return DispatchOutcome::Delivered {
                        channel: kind,
                        attempts,
                    };
                }
                Err(error) => {
                    tracing::warn!(channel = %kind, "Notification channel failed: {}", error);
                    failures.push(ChannelFailure {
                        channel: kind,
                        error,
                    });
                }
            }
        }

        if failures.is_empty() {
            tracing::warn!("No notification channel configured, message not delivered");
            DispatchOutcome::NoChannelConfigured
        } else {
            tracing::error!(
                attempts,
                "All notification channels failed, message not delivered"
            );
            DispatchOutcome::Exhausted { failures }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    enum Behaviour {
        Succeed,
        Fail,
        Hang,
    }

    struct MockChannel {
        kind: ChannelKind,
        configured: bool,
        behaviour: Behaviour,
        calls: Arc<AtomicUsize>,
    }

    impl MockChannel {
        fn boxed(
            kind: ChannelKind,
            configured: bool,
            behaviour: Behaviour,
        ) -> (Box<dyn NotificationChannel>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let channel = MockChannel {
                kind,
                configured,
                behaviour,
                calls: Arc::clone(&calls),
            };
            (Box::new(channel), calls)
        }
    }

    #[async_trait]
    impl NotificationChannel for MockChannel {
        fn kind(&self) -> ChannelKind {
            self.kind
        }

        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn deliver(&self, _text: &str) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behaviour {
                Behaviour::Succeed => Ok(()),
                Behaviour::Fail => Err(DeliveryError::Rejected {
                    status: 500,
                    body: "boom".to_string(),
                }),
                Behaviour::Hang => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    Ok(())
                }
            }
        }
    }

    #[tokio::test]
    async fn test_falls_through_to_first_success_and_stops() {
        let (webhook, webhook_calls) =
            MockChannel::boxed(ChannelKind::Webhook, true, Behaviour::Fail);
        let (sms_to, sms_to_calls) =
            MockChannel::boxed(ChannelKind::SmsTo, false, Behaviour::Succeed);
        let (vonage, vonage_calls) =
            MockChannel::boxed(ChannelKind::Vonage, true, Behaviour::Succeed);
        let (twilio, twilio_calls) =
            MockChannel::boxed(ChannelKind::Twilio, true, Behaviour::Succeed);

        let dispatcher = NotificationDispatcher::new(
            vec![webhook, sms_to, vonage, twilio],
            Duration::from_secs(1),
        );

        let outcome = dispatcher.dispatch("hello").await;

        assert!(outcome.is_delivered());
        assert!(matches!(
            outcome,
            DispatchOutcome::Delivered {
                channel: ChannelKind::Vonage,
                attempts: 2
            }
        ));
        assert_eq!(webhook_calls.load(Ordering::SeqCst), 1);
        assert_eq!(sms_to_calls.load(Ordering::SeqCst), 0);
        assert_eq!(vonage_calls.load(Ordering::SeqCst), 1);
        assert_eq!(twilio_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_configured_channels() {
        let (webhook, calls) = MockChannel::boxed(ChannelKind::Webhook, false, Behaviour::Succeed);
        let dispatcher = NotificationDispatcher::new(vec![webhook], Duration::from_secs(1));

        let outcome = dispatcher.dispatch("hello").await;

        assert!(matches!(outcome, DispatchOutcome::NoChannelConfigured));
        assert!(!outcome.is_delivered());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_dispatcher() {
        let dispatcher = NotificationDispatcher::new(Vec::new(), Duration::from_secs(1));
        assert!(matches!(
            dispatcher.dispatch("hello").await,
            DispatchOutcome::NoChannelConfigured
        ));
    }

    #[tokio::test]
    async fn test_all_failures_are_collected() {
        let (webhook, _) = MockChannel::boxed(ChannelKind::Webhook, true, Behaviour::Fail);
        let (twilio, _) = MockChannel::boxed(ChannelKind::Twilio, true, Behaviour::Fail);
        let dispatcher = NotificationDispatcher::new(vec![webhook, twilio], Duration::from_secs(1));

        match dispatcher.dispatch("hello").await {
            DispatchOutcome::Exhausted { failures } => {
                let channels: Vec<_> = failures.iter().map(|f| f.channel).collect();
                assert_eq!(channels, vec![ChannelKind::Webhook, ChannelKind::Twilio]);
            }
            other => panic!("expected exhausted, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_counts_as_failure_and_moves_on() {
        let (webhook, _) = MockChannel::boxed(ChannelKind::Webhook, true, Behaviour::Hang);
        let (textbelt, textbelt_calls) =
            MockChannel::boxed(ChannelKind::TextBelt, true, Behaviour::Succeed);
        let dispatcher =
            NotificationDispatcher::new(vec![webhook, textbelt], Duration::from_secs(5));

        let outcome = dispatcher.dispatch("hello").await;

        assert!(matches!(
            outcome,
            DispatchOutcome::Delivered {
                channel: ChannelKind::TextBelt,
                attempts: 2
            }
        ));
        assert_eq!(textbelt_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_from_config_respects_credentials() {
        let config = NotificationConfig {
            recipient_phone: Some("+15550100".to_string()),
            webhook: Some(crate::core::config::WebhookConfig {
                url: "https://example.com/hook".to_string(),
            }),
            twilio: Some(crate::core::config::TwilioConfig {
                account_sid: "AC1".to_string(),
                auth_token: "token".to_string(),
                from_number: "+15550199".to_string(),
            }),
            ..Default::default()
        };
        let dispatcher = NotificationDispatcher::from_config(&config, reqwest::Client::new());
        assert_eq!(
            dispatcher.configured_channels(),
            vec![ChannelKind::Webhook, ChannelKind::Twilio]
        );
    }
}
