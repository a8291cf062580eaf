use async_trait::async_trait;
use serde::Serialize;

use crate::core::config::{NotificationConfig, WebhookConfig};
use crate::modules::notifications::channel::{
    ensure_success, ChannelKind, DeliveryError, NotificationChannel,
};

/// Body posted to the webhook.
///
/// `value1` duplicates `message` so IFTTT Maker applets, which only read
/// `value1..value3`, pick up the text too.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    message: &'a str,
    value1: &'a str,
}

/// Plain JSON POST to a user-supplied URL. Free, so it goes first.
pub struct WebhookChannel {
    client: reqwest::Client,
    config: Option<WebhookConfig>,
}

impl WebhookChannel {
    pub fn new(client: reqwest::Client, config: &NotificationConfig) -> Self {
        Self {
            client,
            config: config.webhook.clone(),
        }
    }
}

#[async_trait]
impl NotificationChannel for WebhookChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Webhook
    }

    fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    async fn deliver(&self, text: &str) -> Result<(), DeliveryError> {
        let config = self.config.as_ref().ok_or(DeliveryError::NotConfigured)?;

        let response = self
            .client
            .post(&config.url)
            .json(&WebhookPayload {
                message: text,
                value1: text,
            })
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}
