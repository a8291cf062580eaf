use async_trait::async_trait;
use serde::Serialize;

use crate::core::config::{NotificationConfig, SmsToConfig};
use crate::modules::notifications::channel::{
    ensure_success, ChannelKind, DeliveryError, NotificationChannel,
};

const SMS_TO_SEND_URL: &str = "https://api.sms.to/sms/send";

#[derive(Debug, Serialize)]
struct SmsToRequest<'a> {
    to: &'a str,
    message: &'a str,
    sender_id: &'a str,
}

/// SMS.to REST API, bearer-key auth
pub struct SmsToChannel {
    client: reqwest::Client,
    config: Option<SmsToConfig>,
    recipient: Option<String>,
    sender_id: String,
}

impl SmsToChannel {
    pub fn new(client: reqwest::Client, config: &NotificationConfig) -> Self {
        Self {
            client,
            config: config.sms_to.clone(),
            recipient: config.recipient_phone.clone(),
            sender_id: config.sender_id.clone(),
        }
    }
}

#[async_trait]
impl NotificationChannel for SmsToChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::SmsTo
    }

    fn is_configured(&self) -> bool {
        self.config.is_some() && self.recipient.is_some()
    }

    async fn deliver(&self, text: &str) -> Result<(), DeliveryError> {
        let (config, to) = match (&self.config, &self.recipient) {
            (Some(config), Some(to)) => (config, to),
            _ => return Err(DeliveryError::NotConfigured),
        };

        let response = self
            .client
            .post(SMS_TO_SEND_URL)
            .bearer_auth(&config.api_key)
            .json(&SmsToRequest {
                to,
                message: text,
                sender_id: &self.sender_id,
            })
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}
