use async_trait::async_trait;

use crate::core::config::{NotificationConfig, TwilioConfig};
use crate::modules::notifications::channel::{
    ensure_success, ChannelKind, DeliveryError, NotificationChannel,
};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

fn messages_url(account_sid: &str) -> String {
    format!("{}/Accounts/{}/Messages.json", TWILIO_API_BASE, account_sid)
}

/// Twilio Programmable Messaging, the carrier-grade fallback of last resort
pub struct TwilioChannel {
    client: reqwest::Client,
    config: Option<TwilioConfig>,
    recipient: Option<String>,
}

impl TwilioChannel {
    pub fn new(client: reqwest::Client, config: &NotificationConfig) -> Self {
        Self {
            client,
            config: config.twilio.clone(),
            recipient: config.recipient_phone.clone(),
        }
    }
}

#[async_trait]
impl NotificationChannel for TwilioChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Twilio
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
            .post(messages_url(&config.account_sid))
            .basic_auth(&config.account_sid, Some(&config.auth_token))
            .form(&[
                ("To", to.as_str()),
                ("From", config.from_number.as_str()),
                ("Body", text),
            ])
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_url() {
        assert_eq!(
            messages_url("AC123"),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );
    }
}
