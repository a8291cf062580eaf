use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::{NotificationConfig, VonageConfig};
use crate::modules::notifications::channel::{
    ensure_success, ChannelKind, DeliveryError, NotificationChannel,
};

const VONAGE_SMS_URL: &str = "https://rest.nexmo.com/sms/json";

/// Vonage answers 200 even when a message is refused; the real verdict is
/// the per-message `status`, where "0" means accepted.
#[derive(Debug, Deserialize)]
struct VonageResponse {
    #[serde(default)]
    messages: Vec<VonageMessageStatus>,
}

#[derive(Debug, Deserialize)]
struct VonageMessageStatus {
    status: String,
    #[serde(rename = "error-text")]
    error_text: Option<String>,
}

fn check_response(response: &VonageResponse) -> Result<(), DeliveryError> {
    match response.messages.first() {
        Some(message) if message.status == "0" => Ok(()),
        Some(message) => Err(DeliveryError::Provider(format!(
            "status {}: {}",
            message.status,
            message.error_text.as_deref().unwrap_or("no error text")
        ))),
        None => Err(DeliveryError::Provider(
            "response contained no messages".to_string(),
        )),
    }
}

/// Vonage (Nexmo) SMS API, form-encoded with key/secret in the body
pub struct VonageChannel {
    client: reqwest::Client,
    config: Option<VonageConfig>,
    recipient: Option<String>,
    sender_id: String,
}

impl VonageChannel {
    pub fn new(client: reqwest::Client, config: &NotificationConfig) -> Self {
        Self {
            client,
            config: config.vonage.clone(),
            recipient: config.recipient_phone.clone(),
            sender_id: config.sender_id.clone(),
        }
    }
}

#[async_trait]
impl NotificationChannel for VonageChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Vonage
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
            .post(VONAGE_SMS_URL)
            .form(&[
                ("api_key", config.api_key.as_str()),
                ("api_secret", config.api_secret.as_str()),
                ("to", to.as_str()),
                ("from", self.sender_id.as_str()),
                ("text", text),
            ])
            .send()
            .await?;

        let body: VonageResponse = ensure_success(response).await?.json().await?;
        check_response(&body)
    }
}
