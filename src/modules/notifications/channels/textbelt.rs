use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::config::{NotificationConfig, TextBeltConfig};
use crate::modules::notifications::channel::{ChannelKind, DeliveryError, NotificationChannel};

const TEXTBELT_URL: &str = "https://textbelt.com/text";

#[derive(Debug, Serialize)]
struct TextBeltRequest<'a> {
    phone: &'a str,
    message: &'a str,
    key: &'a str,
}

#[derive(Debug, Deserialize)]
struct TextBeltResponse {
    #[serde(default)]
    success: bool,
    error: Option<String>,
}

fn check_response(response: &TextBeltResponse) -> Result<(), DeliveryError> {
    if response.success {
        Ok(())
    } else {
        Err(DeliveryError::Provider(
            response
                .error
                .clone()
                .unwrap_or_else(|| "unknown TextBelt error".to_string()),
        ))
    }
}

/// TextBelt. Reports failures in the body, often with a 200 status, so the
/// body is read whatever the status code.
pub struct TextBeltChannel {
    client: reqwest::Client,
    config: Option<TextBeltConfig>,
    recipient: Option<String>,
}

impl TextBeltChannel {
    pub fn new(client: reqwest::Client, config: &NotificationConfig) -> Self {
        Self {
            client,
            config: config.textbelt.clone(),
            recipient: config.recipient_phone.clone(),
        }
    }
}

#[async_trait]
impl NotificationChannel for TextBeltChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::TextBelt
    }

    fn is_configured(&self) -> bool {
        self.config.is_some() && self.recipient.is_some()
    }

    async fn deliver(&self, text: &str) -> Result<(), DeliveryError> {
        let (config, phone) = match (&self.config, &self.recipient) {
            (Some(config), Some(phone)) => (config, phone),
            _ => return Err(DeliveryError::NotConfigured),
        };

        let body: TextBeltResponse = self
            .client
            .post(TEXTBELT_URL)
            .json(&TextBeltRequest {
                phone,
                message: text,
                key: &config.key,
            })
            .send()
            .await?
            .json()
            .await?;

        check_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flag() {
        let ok: TextBeltResponse =
            serde_json::from_str(r#"{"success": true, "textId": "1", "quotaRemaining": 9}"#)
                .unwrap();
        assert!(check_response(&ok).is_ok());

        let quota: TextBeltResponse =
            serde_json::from_str(r#"{"success": false, "error": "Out of quota"}"#).unwrap();
        let err = check_response(&quota).unwrap_err();
        assert_eq!(err.to_string(), "provider reported failure: Out of quota");
    }

    #[test]
    fn test_missing_flag_is_failure() {
        let body: TextBeltResponse = serde_json::from_str("{}").unwrap();
        assert!(check_response(&body).is_err());
    }
}
