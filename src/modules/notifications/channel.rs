use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Every text channel the dispatcher knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Webhook,
    SmsTo,
    Vonage,
    TextBelt,
    Twilio,
}

impl ChannelKind {
    /// Order in which channels are tried: free webhook first, carrier SMS last
    pub const PRIORITY: [ChannelKind; 5] = [
        ChannelKind::Webhook,
        ChannelKind::SmsTo,
        ChannelKind::Vonage,
        ChannelKind::TextBelt,
        ChannelKind::Twilio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Webhook => "webhook",
            ChannelKind::SmsTo => "sms.to",
            ChannelKind::Vonage => "vonage",
            ChannelKind::TextBelt => "textbelt",
            ChannelKind::Twilio => "twilio",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single delivery attempt failed. Never leaves the notifications module
/// except in logs.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("channel is not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("provider reported failure: {0}")]
    Provider(String),

    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// A single external integration able to deliver a short text to the page owner
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn kind(&self) -> ChannelKind;

    /// Whether the credentials this channel needs are present
    fn is_configured(&self) -> bool;

    /// One delivery attempt, no retries
    async fn deliver(&self, text: &str) -> Result<(), DeliveryError>;
}

/// Turn a non-2xx response into [`DeliveryError::Rejected`], keeping the body for the logs
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, DeliveryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(DeliveryError::Rejected {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_starts_with_webhook_and_ends_with_carrier() {
        assert_eq!(ChannelKind::PRIORITY.first(), Some(&ChannelKind::Webhook));
        assert_eq!(ChannelKind::PRIORITY.last(), Some(&ChannelKind::Twilio));
    }

    #[test]
    fn test_delivery_error_messages() {
        let err = DeliveryError::Rejected {
            status: 401,
            body: "bad key".to_string(),
        };
        assert_eq!(err.to_string(), "provider returned HTTP 401: bad key");
        assert_eq!(
            DeliveryError::Timeout(Duration::from_secs(8)).to_string(),
            "no response within 8s"
        );
    }
}
