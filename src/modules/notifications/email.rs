use serde::Serialize;

use crate::core::config::SendGridConfig;
use crate::modules::notifications::channel::{ensure_success, DeliveryError};

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Plain-text email to the page owner
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub subject: String,
    pub body: String,
    /// Address of whoever filled in the form, so the owner can reply directly
    pub reply_to: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendGridAddress<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct SendGridPersonalization<'a> {
    to: Vec<SendGridAddress<'a>>,
}

#[derive(Debug, Serialize)]
struct SendGridContent<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct SendGridMail<'a> {
    personalizations: Vec<SendGridPersonalization<'a>>,
    from: SendGridAddress<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<SendGridAddress<'a>>,
    subject: &'a str,
    content: Vec<SendGridContent<'a>>,
}

impl<'a> SendGridMail<'a> {
    fn new(config: &'a SendGridConfig, email: &'a OutboundEmail) -> Self {
        Self {
            personalizations: vec![SendGridPersonalization {
                to: vec![SendGridAddress { email: &config.to }],
            }],
            from: SendGridAddress {
                email: &config.from,
            },
            reply_to: email
                .reply_to
                .as_deref()
                .map(|address| SendGridAddress { email: address }),
            subject: &email.subject,
            content: vec![SendGridContent {
                content_type: "text/plain",
                value: &email.body,
            }],
        }
    }
}

/// Transactional email through SendGrid's v3 API. A single channel with no
/// fallback.
pub struct EmailService {
    client: reqwest::Client,
    config: Option<SendGridConfig>,
}

impl EmailService {
    pub fn new(client: reqwest::Client, config: Option<SendGridConfig>) -> Self {
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    pub async fn send(&self, email: &OutboundEmail) -> Result<(), DeliveryError> {
        let config = self.config.as_ref().ok_or(DeliveryError::NotConfigured)?;

        let response = self
            .client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&config.api_key)
            .json(&SendGridMail::new(config, email))
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}
