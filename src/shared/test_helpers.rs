use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use base64::{prelude::BASE64_STANDARD, Engine};

use crate::core::app::{build_router, AppServices};
use crate::features::contact::ContactService;
use crate::features::profile::models::Profile;
use crate::features::profile::ProfileService;
use crate::features::qr::QrService;
use crate::features::reviews::{InMemoryReviewRepository, ReviewService};
use crate::modules::notifications::{
    ChannelKind, DeliveryError, EmailService, NotificationChannel, NotificationDispatcher,
    Notifier,
};

/// Services backed by the in-process store, with no notification channels
pub fn test_services() -> AppServices {
    services_with_notifier(Arc::new(Notifier::disabled()))
}

pub fn services_with_notifier(notifier: Arc<Notifier>) -> AppServices {
    AppServices {
        reviews: Arc::new(ReviewService::new(
            Arc::new(InMemoryReviewRepository::new()),
            Arc::clone(&notifier),
        )),
        contact: Arc::new(ContactService::new(notifier)),
        profile: Arc::new(ProfileService::new(Profile::default(), None)),
        qr: Arc::new(QrService::new()),
    }
}

pub fn test_server(admin_credentials: Option<&str>) -> TestServer {
    let router = build_router(test_services(), admin_credentials.map(String::from));
    TestServer::new(router).unwrap()
}

/// A configured text channel whose provider rejects every message
pub struct FailingChannel;

#[async_trait]
impl NotificationChannel for FailingChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Webhook
    }

    fn is_configured(&self) -> bool {
        true
    }

    async fn deliver(&self, _text: &str) -> Result<(), DeliveryError> {
        Err(DeliveryError::Provider("rejected".to_string()))
    }
}

/// A notifier whose only text channel always fails, so dispatch ends `Exhausted`
pub fn failing_notifier() -> Notifier {
    Notifier::new(
        NotificationDispatcher::new(vec![Box::new(FailingChannel)], Duration::from_secs(1)),
        EmailService::new(reqwest::Client::new(), None),
        Duration::from_secs(1),
    )
}

/// In-memory sink for `tracing` output.
///
/// Install with `tracing::subscriber::set_default(logs.subscriber())` inside a
/// current-thread test.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        let logs = self.clone();
        tracing_subscriber::fmt()
            .with_writer(move || logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// `Authorization` header value for the given credentials
pub fn basic_auth_header(credentials: &str) -> String {
    format!("Basic {}", BASE64_STANDARD.encode(credentials))
}

/// A submission that passes validation
pub fn valid_review_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": "client@example.com",
        "appearance": 5,
        "punctuality": 4,
        "communication": 5,
        "professionalism": 5,
        "chemistry": 4,
        "discretion": 5,
        "wouldBookAgain": true,
        "bookingProcessSmooth": true,
        "matchedDescription": true,
        "serviceTypes": ["Dinner date"],
        "additionalComments": "Wonderful company"
    })
}
