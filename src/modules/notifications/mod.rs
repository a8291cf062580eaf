//! Owner notifications: text channels with fallback, plus SendGrid email.
//!
//! Channels are tried in [`ChannelKind::PRIORITY`] order:
//!
//! | # | Channel | Configured when |
//! |---|---------|-----------------|
//! | 1 | Webhook | `SMS_WEBHOOK_URL` |
//! | 2 | SMS.to | `SMS_TO_API_KEY` + `NOTIFY_PHONE_NUMBER` |
//! | 3 | Vonage | `VONAGE_API_KEY`, `VONAGE_API_SECRET` + `NOTIFY_PHONE_NUMBER` |
//! | 4 | TextBelt | `TEXTBELT_KEY` + `NOTIFY_PHONE_NUMBER` |
//! | 5 | Twilio | `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`, `TWILIO_PHONE_NUMBER` + `NOTIFY_PHONE_NUMBER` |

pub mod channel;
pub mod channels;
pub mod dispatcher;
pub mod email;
pub mod notifier;

pub use channel::{ChannelKind, DeliveryError, NotificationChannel};
pub use dispatcher::{DispatchOutcome, NotificationDispatcher};
pub use email::{EmailService, OutboundEmail};
pub use notifier::Notifier;
