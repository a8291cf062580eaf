pub mod sms_to;
pub mod textbelt;
pub mod twilio;
pub mod vonage;
pub mod webhook;

pub use sms_to::SmsToChannel;
pub use textbelt::TextBeltChannel;
pub use twilio::TwilioChannel;
pub use vonage::VonageChannel;
pub use webhook::WebhookChannel;
