//! Contact form forwarding.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/contact/email` | No | Forward via SendGrid |
//! | POST | `/api/contact/text` | No | Forward via the text fallback chain |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::ContactService;
