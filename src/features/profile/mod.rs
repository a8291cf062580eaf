//! Profile data and the downloadable contact card.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/profile` | No | Profile JSON |
//! | GET | `/api/contact-card` | No | vCard attachment |

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod vcard;

pub use services::ProfileService;
