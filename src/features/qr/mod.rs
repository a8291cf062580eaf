//! QR code images for sharing the page.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/generate-qr` | No | PNG QR code for `{url}` |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QrService;
