//! Client reviews with owner moderation.
//!
//! Submissions are stored as pending. Only approved reviews are listed
//! publicly.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/reviews` | No | Submit a review |
//! | GET | `/api/reviews` | No | Approved reviews, newest first |
//! | GET | `/api/admin/reviews` | Admin | All reviews |
//! | POST | `/api/admin/reviews/approve` | Admin | Approve by `reviewId` |
//! | POST | `/api/admin/reviews/reject` | Admin | Back to pending by `reviewId` |
//! | DELETE | `/api/admin/reviews/delete` | Admin | Delete by `reviewId` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{InMemoryReviewRepository, PgReviewRepository, ReviewRepository};
pub use services::ReviewService;
