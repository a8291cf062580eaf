use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::reviews::handlers;
use crate::features::reviews::services::ReviewService;

/// Public review routes
pub fn routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route(
            "/api/reviews",
            post(handlers::submit_review).get(handlers::list_approved_reviews),
        )
        .with_state(service)
}

/// Moderation routes, relative to the `/api/admin` nest
pub fn admin_routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route("/reviews", get(handlers::list_all_reviews))
        .route("/reviews/approve", post(handlers::approve_review))
        .route("/reviews/reject", post(handlers::reject_review))
        .route("/reviews/delete", delete(handlers::delete_review))
        .with_state(service)
}
