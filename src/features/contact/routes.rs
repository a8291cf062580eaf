use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::contact::handlers;
use crate::features::contact::services::ContactService;

pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact/email", post(handlers::send_contact_email))
        .route("/api/contact/text", post(handlers::send_contact_text))
        .with_state(service)
}
