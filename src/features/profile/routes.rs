use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::profile::handlers;
use crate::features::profile::services::ProfileService;

pub fn routes(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/contact-card", get(handlers::get_contact_card))
        .with_state(service)
}
