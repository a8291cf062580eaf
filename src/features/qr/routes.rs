use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::qr::handlers;
use crate::features::qr::services::QrService;

pub fn routes(service: Arc<QrService>) -> Router {
    Router::new()
        .route("/api/generate-qr", post(handlers::generate_qr))
        .with_state(service)
}
