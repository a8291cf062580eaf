use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::features::profile::models::Profile;
use crate::features::profile::services::ProfileService;
use crate::shared::constants::CONTACT_CARD_FILENAME;

/// Get the page profile
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Profile", body = Profile)
    ),
    tag = "profile"
)]
pub async fn get_profile(State(service): State<Arc<ProfileService>>) -> Json<Profile> {
    Json(service.profile().clone())
}

/// Download the owner's contact card (vCard 3.0)
#[utoipa::path(
    get,
    path = "/api/contact-card",
    responses(
        (status = 200, description = "vCard file", content_type = "text/vcard", body = String)
    ),
    tag = "profile"
)]
pub async fn get_contact_card(State(service): State<Arc<ProfileService>>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/vcard; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CONTACT_CARD_FILENAME),
            ),
        ],
        service.contact_card(),
    )
        .into_response()
}
