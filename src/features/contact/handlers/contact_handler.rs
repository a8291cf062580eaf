use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::contact::dtos::ContactMessageDto;
use crate::features::contact::services::ContactService;
use crate::shared::types::Acknowledgement;

const RECEIVED: &str = "Your message has been received";

/// Send a contact message by email
///
/// The reply is the same whether or not the email provider accepted it.
#[utoipa::path(
    post,
    path = "/api/contact/email",
    request_body = ContactMessageDto,
    responses(
        (status = 200, description = "Message received", body = Acknowledgement),
        (status = 400, description = "Validation error")
    ),
    tag = "contact"
)]
pub async fn send_contact_email(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<ContactMessageDto>,
) -> Result<Json<Acknowledgement>> {
    service.send_email(dto).await?;
    Ok(Json(Acknowledgement::received(RECEIVED)))
}

/// Send a contact message as a text alert
///
/// Channels are tried in priority order until one succeeds.
#[utoipa::path(
    post,
    path = "/api/contact/text",
    request_body = ContactMessageDto,
    responses(
        (status = 200, description = "Message received", body = Acknowledgement),
        (status = 400, description = "Validation error")
    ),
    tag = "contact"
)]
pub async fn send_contact_text(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<ContactMessageDto>,
) -> Result<Json<Acknowledgement>> {
    service.send_text(dto).await?;
    Ok(Json(Acknowledgement::received(RECEIVED)))
}
