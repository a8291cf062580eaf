use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::qr::dtos::GenerateQrDto;
use crate::features::qr::services::QrService;

/// Generate a QR code for a URL
#[utoipa::path(
    post,
    path = "/api/generate-qr",
    request_body = GenerateQrDto,
    responses(
        (status = 200, description = "PNG image", content_type = "image/png", body = Vec<u8>),
        (status = 400, description = "Validation error")
    ),
    tag = "qr"
)]
pub async fn generate_qr(
    State(service): State<Arc<QrService>>,
    AppJson(dto): AppJson<GenerateQrDto>,
) -> Result<Response> {
    let png = service.generate_png(&dto)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
