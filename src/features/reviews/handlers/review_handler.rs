use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reviews::dtos::{CreateReviewDto, PublicReviewDto};
use crate::features::reviews::services::ReviewService;
use crate::shared::types::Acknowledgement;

/// Submit a review
///
/// Public endpoint. The review is stored as pending and only shows up on
/// the page once an admin approves it.
#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewDto,
    responses(
        (status = 200, description = "Review received", body = Acknowledgement),
        (status = 400, description = "Validation error")
    ),
    tag = "reviews"
)]
pub async fn submit_review(
    State(service): State<Arc<ReviewService>>,
    AppJson(dto): AppJson<CreateReviewDto>,
) -> Result<Json<Acknowledgement>> {
    service.submit(dto).await?;
    Ok(Json(Acknowledgement::received(
        "Thank you! Your review has been submitted and will appear once approved.",
    )))
}

/// List approved reviews, newest first
#[utoipa::path(
    get,
    path = "/api/reviews",
    responses(
        (status = 200, description = "Approved reviews", body = Vec<PublicReviewDto>)
    ),
    tag = "reviews"
)]
pub async fn list_approved_reviews(
    State(service): State<Arc<ReviewService>>,
) -> Result<Json<Vec<PublicReviewDto>>> {
    Ok(Json(service.list_approved().await?))
}
