use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reviews::dtos::{ReviewIdDto, ReviewResponseDto};
use crate::features::reviews::services::ReviewService;
use crate::shared::types::ApiResponse;

/// List every review, pending and approved
#[utoipa::path(
    get,
    path = "/api/admin/reviews",
    responses(
        (status = 200, description = "All reviews", body = Vec<ReviewResponseDto>),
        (status = 401, description = "Missing or wrong admin credentials")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn list_all_reviews(
    State(service): State<Arc<ReviewService>>,
) -> Result<Json<Vec<ReviewResponseDto>>> {
    Ok(Json(service.list_all().await?))
}

/// Approve a review so it appears publicly
#[utoipa::path(
    post,
    path = "/api/admin/reviews/approve",
    request_body = ReviewIdDto,
    responses(
        (status = 200, description = "Review approved", body = ApiResponse<ReviewResponseDto>),
        (status = 404, description = "Review not found")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn approve_review(
    State(service): State<Arc<ReviewService>>,
    AppJson(dto): AppJson<ReviewIdDto>,
) -> Result<Json<ApiResponse<ReviewResponseDto>>> {
    let review = service.approve(dto.review_id).await?;
    Ok(Json(ApiResponse::success(
        Some(review),
        Some("Review approved".to_string()),
    )))
}

/// Move a review back to pending
#[utoipa::path(
    post,
    path = "/api/admin/reviews/reject",
    request_body = ReviewIdDto,
    responses(
        (status = 200, description = "Review rejected", body = ApiResponse<ReviewResponseDto>),
        (status = 404, description = "Review not found")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn reject_review(
    State(service): State<Arc<ReviewService>>,
    AppJson(dto): AppJson<ReviewIdDto>,
) -> Result<Json<ApiResponse<ReviewResponseDto>>> {
    let review = service.reject(dto.review_id).await?;
    Ok(Json(ApiResponse::success(
        Some(review),
        Some("Review rejected".to_string()),
    )))
}

/// Permanently delete a review
#[utoipa::path(
    delete,
    path = "/api/admin/reviews/delete",
    request_body = ReviewIdDto,
    responses(
        (status = 200, description = "Review deleted", body = ApiResponse<ReviewIdDto>),
        (status = 404, description = "Review not found")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn delete_review(
    State(service): State<Arc<ReviewService>>,
    AppJson(dto): AppJson<ReviewIdDto>,
) -> Result<Json<ApiResponse<ReviewIdDto>>> {
    let deleted = service.delete(dto.review_id).await?;
    Ok(Json(ApiResponse::success(
        Some(deleted),
        Some("Review deleted".to_string()),
    )))
}
