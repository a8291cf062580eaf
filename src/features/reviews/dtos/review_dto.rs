use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::{validate_email_format, validate_not_blank};

/// Request DTO for submitting a review.
///
/// Ratings and flags are `Option` so a missing field is reported as a
/// validation error alongside every other problem instead of failing
/// deserialization on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(
        function = "validate_email_format",
        message = "A valid email address is required"
    ))]
    pub email: String,

    #[validate(
        required(message = "Rating is required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub appearance: Option<i32>,

    #[validate(
        required(message = "Rating is required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub punctuality: Option<i32>,

    #[validate(
        required(message = "Rating is required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub communication: Option<i32>,

    #[validate(
        required(message = "Rating is required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub professionalism: Option<i32>,

    #[validate(
        required(message = "Rating is required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub chemistry: Option<i32>,

    #[validate(
        required(message = "Rating is required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub discretion: Option<i32>,

    #[validate(required(message = "Answer is required"))]
    pub would_book_again: Option<bool>,

    #[validate(required(message = "Answer is required"))]
    pub booking_process_smooth: Option<bool>,

    #[validate(required(message = "Answer is required"))]
    pub matched_description: Option<bool>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Select at least one service type"))]
    pub service_types: Vec<String>,

    #[validate(length(max = 200, message = "Comments must not exceed 200 characters"))]
    pub additional_comments: Option<String>,
}

/// Body of the admin moderation endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewIdDto {
    pub review_id: i32,
}

/// Full review as seen by the admin
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponseDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub appearance: i32,
    pub punctuality: i32,
    pub communication: i32,
    pub professionalism: i32,
    pub chemistry: i32,
    pub discretion: i32,
    pub would_book_again: bool,
    pub booking_process_smooth: bool,
    pub matched_description: bool,
    pub service_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_comments: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Approved review on the public page. The reviewer's email is never exposed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicReviewDto {
    pub id: i32,
    pub name: String,
    pub appearance: i32,
    pub punctuality: i32,
    pub communication: i32,
    pub professionalism: i32,
    pub chemistry: i32,
    pub discretion: i32,
    pub would_book_again: bool,
    pub booking_process_smooth: bool,
    pub matched_description: bool,
    pub service_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_comments: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}
