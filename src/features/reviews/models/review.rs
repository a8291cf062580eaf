use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::reviews::dtos::{PublicReviewDto, ReviewResponseDto};

/// Database model for review
#[derive(Debug, Clone, FromRow)]
pub struct Review {
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
    pub additional_comments: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Mean of the six ratings, rounded to one decimal
    pub fn average_rating(&self) -> f64 {
        let total = self.appearance
            + self.punctuality
            + self.communication
            + self.professionalism
            + self.chemistry
            + self.discretion;
        (f64::from(total) / 6.0 * 10.0).round() / 10.0
    }
}

/// Validated data for inserting a review. Id, approval flag and timestamp
/// are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewReview {
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
    pub additional_comments: Option<String>,
}

/// Which reviews a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFilter {
    ApprovedOnly,
    All,
}

impl From<Review> for ReviewResponseDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            appearance: r.appearance,
            punctuality: r.punctuality,
            communication: r.communication,
            professionalism: r.professionalism,
            chemistry: r.chemistry,
            discretion: r.discretion,
            would_book_again: r.would_book_again,
            booking_process_smooth: r.booking_process_smooth,
            matched_description: r.matched_description,
            service_types: r.service_types,
            additional_comments: r.additional_comments,
            is_approved: r.is_approved,
            created_at: r.created_at,
        }
    }
}

impl From<Review> for PublicReviewDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            name: r.name,
            appearance: r.appearance,
            punctuality: r.punctuality,
            communication: r.communication,
            professionalism: r.professionalism,
            chemistry: r.chemistry,
            discretion: r.discretion,
            would_book_again: r.would_book_again,
            booking_process_smooth: r.booking_process_smooth,
            matched_description: r.matched_description,
            service_types: r.service_types,
            additional_comments: r.additional_comments,
            is_approved: r.is_approved,
            created_at: r.created_at,
        }
    }
}
