use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::reviews::models::{NewReview, Review, ReviewFilter};

/// Storage seam for reviews.
///
/// Listings are ordered newest first, ties broken by id descending.
/// Each call touches a single row, so concurrent moderation resolves as
/// last write wins.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a pending review and return it with its id and timestamp
    async fn insert(&self, review: NewReview) -> Result<Review>;

    async fn list(&self, filter: ReviewFilter) -> Result<Vec<Review>>;

    /// `None` when no review has this id
    async fn set_approval(&self, id: i32, approved: bool) -> Result<Option<Review>>;

    /// `false` when no review has this id
    async fn delete(&self, id: i32) -> Result<bool>;
}
