use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::reviews::models::{NewReview, Review, ReviewFilter};
use crate::features::reviews::repositories::ReviewRepository;

#[derive(Default)]
struct State {
    next_id: i32,
    reviews: Vec<Review>,
}

/// Process-local review store, used when no database is configured.
/// Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryReviewRepository {
    state: RwLock<State>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn insert(&self, review: NewReview) -> Result<Review> {
        let mut state = self.state.write().await;
        state.next_id += 1;

        let created = Review {
            id: state.next_id,
            name: review.name,
            email: review.email,
            appearance: review.appearance,
            punctuality: review.punctuality,
            communication: review.communication,
            professionalism: review.professionalism,
            chemistry: review.chemistry,
            discretion: review.discretion,
            would_book_again: review.would_book_again,
            booking_process_smooth: review.booking_process_smooth,
            matched_description: review.matched_description,
            service_types: review.service_types,
            additional_comments: review.additional_comments,
            is_approved: false,
            created_at: Utc::now(),
        };
        state.reviews.push(created.clone());

        Ok(created)
    }

    async fn list(&self, filter: ReviewFilter) -> Result<Vec<Review>> {
        let state = self.state.read().await;
        let mut reviews: Vec<Review> = state
            .reviews
            .iter()
            .filter(|r| filter == ReviewFilter::All || r.is_approved)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(reviews)
    }

    async fn set_approval(&self, id: i32, approved: bool) -> Result<Option<Review>> {
        let mut state = self.state.write().await;
        Ok(state.reviews.iter_mut().find(|r| r.id == id).map(|r| {
            r.is_approved = approved;
            r.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut state = self.state.write().await;
        let before = state.reviews.len();
        state.reviews.retain(|r| r.id != id);
        Ok(state.reviews.len() < before)
    }
}
