use std::sync::Arc;

use minijinja::context;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::reviews::dtos::{
    CreateReviewDto, PublicReviewDto, ReviewIdDto, ReviewResponseDto,
};
use crate::features::reviews::models::{NewReview, Review, ReviewFilter};
use crate::features::reviews::repositories::ReviewRepository;
use crate::modules::notifications::{Notifier, OutboundEmail};
use crate::shared::templates::render_template;

pub struct ReviewService {
    repository: Arc<dyn ReviewRepository>,
    notifier: Arc<Notifier>,
}

impl ReviewService {
    pub fn new(repository: Arc<dyn ReviewRepository>, notifier: Arc<Notifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Validate, store as pending, then alert the owner.
    ///
    /// Nothing is written unless the whole submission is valid. Notification
    /// problems are logged and do not change the result.
    pub async fn submit(&self, dto: CreateReviewDto) -> Result<ReviewResponseDto> {
        dto.validate()?;

        let review = self.repository.insert(into_new_review(dto)?).await?;
        tracing::info!(review_id = review.id, "Review submitted, pending approval");

        self.notify_new_review(&review).await;

        Ok(review.into())
    }

    pub async fn list_approved(&self) -> Result<Vec<PublicReviewDto>> {
        let reviews = self.repository.list(ReviewFilter::ApprovedOnly).await?;
        Ok(reviews.into_iter().map(PublicReviewDto::from).collect())
    }

    pub async fn list_all(&self) -> Result<Vec<ReviewResponseDto>> {
        let reviews = self.repository.list(ReviewFilter::All).await?;
        Ok(reviews.into_iter().map(ReviewResponseDto::from).collect())
    }

    pub async fn approve(&self, id: i32) -> Result<ReviewResponseDto> {
        self.set_approval(id, true).await
    }

    pub async fn reject(&self, id: i32) -> Result<ReviewResponseDto> {
        self.set_approval(id, false).await
    }

    pub async fn delete(&self, id: i32) -> Result<ReviewIdDto> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(review_id = id, "Review deleted");
        Ok(ReviewIdDto { review_id: id })
    }

    async fn set_approval(&self, id: i32, approved: bool) -> Result<ReviewResponseDto> {
        let review = self
            .repository
            .set_approval(id, approved)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(review_id = id, approved, "Review moderation updated");
        Ok(review.into())
    }

    async fn notify_new_review(&self, review: &Review) {
        let ctx = context! {
            id => review.id,
            name => &review.name,
            email => &review.email,
            service_types => review.service_types.join(", "),
            created_at => review.created_at.to_rfc3339(),
            appearance => review.appearance,
            punctuality => review.punctuality,
            communication => review.communication,
            professionalism => review.professionalism,
            chemistry => review.chemistry,
            discretion => review.discretion,
            average => review.average_rating(),
            would_book_again => yes_no(review.would_book_again),
            booking_process_smooth => yes_no(review.booking_process_smooth),
            matched_description => yes_no(review.matched_description),
            additional_comments => &review.additional_comments,
        };

        match (
            render_template("review_email_subject.jinja", ctx.clone()),
            render_template("review_email.jinja", ctx.clone()),
        ) {
            (Ok(subject), Ok(body)) => {
                self.notifier
                    .send_email(&OutboundEmail {
                        subject,
                        body,
                        reply_to: None,
                    })
                    .await;
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!(review_id = review.id, "Skipping review email: {}", e);
            }
        }

        match render_template("review_text.jinja", ctx) {
            Ok(text) => {
                let outcome = self.notifier.send_text(&text).await;
                tracing::debug!(
                    review_id = review.id,
                    delivered = outcome.is_delivered(),
                    "Review text alert finished"
                );
            }
            Err(e) => tracing::error!(review_id = review.id, "Skipping review text alert: {}", e),
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Review {} not found", id))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Unwrap a field the validator has already checked
fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| AppError::Validation(vec![format!("{}: is required", field)]))
}

fn into_new_review(dto: CreateReviewDto) -> Result<NewReview> {
    let additional_comments = dto
        .additional_comments
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    Ok(NewReview {
        name: dto.name.trim().to_string(),
        email: dto.email.trim().to_string(),
        appearance: required(dto.appearance, "appearance")?,
        punctuality: required(dto.punctuality, "punctuality")?,
        communication: required(dto.communication, "communication")?,
        professionalism: required(dto.professionalism, "professionalism")?,
        chemistry: required(dto.chemistry, "chemistry")?,
        discretion: required(dto.discretion, "discretion")?,
        would_book_again: required(dto.would_book_again, "wouldBookAgain")?,
        booking_process_smooth: required(dto.booking_process_smooth, "bookingProcessSmooth")?,
        matched_description: required(dto.matched_description, "matchedDescription")?,
        service_types: dto.service_types,
        additional_comments,
    })
}
