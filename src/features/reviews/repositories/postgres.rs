use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::reviews::models::{NewReview, Review, ReviewFilter};
use crate::features::reviews::repositories::ReviewRepository;

const REVIEW_COLUMNS: &str = r#"
    id, name, email,
    appearance, punctuality, communication, professionalism, chemistry, discretion,
    would_book_again, booking_process_smooth, matched_description,
    service_types, additional_comments, is_approved, created_at
"#;

pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn insert(&self, review: NewReview) -> Result<Review> {
        let sql = format!(
            r#"
            INSERT INTO reviews (
                name, email,
                appearance, punctuality, communication, professionalism, chemistry, discretion,
                would_book_again, booking_process_smooth, matched_description,
                service_types, additional_comments
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {REVIEW_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Review>(&sql)
            .bind(&review.name)
            .bind(&review.email)
            .bind(review.appearance)
            .bind(review.punctuality)
            .bind(review.communication)
            .bind(review.professionalism)
            .bind(review.chemistry)
            .bind(review.discretion)
            .bind(review.would_book_again)
            .bind(review.booking_process_smooth)
            .bind(review.matched_description)
            .bind(&review.service_types)
            .bind(&review.additional_comments)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn list(&self, filter: ReviewFilter) -> Result<Vec<Review>> {
        let where_clause = match filter {
            ReviewFilter::ApprovedOnly => "WHERE is_approved = TRUE",
            ReviewFilter::All => "",
        };
        let sql = format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews {where_clause} ORDER BY created_at DESC, id DESC"
        );

        let reviews = sqlx::query_as::<_, Review>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(reviews)
    }

    async fn set_approval(&self, id: i32, approved: bool) -> Result<Option<Review>> {
        let sql =
            format!("UPDATE reviews SET is_approved = $1 WHERE id = $2 RETURNING {REVIEW_COLUMNS}");

        let review = sqlx::query_as::<_, Review>(&sql)
            .bind(approved)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(review)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
