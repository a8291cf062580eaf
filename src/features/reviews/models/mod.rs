mod review;

pub use review::{NewReview, Review, ReviewFilter};
