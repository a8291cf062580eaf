mod memory;
mod postgres;
mod review_repository;

pub use memory::InMemoryReviewRepository;
pub use postgres::PgReviewRepository;
pub use review_repository::ReviewRepository;
