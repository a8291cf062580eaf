mod admin_review_handler;
mod review_handler;

pub use admin_review_handler::*;
pub use review_handler::*;
