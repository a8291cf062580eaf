pub mod contact;
pub mod profile;
pub mod qr;
pub mod reviews;
