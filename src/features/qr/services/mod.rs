mod qr_service;

pub use qr_service::QrService;
