/// Realm shown in the browser prompt for the moderation endpoints
pub const ADMIN_REALM: &str = "Review moderation";

/// Realm shown in the browser prompt for the API docs
pub const SWAGGER_REALM: &str = "Swagger UI";

/// Smallest edge, in pixels, of a generated QR code image
pub const QR_MIN_DIMENSION: u32 = 512;

/// Filename offered for the downloaded contact card
pub const CONTACT_CARD_FILENAME: &str = "contact.vcf";
