use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::profile::{handlers as profile_handlers, models as profile_models};
use crate::features::qr::{dtos as qr_dtos, handlers as qr_handlers};
use crate::features::reviews::{dtos as reviews_dtos, handlers as reviews_handlers};
use crate::shared::types::{Acknowledgement, ApiResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Profile
        profile_handlers::get_profile,
        profile_handlers::get_contact_card,
        // Reviews
        reviews_handlers::submit_review,
        reviews_handlers::list_approved_reviews,
        // Admin
        reviews_handlers::list_all_reviews,
        reviews_handlers::approve_review,
        reviews_handlers::reject_review,
        reviews_handlers::delete_review,
        // Contact
        contact_handlers::send_contact_email,
        contact_handlers::send_contact_text,
        // QR
        qr_handlers::generate_qr,
    ),
    components(
        schemas(
            Acknowledgement,
            profile_models::Profile,
            profile_models::SocialLink,
            profile_models::PaymentLink,
            profile_models::ContactCard,
            reviews_dtos::CreateReviewDto,
            reviews_dtos::ReviewIdDto,
            reviews_dtos::ReviewResponseDto,
            reviews_dtos::PublicReviewDto,
            contact_dtos::ContactMessageDto,
            qr_dtos::GenerateQrDto,
            ApiResponse<reviews_dtos::ReviewResponseDto>,
            ApiResponse<reviews_dtos::ReviewIdDto>,
        )
    ),
    tags(
        (name = "profile", description = "Page profile and contact card (public)"),
        (name = "reviews", description = "Review submission and approved listing (public)"),
        (name = "contact", description = "Contact form forwarding (public)"),
        (name = "qr", description = "QR code generation (public)"),
        (name = "admin", description = "Review moderation (basic auth when configured)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Linkpage API",
        version = "0.1.0",
        description = "API documentation for the link-in-bio backend",
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
