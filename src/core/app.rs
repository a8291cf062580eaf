use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};

use crate::core::middleware;
use crate::features::contact::{routes as contact_routes, ContactService};
use crate::features::profile::{routes as profile_routes, ProfileService};
use crate::features::qr::{routes as qr_routes, QrService};
use crate::features::reviews::{routes as reviews_routes, ReviewService};
use crate::shared::constants::ADMIN_REALM;

/// Services shared by every request
#[derive(Clone)]
pub struct AppServices {
    pub reviews: Arc<ReviewService>,
    pub contact: Arc<ContactService>,
    pub profile: Arc<ProfileService>,
    pub qr: Arc<QrService>,
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// API routes without the outer layers (CORS, tracing, request ids, docs).
///
/// When `admin_credentials` is `Some("user:pass")` the `/api/admin` tree
/// requires matching HTTP Basic auth.
pub fn build_router(services: AppServices, admin_credentials: Option<String>) -> Router {
    let admin = reviews_routes::admin_routes(Arc::clone(&services.reviews));
    let admin = match admin_credentials {
        Some(credentials) => admin.route_layer(from_fn(middleware::basic_auth_middleware(
            Arc::new(credentials),
            ADMIN_REALM,
        ))),
        None => admin,
    };

    Router::new()
        .route("/health", get(health_check))
        .merge(profile_routes::routes(services.profile))
        .merge(reviews_routes::routes(services.reviews))
        .merge(contact_routes::routes(services.contact))
        .merge(qr_routes::routes(services.qr))
        .nest("/api/admin", admin)
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderValue, StatusCode};
    use serde_json::{json, Value};

    use std::sync::Arc;

    use axum_test::TestServer;

    use super::build_router;
    use crate::shared::test_helpers::{
        basic_auth_header, failing_notifier, services_with_notifier, test_server,
        valid_review_json,
    };

    const ADMIN: &str = "owner:s3cret";

    fn auth() -> HeaderValue {
        HeaderValue::from_str(&basic_auth_header(ADMIN)).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let server = test_server(None);
        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_review_moderation_flow() {
        let server = test_server(None);

        let res = server
            .post("/api/reviews")
            .json(&valid_review_json("Jordan"))
            .await;
        res.assert_status_ok();
        let body: Value = res.json();
        assert_eq!(body["success"], true);
        assert!(body.get("data").is_none());

        // Pending reviews are not public
        let public: Vec<Value> = server.get("/api/reviews").await.json();
        assert!(public.is_empty());

        let all: Vec<Value> = server.get("/api/admin/reviews").await.json();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0]["isApproved"], false);
        assert_eq!(all[0]["email"], "client@example.com");
        let id = all[0]["id"].as_i64().unwrap();

        let res = server
            .post("/api/admin/reviews/approve")
            .json(&json!({ "reviewId": id }))
            .await;
        res.assert_status_ok();
        let body: Value = res.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["isApproved"], true);

        let public: Vec<Value> = server.get("/api/reviews").await.json();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0]["name"], "Jordan");
        assert_eq!(public[0]["serviceTypes"], json!(["Dinner date"]));
        assert!(public[0].get("email").is_none());

        server
            .post("/api/admin/reviews/reject")
            .json(&json!({ "reviewId": id }))
            .await
            .assert_status_ok();
        let public: Vec<Value> = server.get("/api/reviews").await.json();
        assert!(public.is_empty());

        let res = server
            .delete("/api/admin/reviews/delete")
            .json(&json!({ "reviewId": id }))
            .await;
        res.assert_status_ok();
        let body: Value = res.json();
        assert_eq!(body["data"]["reviewId"], id);

        for path in ["/api/admin/reviews/approve", "/api/admin/reviews/reject"] {
            server
                .post(path)
                .json(&json!({ "reviewId": id }))
                .await
                .assert_status(StatusCode::NOT_FOUND);
        }
        let res = server
            .delete("/api/admin/reviews/delete")
            .json(&json!({ "reviewId": id }))
            .await;
        res.assert_status(StatusCode::NOT_FOUND);
        let body: Value = res.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_invalid_review_names_every_field() {
        let server = test_server(None);
        let mut review = valid_review_json("Jordan");
        review["appearance"] = json!(6);
        review["serviceTypes"] = json!([]);
        review["name"] = json!("  ");
        review.as_object_mut().unwrap().remove("wouldBookAgain");

        let res = server.post("/api/reviews").json(&review).await;
        res.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = res.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Validation failed");
        let errors: Vec<String> = serde_json::from_value(body["errors"].clone()).unwrap();
        for field in ["appearance", "name", "serviceTypes", "wouldBookAgain"] {
            assert!(
                errors.iter().any(|e| e.starts_with(&format!("{}:", field))),
                "{} missing from {:?}",
                field,
                errors
            );
        }

        let all: Vec<Value> = server.get("/api/admin/reviews").await.json();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let server = test_server(None);
        let res = server
            .post("/api/reviews")
            .content_type("application/json")
            .text("{not json")
            .await;
        res.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = res.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_contact_succeeds_without_channels() {
        let server = test_server(None);
        let message = json!({
            "name": "Sam",
            "phone": "555-1234",
            "message": "Hi there"
        });

        for path in ["/api/contact/text", "/api/contact/email"] {
            let res = server.post(path).json(&message).await;
            res.assert_status_ok();
            res.assert_json(&json!({
                "success": true,
                "message": "Your message has been received"
            }));
        }
    }

    #[tokio::test]
    async fn test_contact_rejects_bad_email_without_phone() {
        let server = test_server(None);
        let res = server
            .post("/api/contact/email")
            .json(&json!({
                "name": "Sam",
                "email": "not-an-email",
                "message": "Hi"
            }))
            .await;
        res.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = res.json();
        assert!(body["errors"][0].as_str().unwrap().starts_with("email:"));
    }

    #[tokio::test]
    async fn test_admin_requires_credentials_when_configured() {
        let server = test_server(Some(ADMIN));

        let res = server.get("/api/admin/reviews").await;
        res.assert_status(StatusCode::UNAUTHORIZED);
        assert!(res
            .header(header::WWW_AUTHENTICATE)
            .to_str()
            .unwrap()
            .starts_with("Basic"));

        server
            .get("/api/admin/reviews")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&basic_auth_header("owner:wrong")).unwrap(),
            )
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        server
            .get("/api/admin/reviews")
            .add_header(header::AUTHORIZATION, auth())
            .await
            .assert_status_ok();

        // Public routes stay open
        server.get("/api/reviews").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_profile_and_contact_card() {
        let server = test_server(None);

        let profile: Value = server.get("/api/profile").await.json();
        assert_eq!(profile["displayName"], "Alex Morgan");

        let res = server.get("/api/contact-card").await;
        res.assert_status_ok();
        assert!(res
            .header(header::CONTENT_TYPE)
            .to_str()
            .unwrap()
            .starts_with("text/vcard"));
        assert_eq!(
            res.header(header::CONTENT_DISPOSITION),
            "attachment; filename=\"contact.vcf\""
        );
        assert!(res.text().starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
    }

    #[tokio::test]
    async fn test_generate_qr() {
        let server = test_server(None);

        let res = server
            .post("/api/generate-qr")
            .json(&json!({ "url": "https://example.com/alex" }))
            .await;
        res.assert_status_ok();
        assert_eq!(res.header(header::CONTENT_TYPE), "image/png");
        assert_eq!(&res.as_bytes()[..4], &[0x89, b'P', b'N', b'G']);

        server
            .post("/api/generate-qr")
            .json(&json!({ "url": "" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_failed_delivery_still_acknowledged() {
        let services = services_with_notifier(Arc::new(failing_notifier()));
        let server = TestServer::new(build_router(services, None)).unwrap();

        let res = server
            .post("/api/reviews")
            .json(&valid_review_json("Jordan"))
            .await;
        res.assert_status_ok();
        let body: Value = res.json();
        assert_eq!(body["success"], true);

        // Stored even though the alert could not be sent
        let all: Vec<Value> = server.get("/api/admin/reviews").await.json();
        assert_eq!(all.len(), 1);

        let res = server
            .post("/api/contact/text")
            .json(&json!({
                "name": "Sam",
                "phone": "555-1234",
                "message": "Hi there"
            }))
            .await;
        res.assert_status_ok();
        res.assert_json(&json!({
            "success": true,
            "message": "Your message has been received"
        }));
    }
}
