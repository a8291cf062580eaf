use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for admin mutations and error bodies
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Generic "we got it" reply for public form submissions.
///
/// Sent whenever the input is well formed, whatever happened to the
/// notification afterwards.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    pub fn received(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            message,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_omits_data() {
        let body = ApiResponse::<()>::error(
            Some("Validation failed".to_string()),
            Some(vec!["name: Name is required".to_string()]),
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Validation failed");
        assert_eq!(json["errors"][0], "name: Name is required");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_acknowledgement_shape() {
        let json = serde_json::to_value(Acknowledgement::received("Review submitted")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "message": "Review submitted" })
        );
    }
}
