use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQrDto {
    /// Absolute URL to encode
    #[serde(default)]
    #[validate(
        length(min = 1, max = 2048, message = "URL must be 1-2048 characters"),
        url(message = "Must be a valid URL")
    )]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        let ok = GenerateQrDto {
            url: "https://example.com/alex".to_string(),
        };
        assert!(ok.validate().is_ok());

        let not_url = GenerateQrDto {
            url: "not a url".to_string(),
        };
        assert!(not_url.validate().is_err());

        assert!(GenerateQrDto::default().validate().is_err());

        let too_long = GenerateQrDto {
            url: format!("https://example.com/{}", "a".repeat(2048)),
        };
        assert!(too_long.validate().is_err());
    }
}
