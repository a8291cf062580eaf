use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public profile shown on the page, loaded once from `PROFILE_PATH`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub display_name: String,
    pub tagline: String,
    pub avatar_url: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub payment_links: Vec<PaymentLink>,
    pub contact_card: ContactCard,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLink {
    pub platform: String,
    pub name: String,
    #[serde(default)]
    pub handle: String,
    pub url: String,
}

/// Fields for the downloadable vCard
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactCard {
    pub full_name: String,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub note: Option<String>,
    /// Local image file embedded as the card photo. Never sent to clients.
    #[serde(skip_serializing)]
    pub photo_path: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: "Alex Morgan".to_string(),
            tagline: "Content Creator & Influencer".to_string(),
            avatar_url: None,
            social_links: Vec::new(),
            payment_links: Vec::new(),
            contact_card: ContactCard {
                full_name: "Alex Morgan".to_string(),
                organization: Some("Content Creator".to_string()),
                title: Some("Influencer".to_string()),
                email: Some("alex@alexmorgan.com".to_string()),
                phone: Some("+1-555-0123".to_string()),
                website: Some("https://alexmorgan.com".to_string()),
                note: Some(
                    "Content Creator & Influencer - Follow me for exclusive content and updates"
                        .to_string(),
                ),
                photo_path: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let profile: Profile =
            serde_json::from_str(r#"{"displayName": "Robin", "socialLinks": []}"#).unwrap();
        assert_eq!(profile.display_name, "Robin");
        assert_eq!(profile.tagline, Profile::default().tagline);
    }

    #[test]
    fn test_photo_path_is_not_serialized() {
        let mut profile = Profile::default();
        profile.contact_card.photo_path = Some("/srv/photo.jpg".to_string());
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json["contactCard"].get("photoPath").is_none());
        assert_eq!(json["contactCard"]["fullName"], "Alex Morgan");
    }
}
