use std::path::Path;

use crate::core::config::ProfileConfig;
use crate::features::profile::models::Profile;
use crate::features::profile::vcard::{build_vcard, Photo};

/// Read-only profile, loaded at startup
pub struct ProfileService {
    profile: Profile,
    photo: Option<Photo>,
}

impl ProfileService {
    pub fn new(profile: Profile, photo: Option<Photo>) -> Self {
        Self { profile, photo }
    }

    /// Load the profile file and the card photo.
    ///
    /// A missing or unreadable profile falls back to the built-in one. A
    /// missing photo only drops the photo from the card.
    pub async fn load(config: &ProfileConfig) -> Self {
        let profile = load_profile(Path::new(&config.path)).await;
        let photo = match profile.contact_card.photo_path.as_deref() {
            Some(path) => match tokio::fs::read(path).await {
                Ok(bytes) => Some(Photo::from_path(path, bytes)),
                Err(e) => {
                    tracing::warn!(
                        "Contact card photo {} unreadable, sending card without it: {}",
                        path,
                        e
                    );
                    None
                }
            },
            None => None,
        };

        Self::new(profile, photo)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn contact_card(&self) -> String {
        build_vcard(&self.profile.contact_card, self.photo.as_ref())
    }
}

async fn load_profile(path: &Path) -> Profile {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(
                "Profile file {} not loaded, using defaults: {}",
                path.display(),
                e
            );
            return Profile::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(profile) => {
            tracing::info!("Profile loaded from {}", path.display());
            profile
        }
        Err(e) => {
            tracing::error!(
                "Profile file {} is invalid, using defaults: {}",
                path.display(),
                e
            );
            Profile::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let service = ProfileService::load(&ProfileConfig {
            path: "does/not/exist.json".to_string(),
        })
        .await;
        assert_eq!(service.profile().display_name, "Alex Morgan");
        assert!(service.contact_card().contains("FN:Alex Morgan"));
    }

    #[tokio::test]
    async fn test_bundled_profile_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/profile.json");
        let raw = tokio::fs::read_to_string(path).await.unwrap();
        let profile: Profile = serde_json::from_str(&raw).unwrap();
        assert!(!profile.social_links.is_empty());
    }

    #[test]
    fn test_card_includes_loaded_photo() {
        let service = ProfileService::new(
            Profile::default(),
            Some(Photo::from_path("a.jpg", b"img".to_vec())),
        );
        assert!(service
            .contact_card()
            .contains("PHOTO;ENCODING=b;TYPE=JPEG:aW1n"));
    }
}
