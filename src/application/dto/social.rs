use crate::domain::social::SocialLink;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SocialLinkDto {
    pub platform: String,
    pub url: String,
}

impl From<SocialLink> for SocialLinkDto {
    fn from(link: SocialLink) -> Self {
        Self {
            platform: link.platform.as_str().to_string(),
            url: link.url,
        }
    }
}
