// src/application/commands/social.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::SocialLinkDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::social::{SocialLinkRepository, SocialPlatform},
};

pub struct UpdateSocialLinkCommand {
    pub platform: String,
    pub url: String,
}

pub struct SocialLinkCommandService {
    repo: Arc<dyn SocialLinkRepository>,
}

impl SocialLinkCommandService {
    pub fn new(repo: Arc<dyn SocialLinkRepository>) -> Self {
        Self { repo }
    }

    pub async fn update_social_link(
        &self,
        command: UpdateSocialLinkCommand,
    ) -> ApplicationResult<SocialLinkDto> {
        let platform = SocialPlatform::new(command.platform)?;
        self.repo
            .update_url(&platform, command.url.trim())
            .await?
            .map(SocialLinkDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("unknown platform '{platform}'")))
    }
}
