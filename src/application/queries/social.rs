use std::sync::Arc;

use crate::{
    application::{dto::SocialLinkDto, error::ApplicationResult},
    domain::social::SocialLinkRepository,
};

pub struct SocialLinkQueryService {
    repo: Arc<dyn SocialLinkRepository>,
}

impl SocialLinkQueryService {
    pub fn new(repo: Arc<dyn SocialLinkRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_social_links(&self) -> ApplicationResult<Vec<SocialLinkDto>> {
        let links = self.repo.list().await?;
        Ok(links.into_iter().map(SocialLinkDto::from).collect())
    }
}
