use crate::domain::errors::DomainResult;
use crate::domain::social::entity::{SocialLink, SocialPlatform};
use async_trait::async_trait;

#[async_trait]
pub trait SocialLinkRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<SocialLink>>;

    /// Insert unless the platform already exists. Returns whether a row was added.
    async fn insert_if_missing(&self, link: SocialLink) -> DomainResult<bool>;

    /// Returns `None` when the platform is unknown.
    async fn update_url(
        &self,
        platform: &SocialPlatform,
        url: &str,
    ) -> DomainResult<Option<SocialLink>>;
}
