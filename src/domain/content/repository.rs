use crate::domain::content::entity::{ContentUnit, ContentUpdate, NewContentUnit};
use crate::domain::content::value_objects::{ContentId, ContentKey};
use crate::domain::errors::DomainResult;
use crate::domain::title::value_objects::TitleId;
use async_trait::async_trait;

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_by_key(&self, key: &ContentKey) -> DomainResult<Option<ContentUnit>>;

    /// Units of a title ordered by `session, ordinal`.
    async fn list_by_title(
        &self,
        title_id: TitleId,
        session: Option<i32>,
    ) -> DomainResult<Vec<ContentUnit>>;

    async fn has_any(&self, title_id: TitleId) -> DomainResult<bool>;

    /// Whether a unit other than `exclude` holds `key`.
    async fn key_exists(&self, key: &ContentKey, exclude: Option<ContentId>) -> DomainResult<bool>;

    /// Fails with `DuplicateOrdinal` on key collision and `ParentNotFound`
    /// when the title vanished.
    async fn insert(&self, unit: NewContentUnit) -> DomainResult<ContentUnit>;
    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentUnit>;
    async fn delete(&self, key: &ContentKey) -> DomainResult<()>;
}
