use crate::domain::errors::DomainResult;
use crate::domain::title::cursor::TitleListCursor;
use crate::domain::title::entity::{NewTitle, Title, TitleUpdate};
use crate::domain::title::value_objects::{ContentType, TitleId, TitleSlug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait TitleWriteRepository: Send + Sync {
    /// Fails with `DomainError::SlugTaken` when the slug index rejects the row.
    async fn insert(&self, title: NewTitle) -> DomainResult<Title>;
    async fn update(&self, update: TitleUpdate) -> DomainResult<Title>;
    async fn delete(&self, id: TitleId) -> DomainResult<()>;

    /// Move `last_content_added` to `max(at, previous + 1µs)`.
    /// Returns `false` when no such title exists.
    async fn touch_last_content_added(&self, id: TitleId, at: DateTime<Utc>)
    -> DomainResult<bool>;
}

#[async_trait]
pub trait TitleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: TitleId) -> DomainResult<Option<Title>>;
    async fn find_by_slug(&self, slug: &TitleSlug) -> DomainResult<Option<Title>>;

    /// Whether a title other than `exclude` currently holds `slug`.
    async fn slug_exists(&self, slug: &TitleSlug, exclude: Option<TitleId>) -> DomainResult<bool>;

    /// Titles ordered by `last_content_added DESC, id DESC`.
    async fn list_page(
        &self,
        content_type: Option<ContentType>,
        limit: u32,
        cursor: Option<TitleListCursor>,
    ) -> DomainResult<(Vec<Title>, Option<TitleListCursor>)>;
}
