// src/application/queries/titles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{CursorPage, TitleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::title::{ContentType, TitleId, TitleListCursor, TitleReadRepository, TitleSlug},
};

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

pub struct ListTitlesQuery {
    pub content_type: Option<ContentType>,
    pub limit: u32,
    pub cursor: Option<String>,
}

pub struct GetTitleBySlugQuery {
    pub slug: String,
}

pub struct TitleQueryService {
    read_repo: Arc<dyn TitleReadRepository>,
}

impl TitleQueryService {
    pub fn new(read_repo: Arc<dyn TitleReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Homepage listing: most recently refreshed titles first.
    pub async fn list_titles(
        &self,
        query: ListTitlesQuery,
    ) -> ApplicationResult<CursorPage<TitleDto>> {
        let limit = query.limit.clamp(1, MAX_PAGE_LIMIT);
        let cursor = query
            .cursor
            .as_deref()
            .map(TitleListCursor::decode)
            .transpose()?;

        let (titles, next) = self
            .read_repo
            .list_page(query.content_type, limit, cursor)
            .await?;

        Ok(CursorPage::new(
            titles.into_iter().map(TitleDto::from).collect(),
            next.map(|c| c.encode()),
        ))
    }

    pub async fn get_title_by_slug(&self, query: GetTitleBySlugQuery) -> ApplicationResult<TitleDto> {
        // A slug that cannot exist is reported the same way as a missing one.
        let slug = TitleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("title not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(TitleDto::from)
            .ok_or_else(|| ApplicationError::not_found("title not found"))
    }

    pub async fn get_title_by_id(&self, id: i64) -> ApplicationResult<TitleDto> {
        let id = TitleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(TitleDto::from)
            .ok_or_else(|| ApplicationError::not_found("title not found"))
    }
}
