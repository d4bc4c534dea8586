use std::sync::Arc;

use crate::{
    application::{
        dto::ContentUnitDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::ContentRepository,
        title::{TitleId, TitleReadRepository},
    },
};

pub struct ListContentQuery {
    pub title_id: i64,
    pub session: Option<i32>,
}

pub struct ContentQueryService {
    content_repo: Arc<dyn ContentRepository>,
    title_repo: Arc<dyn TitleReadRepository>,
}

impl ContentQueryService {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        title_repo: Arc<dyn TitleReadRepository>,
    ) -> Self {
        Self {
            content_repo,
            title_repo,
        }
    }

    pub async fn list_content(
        &self,
        query: ListContentQuery,
    ) -> ApplicationResult<Vec<ContentUnitDto>> {
        let title_id = TitleId::new(query.title_id)?;
        if self.title_repo.find_by_id(title_id).await?.is_none() {
            return Err(ApplicationError::not_found("title not found"));
        }

        let units = self
            .content_repo
            .list_by_title(title_id, query.session)
            .await?;
        Ok(units.into_iter().map(ContentUnitDto::from).collect())
    }
}
