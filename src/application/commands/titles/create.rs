// src/application/commands/titles/create.rs
use super::TitleCommandService;
use crate::{
    application::{dto::TitleDto, error::ApplicationResult},
    domain::{
        errors::DomainError,
        title::{ContentType, NewTitle, SeoMetadata, SubDubStatus, TitleName},
    },
};

pub struct CreateTitleCommand {
    pub title: String,
    pub content_type: ContentType,
    pub sub_dub: SubDubStatus,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub genres: Vec<String>,
    pub release_year: Option<i32>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl CreateTitleCommand {
    pub fn builder() -> CreateTitleCommandBuilder {
        CreateTitleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateTitleCommandBuilder {
    title: Option<String>,
    content_type: Option<ContentType>,
    sub_dub: SubDubStatus,
    description: Option<String>,
    genres: Vec<String>,
}

impl CreateTitleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn sub_dub(mut self, sub_dub: SubDubStatus) -> Self {
        self.sub_dub = sub_dub;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    pub fn build(self) -> Result<CreateTitleCommand, &'static str> {
        Ok(CreateTitleCommand {
            title: self.title.ok_or("title is required")?,
            content_type: self.content_type.ok_or("content type is required")?,
            sub_dub: self.sub_dub,
            description: self.description,
            thumbnail_url: None,
            genres: self.genres,
            release_year: None,
            meta_title: None,
            meta_description: None,
        })
    }
}

impl TitleCommandService {
    pub async fn create_title(&self, command: CreateTitleCommand) -> ApplicationResult<TitleDto> {
        let title = TitleName::new(command.title)?;
        let description = clean_optional(command.description);
        let now = self.clock.now();

        let allocation = self.slug_allocator.allocate(&title, None).await?;

        let seo = SeoMetadata {
            meta_title: command.meta_title,
            meta_description: command.meta_description,
        }
        .with_defaults(&title, description.as_deref());

        let new_title = NewTitle {
            title,
            slug: allocation.slug.clone(),
            content_type: command.content_type,
            sub_dub: command.sub_dub,
            description,
            thumbnail_url: clean_optional(command.thumbnail_url),
            genres: clean_genres(command.genres),
            release_year: command.release_year,
            seo,
            created_at: now,
        };

        let created = match self.write_repo.insert(new_title.clone()).await {
            Err(DomainError::SlugTaken(taken)) => {
                tracing::info!(slug = %taken, "slug claimed concurrently, retrying insert");
                let next = self.slug_allocator.allocate_after(&allocation, None).await?;
                self.write_repo
                    .insert(NewTitle {
                        slug: next.slug,
                        ..new_title
                    })
                    .await?
            }
            other => other?,
        };

        tracing::info!(title_id = %created.id, slug = ?created.slug, "title created");
        Ok(created.into())
    }
}

/// Blank strings coming from admin forms mean "not set".
pub(super) fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(super) fn clean_genres(genres: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(genres.len());
    for genre in genres {
        let genre = genre.trim();
        if !genre.is_empty() && !cleaned.iter().any(|g| g.eq_ignore_ascii_case(genre)) {
            cleaned.push(genre.to_string());
        }
    }
    cleaned
}
