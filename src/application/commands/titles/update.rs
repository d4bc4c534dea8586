use super::{
    TitleCommandService,
    create::{clean_genres, clean_optional},
};
use crate::{
    application::{
        dto::TitleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::ContentKind,
        errors::DomainError,
        title::{
            ContentType, SeoMetadata, SubDubStatus, Title, TitleId, TitleName, TitleUpdate,
            compute_slug_if_needed,
        },
    },
};

/// Patch of a title's own fields. Absent fields stay as they are; blank
/// strings clear optional text fields.
#[derive(Default)]
pub struct UpdateTitleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content_type: Option<ContentType>,
    pub sub_dub: Option<SubDubStatus>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub genres: Option<Vec<String>>,
    pub release_year: Option<i32>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl TitleCommandService {
    pub async fn update_title(&self, command: UpdateTitleCommand) -> ApplicationResult<TitleDto> {
        let id = TitleId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("title not found"))?;

        let UpdateTitleCommand {
            id: _,
            title,
            content_type,
            sub_dub,
            description,
            thumbnail_url,
            genres,
            release_year,
            meta_title,
            meta_description,
        } = command;

        if let Some(requested) = content_type {
            self.ensure_kind_unchanged(&existing, requested).await?;
        }

        let new_title = title.map(TitleName::new).transpose()?;
        let effective_title = new_title.clone().unwrap_or_else(|| existing.title.clone());

        let mut update = TitleUpdate::new(id, self.clock.now());
        update.content_type = content_type;
        update.sub_dub = sub_dub;
        update.thumbnail_url = thumbnail_url.map(|v| clean_optional(Some(v)));
        update.genres = genres.map(clean_genres);
        update.release_year = release_year.map(Some);

        let description = description.map(|v| clean_optional(Some(v)));
        let effective_description = match &description {
            Some(value) => value.clone(),
            None => existing.description.clone(),
        };
        update.description = description;

        if new_title.is_some()
            || update.description.is_some()
            || meta_title.is_some()
            || meta_description.is_some()
        {
            update = update.with_seo(merged_seo(
                &existing,
                &effective_title,
                effective_description.as_deref(),
                meta_title,
                meta_description,
            ));
        }

        if new_title.as_ref().is_some_and(|t| *t != existing.title) {
            update = update.with_title(effective_title.clone());
        }

        let allocation = match compute_slug_if_needed(Some(&existing), &effective_title) {
            Some(request) => {
                let allocation = self
                    .slug_allocator
                    .allocate(&request.title, request.exclude)
                    .await?;
                update = update.with_slug(allocation.slug.clone());
                Some(allocation)
            }
            None => None,
        };

        let updated = match (self.write_repo.update(update.clone()).await, allocation) {
            (Err(DomainError::SlugTaken(taken)), Some(allocation)) => {
                tracing::info!(slug = %taken, %id, "slug claimed concurrently, retrying update");
                let next = self.slug_allocator.allocate_after(&allocation, Some(id)).await?;
                self.write_repo.update(update.with_slug(next.slug)).await?
            }
            (result, _) => result?,
        };

        Ok(updated.into())
    }

    /// Existing units keep the kind they were created with, so a title that
    /// has any may only move between content types of the same kind.
    async fn ensure_kind_unchanged(
        &self,
        existing: &Title,
        requested: ContentType,
    ) -> ApplicationResult<()> {
        let current = ContentKind::for_content_type(existing.content_type);
        let next = ContentKind::for_content_type(requested);
        if current == next || !self.content_repo.has_any(existing.id).await? {
            return Ok(());
        }
        Err(DomainError::Conflict(format!(
            "title {} has {}s and cannot become a {}",
            existing.id, current, requested
        ))
        .into())
    }
}

fn merged_seo(
    existing: &Title,
    title: &TitleName,
    description: Option<&str>,
    meta_title: Option<String>,
    meta_description: Option<String>,
) -> SeoMetadata {
    // Values that were only defaults of the old record follow the new one.
    let old_defaults =
        SeoMetadata::default().with_defaults(&existing.title, existing.description.as_deref());
    let keep_title = existing
        .seo
        .meta_title
        .clone()
        .filter(|t| Some(t) != old_defaults.meta_title.as_ref());
    let keep_description = existing
        .seo
        .meta_description
        .clone()
        .filter(|d| Some(d) != old_defaults.meta_description.as_ref());
    SeoMetadata {
        meta_title: meta_title.or(keep_title),
        meta_description: meta_description.or(keep_description),
    }
    .with_defaults(title, description)
}
