use super::ContentCommandService;
use crate::{
    application::{dto::ContentUnitDto, error::ApplicationResult},
    domain::{
        content::{ContentKey, ContentKind, DownloadLink, DownloadLinks, NewContentUnit},
        errors::DomainError,
        title::TitleId,
    },
};

pub struct CreateContentCommand {
    pub title_id: i64,
    pub ordinal: i32,
    /// Defaults to 1.
    pub session: Option<i32>,
    pub name: Option<String>,
    /// Optional; when given it must agree with the parent's content type.
    pub kind: Option<ContentKind>,
    pub download_links: Vec<DownloadLink>,
}

impl ContentCommandService {
    pub async fn create_content(
        &self,
        command: CreateContentCommand,
    ) -> ApplicationResult<ContentUnitDto> {
        let title_id = TitleId::new(command.title_id)?;
        let key = ContentKey::new(title_id, command.ordinal, command.session.unwrap_or(1))?;

        let parent = self
            .title_repo
            .find_by_id(title_id)
            .await?
            .ok_or(DomainError::ParentNotFound(command.title_id))?;

        let kind = ContentKind::for_content_type(parent.content_type);
        if let Some(requested) = command.kind.filter(|k| *k != kind) {
            return Err(DomainError::Validation(format!(
                "a {} title takes {kind}s, not {requested}s",
                parent.content_type
            ))
            .into());
        }

        let download_links = DownloadLinks::new(command.download_links)?;

        self.guard.ensure_available(&key, None).await?;

        let created = self
            .content_repo
            .insert(NewContentUnit {
                key,
                kind,
                name: command
                    .name
                    .map(|n| n.trim().to_string())
                    .filter(|n| !n.is_empty()),
                download_links,
                created_at: self.clock.now(),
            })
            .await?;

        self.freshness.stamp(title_id).await;
        tracing::info!(
            %title_id,
            kind = %created.kind,
            ordinal = key.ordinal,
            session = key.session,
            "content created"
        );
        Ok(created.into())
    }
}
