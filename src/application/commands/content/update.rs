use super::ContentCommandService;
use crate::{
    application::{dto::ContentUnitDto, error::ApplicationResult},
    domain::{
        content::{ContentKey, ContentUpdate, DownloadLink, DownloadLinks},
        title::TitleId,
    },
};

/// Targets a unit by its current key and only touches non-key fields.
pub struct UpdateContentCommand {
    pub title_id: i64,
    pub ordinal: i32,
    pub session: i32,
    pub name: Option<String>,
    pub download_links: Option<Vec<DownloadLink>>,
}

impl ContentCommandService {
    pub async fn update_content(
        &self,
        command: UpdateContentCommand,
    ) -> ApplicationResult<ContentUnitDto> {
        let title_id = TitleId::new(command.title_id)?;
        let key = ContentKey::new(title_id, command.ordinal, command.session)?;
        let download_links = command
            .download_links
            .map(DownloadLinks::new)
            .transpose()?;

        let updated = self
            .content_repo
            .update(ContentUpdate {
                key,
                name: command
                    .name
                    .map(|n| Some(n.trim().to_string()).filter(|n| !n.is_empty())),
                download_links,
                updated_at: self.clock.now(),
            })
            .await?;

        self.freshness.stamp(title_id).await;
        Ok(updated.into())
    }
}
