use super::ContentCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{content::ContentKey, title::TitleId},
};

pub struct DeleteContentCommand {
    pub title_id: i64,
    pub ordinal: i32,
    pub session: i32,
}

impl ContentCommandService {
    pub async fn delete_content(&self, command: DeleteContentCommand) -> ApplicationResult<()> {
        let title_id = TitleId::new(command.title_id)?;
        let key = ContentKey::new(title_id, command.ordinal, command.session)?;

        self.content_repo.delete(&key).await?;
        self.freshness.stamp(title_id).await;
        tracing::info!(%title_id, ordinal = key.ordinal, session = key.session, "content deleted");
        Ok(())
    }
}
