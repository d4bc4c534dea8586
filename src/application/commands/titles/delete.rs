// src/application/commands/titles/delete.rs
use super::TitleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::title::TitleId,
};

pub struct DeleteTitleCommand {
    pub id: i64,
}

impl TitleCommandService {
    /// Removes a title; its episodes or chapters go with it through the
    /// foreign key cascade.
    pub async fn delete_title(&self, command: DeleteTitleCommand) -> ApplicationResult<()> {
        let id = TitleId::new(command.id)?;
        let title = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("title not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(title_id = %id, slug = ?title.slug, "title deleted");
        Ok(())
    }
}
