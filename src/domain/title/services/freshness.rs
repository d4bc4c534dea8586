use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::title::repository::TitleWriteRepository;
use crate::domain::title::value_objects::TitleId;

/// Stamps a title's `last_content_added` after its episodes or chapters change.
///
/// Best effort: a missing title is a no-op and storage failures are logged,
/// never returned.
pub struct FreshnessTracker {
    write_repo: Arc<dyn TitleWriteRepository>,
    clock: Arc<dyn Clock>,
}

impl FreshnessTracker {
    pub fn new(write_repo: Arc<dyn TitleWriteRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { write_repo, clock }
    }

    pub async fn stamp(&self, title_id: TitleId) {
        let now = self.clock.now();
        match self.write_repo.touch_last_content_added(title_id, now).await {
            Ok(true) => tracing::debug!(%title_id, "freshness stamped"),
            Ok(false) => tracing::debug!(%title_id, "freshness stamp skipped, title gone"),
            Err(err) => tracing::warn!(%title_id, error = %err, "freshness stamp failed"),
        }
    }
}
