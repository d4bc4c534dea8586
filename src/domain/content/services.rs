// src/domain/content/services.rs
use std::sync::Arc;

use crate::domain::content::repository::ContentRepository;
use crate::domain::content::value_objects::{ContentId, ContentKey};
use crate::domain::errors::{DomainError, DomainResult};

/// Pre-insert check that no sibling shares `(title, ordinal, session)`.
///
/// Optimistic only; the storage unique index still decides under concurrent
/// writers and surfaces the same error.
pub struct ContentUniquenessGuard {
    repo: Arc<dyn ContentRepository>,
}

impl ContentUniquenessGuard {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    pub async fn ensure_available(
        &self,
        key: &ContentKey,
        exclude_self: Option<ContentId>,
    ) -> DomainResult<()> {
        if self.repo.key_exists(key, exclude_self).await? {
            return Err(DomainError::DuplicateOrdinal {
                ordinal: key.ordinal,
                session: key.session,
            });
        }
        Ok(())
    }
}
