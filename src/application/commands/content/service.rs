// src/application/commands/content/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        content::{ContentRepository, ContentUniquenessGuard},
        title::{TitleReadRepository, services::FreshnessTracker},
    },
};

/// Episode and chapter mutations. Every successful write is followed by a
/// freshness stamp on the parent title.
pub struct ContentCommandService {
    pub(super) content_repo: Arc<dyn ContentRepository>,
    pub(super) title_repo: Arc<dyn TitleReadRepository>,
    pub(super) guard: Arc<ContentUniquenessGuard>,
    pub(super) freshness: Arc<FreshnessTracker>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContentCommandService {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        title_repo: Arc<dyn TitleReadRepository>,
        guard: Arc<ContentUniquenessGuard>,
        freshness: Arc<FreshnessTracker>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            content_repo,
            title_repo,
            guard,
            freshness,
            clock,
        }
    }
}
