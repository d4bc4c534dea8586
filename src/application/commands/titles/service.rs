// src/application/commands/titles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        content::ContentRepository,
        title::{TitleReadRepository, TitleWriteRepository, services::TitleSlugAllocator},
    },
};

pub struct TitleCommandService {
    pub(super) write_repo: Arc<dyn TitleWriteRepository>,
    pub(super) read_repo: Arc<dyn TitleReadRepository>,
    pub(super) content_repo: Arc<dyn ContentRepository>,
    pub(super) slug_allocator: Arc<TitleSlugAllocator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TitleCommandService {
    pub fn new(
        write_repo: Arc<dyn TitleWriteRepository>,
        read_repo: Arc<dyn TitleReadRepository>,
        content_repo: Arc<dyn ContentRepository>,
        slug_allocator: Arc<TitleSlugAllocator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            content_repo,
            slug_allocator,
            clock,
        }
    }
}
