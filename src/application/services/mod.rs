// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            content::ContentCommandService, social::SocialLinkCommandService,
            titles::TitleCommandService,
        },
        ports::{security::AdminAuthenticator, time::Clock},
        queries::{
            content::ContentQueryService, social::SocialLinkQueryService,
            titles::TitleQueryService,
        },
    },
    domain::{
        content::{ContentRepository, ContentUniquenessGuard},
        social::SocialLinkRepository,
        title::{
            TitleReadRepository, TitleWriteRepository,
            services::{FreshnessTracker, TitleSlugAllocator},
        },
    },
};

pub struct ApplicationServices {
    pub title_commands: Arc<TitleCommandService>,
    pub title_queries: Arc<TitleQueryService>,
    pub content_commands: Arc<ContentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub social_commands: Arc<SocialLinkCommandService>,
    pub social_queries: Arc<SocialLinkQueryService>,
    admin_authenticator: Arc<dyn AdminAuthenticator>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title_write_repo: Arc<dyn TitleWriteRepository>,
        title_read_repo: Arc<dyn TitleReadRepository>,
        content_repo: Arc<dyn ContentRepository>,
        social_repo: Arc<dyn SocialLinkRepository>,
        admin_authenticator: Arc<dyn AdminAuthenticator>,
        clock: Arc<dyn Clock>,
        max_slug_attempts: u32,
    ) -> Self {
        let slug_allocator = Arc::new(TitleSlugAllocator::with_max_attempts(
            Arc::clone(&title_read_repo),
            max_slug_attempts,
        ));
        let freshness = Arc::new(FreshnessTracker::new(
            Arc::clone(&title_write_repo),
            Arc::clone(&clock),
        ));
        let guard = Arc::new(ContentUniquenessGuard::new(Arc::clone(&content_repo)));

        let title_commands = Arc::new(TitleCommandService::new(
            Arc::clone(&title_write_repo),
            Arc::clone(&title_read_repo),
            Arc::clone(&content_repo),
            slug_allocator,
            Arc::clone(&clock),
        ));
        let title_queries = Arc::new(TitleQueryService::new(Arc::clone(&title_read_repo)));

        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&content_repo),
            Arc::clone(&title_read_repo),
            guard,
            freshness,
            Arc::clone(&clock),
        ));
        let content_queries = Arc::new(ContentQueryService::new(
            Arc::clone(&content_repo),
            Arc::clone(&title_read_repo),
        ));

        let social_commands = Arc::new(SocialLinkCommandService::new(Arc::clone(&social_repo)));
        let social_queries = Arc::new(SocialLinkQueryService::new(social_repo));

        Self {
            title_commands,
            title_queries,
            content_commands,
            content_queries,
            social_commands,
            social_queries,
            admin_authenticator,
        }
    }

    pub fn admin_authenticator(&self) -> Arc<dyn AdminAuthenticator> {
        Arc::clone(&self.admin_authenticator)
    }
}
