use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::title::repository::TitleReadRepository;
use crate::domain::title::slug::normalize_slug;
use crate::domain::title::value_objects::{TitleId, TitleName, TitleSlug};

pub const DEFAULT_MAX_SLUG_ATTEMPTS: u32 = 1000;

/// Outcome of a successful probe. `suffix` is `None` when the bare base slug
/// was free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugAllocation {
    pub base: String,
    pub slug: TitleSlug,
    pub suffix: Option<u32>,
}

/// Domain service responsible for producing unique slugs for titles.
///
/// Probes are optimistic: the storage unique index stays the authority, and a
/// caller that loses a race continues with [`TitleSlugAllocator::allocate_after`].
pub struct TitleSlugAllocator {
    read_repo: Arc<dyn TitleReadRepository>,
    max_attempts: u32,
}

impl TitleSlugAllocator {
    pub fn new(read_repo: Arc<dyn TitleReadRepository>) -> Self {
        Self::with_max_attempts(read_repo, DEFAULT_MAX_SLUG_ATTEMPTS)
    }

    pub fn with_max_attempts(read_repo: Arc<dyn TitleReadRepository>, max_attempts: u32) -> Self {
        Self {
            read_repo,
            max_attempts: max_attempts.max(1),
        }
    }

    pub async fn allocate(
        &self,
        title: &TitleName,
        exclude: Option<TitleId>,
    ) -> DomainResult<SlugAllocation> {
        let base = normalize_slug(title.as_str()).ok_or(DomainError::InvalidSlugSource)?;
        self.probe_from(base, exclude, 0).await
    }

    /// Resume probing past a candidate that storage rejected.
    pub async fn allocate_after(
        &self,
        previous: &SlugAllocation,
        exclude: Option<TitleId>,
    ) -> DomainResult<SlugAllocation> {
        let next = previous.suffix.map_or(1, |n| n.saturating_add(1));
        self.probe_from(previous.base.clone(), exclude, next).await
    }

    async fn probe_from(
        &self,
        base: String,
        exclude: Option<TitleId>,
        first_suffix: u32,
    ) -> DomainResult<SlugAllocation> {
        for attempt in 0..self.max_attempts {
            let suffix = first_suffix.saturating_add(attempt);
            let candidate = if suffix == 0 {
                base.clone()
            } else {
                format!("{base}-{suffix}")
            };
            let slug = TitleSlug::new(candidate)?;

            if !self.read_repo.slug_exists(&slug, exclude).await? {
                return Ok(SlugAllocation {
                    base,
                    slug,
                    suffix: (suffix > 0).then_some(suffix),
                });
            }
        }

        tracing::warn!(%base, attempts = self.max_attempts, "slug probing exhausted");
        Err(DomainError::SlugConflictRetryExhausted {
            base,
            attempts: self.max_attempts,
        })
    }
}
