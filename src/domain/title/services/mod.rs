// src/domain/title/services/mod.rs
mod freshness;
mod slug_allocator;

pub use freshness::FreshnessTracker;
pub use slug_allocator::{DEFAULT_MAX_SLUG_ATTEMPTS, SlugAllocation, TitleSlugAllocator};
