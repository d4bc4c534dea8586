//! One-off setup run at process start, after migrations.

use crate::{
    application::error::ApplicationResult,
    domain::social::{DEFAULT_SOCIAL_PLATFORMS, SocialLink, SocialLinkRepository, SocialPlatform},
};

/// Make sure every default social platform has a row. Safe to run on every
/// boot; existing rows (and their urls) are left alone.
pub async fn seed_default_social_links(repo: &dyn SocialLinkRepository) -> ApplicationResult<usize> {
    let mut inserted = 0;
    for platform in DEFAULT_SOCIAL_PLATFORMS {
        let link = SocialLink {
            platform: SocialPlatform::new(platform)?,
            url: String::new(),
        };
        if repo.insert_if_missing(link).await? {
            inserted += 1;
        }
    }

    if inserted > 0 {
        tracing::info!(inserted, "seeded default social links");
    }
    Ok(inserted)
}
