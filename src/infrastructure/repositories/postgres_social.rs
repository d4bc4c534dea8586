use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::social::{SocialLink, SocialLinkRepository, SocialPlatform};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSocialLinkRepository {
    pool: PgPool,
}

impl PostgresSocialLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SocialLinkRow {
    platform: String,
    url: String,
}

impl TryFrom<SocialLinkRow> for SocialLink {
    type Error = DomainError;

    fn try_from(row: SocialLinkRow) -> Result<Self, Self::Error> {
        Ok(SocialLink {
            platform: SocialPlatform::new(row.platform)?,
            url: row.url,
        })
    }
}

#[async_trait]
impl SocialLinkRepository for PostgresSocialLinkRepository {
    async fn list(&self) -> DomainResult<Vec<SocialLink>> {
        let rows = sqlx::query_as::<_, SocialLinkRow>(
            "SELECT platform, url FROM social_links ORDER BY platform",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(SocialLink::try_from).collect()
    }

    async fn insert_if_missing(&self, link: SocialLink) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO social_links (platform, url) VALUES ($1, $2)
             ON CONFLICT (platform) DO NOTHING",
        )
        .bind(link.platform.as_str())
        .bind(link.url)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_url(
        &self,
        platform: &SocialPlatform,
        url: &str,
    ) -> DomainResult<Option<SocialLink>> {
        let row = sqlx::query_as::<_, SocialLinkRow>(
            "UPDATE social_links SET url = $2, updated_at = now()
             WHERE platform = $1
             RETURNING platform, url",
        )
        .bind(platform.as_str())
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(SocialLink::try_from).transpose()
    }
}
