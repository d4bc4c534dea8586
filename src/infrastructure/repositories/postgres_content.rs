// src/infrastructure/repositories/postgres_content.rs
use super::error::{CNT_CONTENT_KEY, CNT_CONTENT_TITLE, map_sqlx, violated_constraint};
use crate::domain::content::{
    ContentId, ContentKey, ContentKind, ContentRepository, ContentUnit, ContentUpdate,
    DownloadLink, DownloadLinks, NewContentUnit,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::title::TitleId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};

const CONTENT_COLUMNS: &str =
    "id, title_id, kind, ordinal, session, name, download_links, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: i64,
    title_id: i64,
    kind: String,
    ordinal: i32,
    session: i32,
    name: Option<String>,
    download_links: Json<Vec<DownloadLink>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for ContentUnit {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        Ok(ContentUnit {
            id: ContentId::new(row.id)?,
            key: ContentKey::new(TitleId::new(row.title_id)?, row.ordinal, row.session)?,
            kind: row.kind.parse::<ContentKind>()?,
            name: row.name,
            download_links: DownloadLinks::new(row.download_links.0)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn key_not_found() -> DomainError {
    DomainError::NotFound("content not found".into())
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn find_by_key(&self, key: &ContentKey) -> DomainResult<Option<ContentUnit>> {
        let sql = format!(
            "SELECT {CONTENT_COLUMNS} FROM content_units
             WHERE title_id = $1 AND ordinal = $2 AND session = $3"
        );
        let row = sqlx::query_as::<_, ContentRow>(&sql)
            .bind(i64::from(key.title_id))
            .bind(key.ordinal)
            .bind(key.session)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ContentUnit::try_from).transpose()
    }

    async fn list_by_title(
        &self,
        title_id: TitleId,
        session: Option<i32>,
    ) -> DomainResult<Vec<ContentUnit>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(CONTENT_COLUMNS);
        builder.push(" FROM content_units WHERE title_id = ");
        builder.push_bind(i64::from(title_id));
        if let Some(session) = session {
            builder.push(" AND session = ");
            builder.push_bind(session);
        }
        builder.push(" ORDER BY session, ordinal");

        let rows = builder
            .build_query_as::<ContentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ContentUnit::try_from).collect()
    }

    async fn has_any(&self, title_id: TitleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM content_units WHERE title_id = $1)",
        )
        .bind(i64::from(title_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn key_exists(&self, key: &ContentKey, exclude: Option<ContentId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM content_units
                 WHERE title_id = $1 AND ordinal = $2 AND session = $3
                   AND ($4::BIGINT IS NULL OR id <> $4)
             )",
        )
        .bind(i64::from(key.title_id))
        .bind(key.ordinal)
        .bind(key.session)
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn insert(&self, unit: NewContentUnit) -> DomainResult<ContentUnit> {
        let NewContentUnit {
            key,
            kind,
            name,
            download_links,
            created_at,
        } = unit;

        let sql = format!(
            "INSERT INTO content_units
                 (title_id, kind, ordinal, session, name, download_links, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {CONTENT_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ContentRow>(&sql)
            .bind(i64::from(key.title_id))
            .bind(kind.as_str())
            .bind(key.ordinal)
            .bind(key.session)
            .bind(name)
            .bind(Json(download_links.into_inner()))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                let constraint = violated_constraint(&err).map(str::to_owned);
                match constraint.as_deref() {
                    Some(CNT_CONTENT_KEY) => DomainError::DuplicateOrdinal {
                        ordinal: key.ordinal,
                        session: key.session,
                    },
                    Some(CNT_CONTENT_TITLE) => DomainError::ParentNotFound(key.title_id.into()),
                    _ => map_sqlx(err),
                }
            })?;

        ContentUnit::try_from(row)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentUnit> {
        let ContentUpdate {
            key,
            name,
            download_links,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE content_units SET updated_at = ");
        builder.push_bind(updated_at);
        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name);
        }
        if let Some(links) = download_links {
            builder.push(", download_links = ");
            builder.push_bind(Json(links.into_inner()));
        }
        builder.push(" WHERE title_id = ");
        builder.push_bind(i64::from(key.title_id));
        builder.push(" AND ordinal = ");
        builder.push_bind(key.ordinal);
        builder.push(" AND session = ");
        builder.push_bind(key.session);
        builder.push(" RETURNING ");
        builder.push(CONTENT_COLUMNS);

        let row = builder
            .build_query_as::<ContentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(key_not_found)?;

        ContentUnit::try_from(row)
    }

    async fn delete(&self, key: &ContentKey) -> DomainResult<()> {
        let result = sqlx::query(
            "DELETE FROM content_units WHERE title_id = $1 AND ordinal = $2 AND session = $3",
        )
        .bind(i64::from(key.title_id))
        .bind(key.ordinal)
        .bind(key.session)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(key_not_found());
        }
        Ok(())
    }
}
