// src/infrastructure/repositories/postgres_title.rs
use super::error::{CNT_TITLE_SLUG, map_sqlx, violated_constraint};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::title::{
    ContentType, NewTitle, SeoMetadata, SubDubStatus, Title, TitleId, TitleListCursor,
    TitleName, TitleReadRepository, TitleSlug, TitleUpdate, TitleWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const TITLE_COLUMNS: &str = "id, title, slug, content_type, sub_dub, description, thumbnail_url, \
     genres, release_year, meta_title, meta_description, last_content_added, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresTitleWriteRepository {
    pool: PgPool,
}

impl PostgresTitleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresTitleReadRepository {
    pool: PgPool,
}

impl PostgresTitleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TitleRow {
    id: i64,
    title: String,
    slug: Option<String>,
    content_type: String,
    sub_dub: String,
    description: Option<String>,
    thumbnail_url: Option<String>,
    genres: Vec<String>,
    release_year: Option<i32>,
    meta_title: Option<String>,
    meta_description: Option<String>,
    last_content_added: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TitleRow> for Title {
    type Error = DomainError;

    fn try_from(row: TitleRow) -> Result<Self, Self::Error> {
        Ok(Title {
            id: TitleId::new(row.id)?,
            title: TitleName::new(row.title)?,
            slug: row.slug.map(TitleSlug::new).transpose()?,
            content_type: row.content_type.parse::<ContentType>()?,
            sub_dub: row.sub_dub.parse::<SubDubStatus>()?,
            description: row.description,
            thumbnail_url: row.thumbnail_url,
            genres: row.genres,
            release_year: row.release_year,
            seo: SeoMetadata {
                meta_title: row.meta_title,
                meta_description: row.meta_description,
            },
            last_content_added: row.last_content_added,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn map_slug_write(err: sqlx::Error, slug: Option<&str>) -> DomainError {
    let slug_conflict = violated_constraint(&err) == Some(CNT_TITLE_SLUG);
    match slug {
        Some(slug) if slug_conflict => DomainError::SlugTaken(slug.to_string()),
        _ => map_sqlx(err),
    }
}

#[async_trait]
impl TitleWriteRepository for PostgresTitleWriteRepository {
    async fn insert(&self, title: NewTitle) -> DomainResult<Title> {
        let NewTitle {
            title,
            slug,
            content_type,
            sub_dub,
            description,
            thumbnail_url,
            genres,
            release_year,
            seo,
            created_at,
        } = title;

        let sql = format!(
            "INSERT INTO titles (title, slug, content_type, sub_dub, description, thumbnail_url,
                 genres, release_year, meta_title, meta_description, last_content_added,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11, $11)
             RETURNING {TITLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, TitleRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(content_type.as_str())
            .bind(sub_dub.as_str())
            .bind(description)
            .bind(thumbnail_url)
            .bind(genres)
            .bind(release_year)
            .bind(seo.meta_title)
            .bind(seo.meta_description)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_slug_write(e, Some(slug.as_str())))?;

        Title::try_from(row)
    }

    async fn update(&self, update: TitleUpdate) -> DomainResult<Title> {
        let TitleUpdate {
            id,
            title,
            slug,
            content_type,
            sub_dub,
            description,
            thumbnail_url,
            genres,
            release_year,
            seo,
            updated_at,
        } = update;

        let slug_str = slug.map(String::from);

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE titles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = &slug_str {
            builder.push(", slug = ");
            builder.push_bind(slug.clone());
        }
        if let Some(content_type) = content_type {
            builder.push(", content_type = ");
            builder.push_bind(content_type.as_str());
        }
        if let Some(sub_dub) = sub_dub {
            builder.push(", sub_dub = ");
            builder.push_bind(sub_dub.as_str());
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(thumbnail_url) = thumbnail_url {
            builder.push(", thumbnail_url = ");
            builder.push_bind(thumbnail_url);
        }
        if let Some(genres) = genres {
            builder.push(", genres = ");
            builder.push_bind(genres);
        }
        if let Some(release_year) = release_year {
            builder.push(", release_year = ");
            builder.push_bind(release_year);
        }
        if let Some(seo) = seo {
            builder.push(", meta_title = ");
            builder.push_bind(seo.meta_title);
            builder.push(", meta_description = ");
            builder.push_bind(seo.meta_description);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(TITLE_COLUMNS);

        let row = builder
            .build_query_as::<TitleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_slug_write(e, slug_str.as_deref()))?
            .ok_or_else(|| DomainError::NotFound("title not found".into()))?;

        Title::try_from(row)
    }

    async fn delete(&self, id: TitleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM titles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("title not found".into()));
        }
        Ok(())
    }

    async fn touch_last_content_added(
        &self,
        id: TitleId,
        at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        // GREATEST keeps the stamp strictly increasing even when two stamps
        // land within the clock's resolution.
        let result = sqlx::query(
            "UPDATE titles
             SET last_content_added = GREATEST($2, last_content_added + INTERVAL '1 microsecond')
             WHERE id = $1",
        )
        .bind(i64::from(id))
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl TitleReadRepository for PostgresTitleReadRepository {
    async fn find_by_id(&self, id: TitleId) -> DomainResult<Option<Title>> {
        let sql = format!("SELECT {TITLE_COLUMNS} FROM titles WHERE id = $1");
        let row = sqlx::query_as::<_, TitleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Title::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &TitleSlug) -> DomainResult<Option<Title>> {
        let sql = format!("SELECT {TITLE_COLUMNS} FROM titles WHERE slug = $1");
        let row = sqlx::query_as::<_, TitleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Title::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &TitleSlug, exclude: Option<TitleId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM titles
                 WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        content_type: Option<ContentType>,
        limit: u32,
        cursor: Option<TitleListCursor>,
    ) -> DomainResult<(Vec<Title>, Option<TitleListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(TITLE_COLUMNS);
        builder.push(" FROM titles WHERE TRUE");

        if let Some(content_type) = content_type {
            builder.push(" AND content_type = ");
            builder.push_bind(content_type.as_str());
        }
        if let Some(cursor) = &cursor {
            builder.push(" AND (last_content_added, id) < (");
            builder.push_bind(cursor.last_content_added);
            builder.push(", ");
            builder.push_bind(i64::from(cursor.title_id));
            builder.push(")");
        }

        builder.push(" ORDER BY last_content_added DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<TitleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut titles = rows
            .into_iter()
            .map(Title::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if titles.len() > limit as usize {
            titles.pop();
            if let Some(last) = titles.last() {
                next_cursor = Some(TitleListCursor::from_parts(last.last_content_added, last.id));
            }
        }

        Ok((titles, next_cursor))
    }
}
