use crate::domain::title::{ContentType, SubDubStatus, Title};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TitleDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[schema(value_type = String, example = "Anime")]
    pub content_type: ContentType,
    #[schema(value_type = String, example = "SUB")]
    pub sub_dub: SubDubStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(with = "serde_time")]
    pub last_content_added: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Title> for TitleDto {
    fn from(title: Title) -> Self {
        Self {
            id: title.id.into(),
            title: title.title.into_inner(),
            slug: title.slug.map(|s| s.into_inner()),
            content_type: title.content_type,
            sub_dub: title.sub_dub,
            description: title.description,
            thumbnail_url: title.thumbnail_url,
            genres: title.genres,
            release_year: title.release_year,
            meta_title: title.seo.meta_title,
            meta_description: title.seo.meta_description,
            last_content_added: title.last_content_added,
            created_at: title.created_at,
            updated_at: title.updated_at,
        }
    }
}
