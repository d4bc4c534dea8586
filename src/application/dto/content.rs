use crate::domain::content::{ContentKind, ContentUnit, DownloadLink};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DownloadLinkDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default, rename = "type")]
    pub link_type: Option<String>,
}

impl From<DownloadLink> for DownloadLinkDto {
    fn from(link: DownloadLink) -> Self {
        Self {
            name: link.name,
            url: link.url,
            quality: link.quality,
            link_type: link.link_type,
        }
    }
}

impl From<DownloadLinkDto> for DownloadLink {
    fn from(dto: DownloadLinkDto) -> Self {
        Self {
            name: dto.name,
            url: dto.url,
            quality: dto.quality,
            link_type: dto.link_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentUnitDto {
    pub id: i64,
    pub title_id: i64,
    #[schema(value_type = String, example = "episode")]
    pub kind: ContentKind,
    pub ordinal: i32,
    pub session: i32,
    #[serde(default)]
    pub name: Option<String>,
    pub download_links: Vec<DownloadLinkDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ContentUnit> for ContentUnitDto {
    fn from(unit: ContentUnit) -> Self {
        Self {
            id: unit.id.into(),
            title_id: unit.key.title_id.into(),
            kind: unit.kind,
            ordinal: unit.key.ordinal,
            session: unit.key.session,
            name: unit.name,
            download_links: unit
                .download_links
                .into_inner()
                .into_iter()
                .map(DownloadLinkDto::from)
                .collect(),
            created_at: unit.created_at,
            updated_at: unit.updated_at,
        }
    }
}
