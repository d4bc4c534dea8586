// src/domain/title/entity.rs
use crate::domain::title::value_objects::{
    ContentType, SubDubStatus, TitleId, TitleName, TitleSlug,
};
use chrono::{DateTime, Utc};

const META_DESCRIPTION_LEN: usize = 160;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeoMetadata {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl SeoMetadata {
    /// Fill blank SEO fields from the title and description.
    pub fn with_defaults(self, title: &TitleName, description: Option<&str>) -> Self {
        let meta_title = non_blank(self.meta_title).or_else(|| Some(title.as_str().to_string()));
        let meta_description = non_blank(self.meta_description).or_else(|| {
            description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(|d| d.chars().take(META_DESCRIPTION_LEN).collect())
        });
        Self {
            meta_title,
            meta_description,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone)]
pub struct Title {
    pub id: TitleId,
    pub title: TitleName,
    pub slug: Option<TitleSlug>,
    pub content_type: ContentType,
    pub sub_dub: SubDubStatus,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub genres: Vec<String>,
    pub release_year: Option<i32>,
    pub seo: SeoMetadata,
    pub last_content_added: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTitle {
    pub title: TitleName,
    pub slug: TitleSlug,
    pub content_type: ContentType,
    pub sub_dub: SubDubStatus,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub genres: Vec<String>,
    pub release_year: Option<i32>,
    pub seo: SeoMetadata,
    pub created_at: DateTime<Utc>,
}

/// Partial update of a title. `last_content_added` is deliberately absent:
/// only the freshness tracker writes it.
#[derive(Debug, Clone)]
pub struct TitleUpdate {
    pub id: TitleId,
    pub title: Option<TitleName>,
    pub slug: Option<TitleSlug>,
    pub content_type: Option<ContentType>,
    pub sub_dub: Option<SubDubStatus>,
    pub description: Option<Option<String>>,
    pub thumbnail_url: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
    pub release_year: Option<Option<i32>>,
    pub seo: Option<SeoMetadata>,
    pub updated_at: DateTime<Utc>,
}

impl TitleUpdate {
    pub fn new(id: TitleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content_type: None,
            sub_dub: None,
            description: None,
            thumbnail_url: None,
            genres: None,
            release_year: None,
            seo: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: TitleName) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: TitleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_seo(mut self, seo: SeoMetadata) -> Self {
        self.seo = Some(seo);
        self
    }
}
