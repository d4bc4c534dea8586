use crate::domain::content::value_objects::{ContentId, ContentKey, ContentKind, DownloadLinks};
use chrono::{DateTime, Utc};

/// An episode or chapter belonging to exactly one title.
#[derive(Debug, Clone)]
pub struct ContentUnit {
    pub id: ContentId,
    pub key: ContentKey,
    pub kind: ContentKind,
    pub name: Option<String>,
    pub download_links: DownloadLinks,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContentUnit {
    pub key: ContentKey,
    pub kind: ContentKind,
    pub name: Option<String>,
    pub download_links: DownloadLinks,
    pub created_at: DateTime<Utc>,
}

/// Mutation of the non-key fields of an existing unit. The key itself is
/// immutable through this path.
#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub key: ContentKey,
    pub name: Option<Option<String>>,
    pub download_links: Option<DownloadLinks>,
    pub updated_at: DateTime<Utc>,
}
