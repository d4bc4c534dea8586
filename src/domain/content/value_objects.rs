use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::title::value_objects::{ContentType, TitleId};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const MIN_DOWNLOAD_LINKS: usize = 1;
pub const MAX_DOWNLOAD_LINKS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(pub i64);

impl ContentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("content id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContentId> for i64 {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

/// Episodes hang off anime and movies, chapters off manga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Episode,
    Chapter,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Episode => "episode",
            ContentKind::Chapter => "chapter",
        }
    }

    pub fn for_content_type(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Anime | ContentType::Movie => ContentKind::Episode,
            ContentType::Manga => ContentKind::Chapter,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "episode" => Ok(ContentKind::Episode),
            "chapter" => Ok(ContentKind::Chapter),
            other => Err(DomainError::Validation(format!(
                "unknown content kind '{other}'"
            ))),
        }
    }
}

/// Natural key of an episode or chapter: `(parent, ordinal, session)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentKey {
    pub title_id: TitleId,
    pub ordinal: i32,
    pub session: i32,
}

impl ContentKey {
    pub fn new(title_id: TitleId, ordinal: i32, session: i32) -> DomainResult<Self> {
        if ordinal < 0 {
            return Err(DomainError::Validation("ordinal cannot be negative".into()));
        }
        if session < 1 {
            return Err(DomainError::Validation("session must be at least 1".into()));
        }
        Ok(Self {
            title_id,
            ordinal,
            session,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default, rename = "type")]
    pub link_type: Option<String>,
}

/// Validated list of 1..=5 download links, each with a name and url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLinks(Vec<DownloadLink>);

impl DownloadLinks {
    pub fn new(links: Vec<DownloadLink>) -> DomainResult<Self> {
        if !(MIN_DOWNLOAD_LINKS..=MAX_DOWNLOAD_LINKS).contains(&links.len()) {
            return Err(DomainError::DownloadLinkCountInvalid(links.len()));
        }

        for (index, link) in links.iter().enumerate() {
            if link.name.trim().is_empty() {
                return Err(DomainError::DownloadLinkFieldMissing {
                    index,
                    field: "name",
                });
            }
            if link.url.trim().is_empty() {
                return Err(DomainError::DownloadLinkFieldMissing {
                    index,
                    field: "url",
                });
            }
        }

        Ok(Self(links))
    }

    pub fn as_slice(&self) -> &[DownloadLink] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<DownloadLink> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(name: &str, url: &str) -> DownloadLink {
        DownloadLink {
            name: name.into(),
            url: url.into(),
            quality: Some("1080p".into()),
            link_type: None,
        }
    }

    #[test]
    fn accepts_one_to_five_links() {
        for count in 1..=5 {
            let links = vec![link("mirror", "https://example.com/a"); count];
            assert_eq!(DownloadLinks::new(links).unwrap().as_slice().len(), count);
        }
    }

    #[test]
    fn rejects_empty_and_oversized_lists() {
        assert!(matches!(
            DownloadLinks::new(vec![]),
            Err(DomainError::DownloadLinkCountInvalid(0))
        ));
        let six = vec![link("mirror", "https://example.com/a"); 6];
        assert!(matches!(
            DownloadLinks::new(six),
            Err(DomainError::DownloadLinkCountInvalid(6))
        ));
    }

    #[test]
    fn names_the_offending_link() {
        let links = vec![
            link("mirror", "https://example.com/a"),
            link("backup", "https://example.com/b"),
            link("broken", "  "),
        ];
        match DownloadLinks::new(links) {
            Err(DomainError::DownloadLinkFieldMissing { index, field }) => {
                assert_eq!(index, 2);
                assert_eq!(field, "url");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        match DownloadLinks::new(vec![link("", "https://example.com/a")]) {
            Err(DomainError::DownloadLinkFieldMissing { index, field }) => {
                assert_eq!(index, 0);
                assert_eq!(field, "name");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn key_rejects_bad_numbers() {
        let title = TitleId::new(1).unwrap();
        assert!(ContentKey::new(title, 0, 1).is_ok());
        assert!(ContentKey::new(title, -1, 1).is_err());
        assert!(ContentKey::new(title, 1, 0).is_err());
    }

    #[test]
    fn kind_follows_content_type() {
        assert_eq!(ContentKind::for_content_type(ContentType::Anime), ContentKind::Episode);
        assert_eq!(ContentKind::for_content_type(ContentType::Movie), ContentKind::Episode);
        assert_eq!(ContentKind::for_content_type(ContentType::Manga), ContentKind::Chapter);
    }
}
