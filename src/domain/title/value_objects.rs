use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TitleId(pub i64);

impl TitleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("title id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TitleId> for i64 {
    fn from(value: TitleId) -> Self {
        value.0
    }
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human display title of an anime, movie or manga.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleName(String);

impl TitleName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TitleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitleSlug(String);

impl TitleSlug {
    /// Wraps an already normalised slug. Rejects anything that is not lowercase
    /// ASCII alphanumerics separated by single hyphens.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!("invalid slug '{value}'")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TitleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TitleSlug> for String {
    fn from(value: TitleSlug) -> Self {
        value.0
    }
}

fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Anime,
    Movie,
    Manga,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Anime => "Anime",
            ContentType::Movie => "Movie",
            ContentType::Manga => "Manga",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Anime" => Ok(ContentType::Anime),
            "Movie" => Ok(ContentType::Movie),
            "Manga" => Ok(ContentType::Manga),
            other => Err(DomainError::Validation(format!(
                "unknown content type '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubDubStatus {
    #[serde(rename = "SUB")]
    Sub,
    #[serde(rename = "DUB")]
    Dub,
    #[serde(rename = "SUB & DUB")]
    SubDub,
}

impl SubDubStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubDubStatus::Sub => "SUB",
            SubDubStatus::Dub => "DUB",
            SubDubStatus::SubDub => "SUB & DUB",
        }
    }
}

impl Default for SubDubStatus {
    fn default() -> Self {
        SubDubStatus::Sub
    }
}

impl fmt::Display for SubDubStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubDubStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUB" => Ok(SubDubStatus::Sub),
            "DUB" => Ok(SubDubStatus::Dub),
            "SUB & DUB" => Ok(SubDubStatus::SubDub),
            other => Err(DomainError::Validation(format!(
                "unknown sub/dub status '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_rejects_malformed_values() {
        assert!(TitleSlug::new("attack-on-titan").is_ok());
        assert!(TitleSlug::new("naruto-2").is_ok());
        assert!(TitleSlug::new("").is_err());
        assert!(TitleSlug::new("-naruto").is_err());
        assert!(TitleSlug::new("naruto-").is_err());
        assert!(TitleSlug::new("one--piece").is_err());
        assert!(TitleSlug::new("One-Piece").is_err());
        assert!(TitleSlug::new("one piece").is_err());
    }

    #[test]
    fn title_name_is_trimmed_and_non_blank() {
        assert_eq!(TitleName::new("  Bleach ").unwrap().as_str(), "Bleach");
        assert!(TitleName::new("   ").is_err());
    }

    #[test]
    fn sub_dub_round_trips_through_str() {
        for status in [SubDubStatus::Sub, SubDubStatus::Dub, SubDubStatus::SubDub] {
            assert_eq!(status.as_str().parse::<SubDubStatus>().unwrap(), status);
        }
        assert!("subbed".parse::<SubDubStatus>().is_err());
    }
}
