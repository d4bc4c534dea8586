use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Platforms seeded on first start so the site header always has entries.
pub const DEFAULT_SOCIAL_PLATFORMS: [&str; 5] =
    ["facebook", "twitter", "instagram", "discord", "telegram"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SocialPlatform(String);

impl SocialPlatform {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(DomainError::Validation(
                "platform must be a non-empty alphanumeric name".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    /// Empty until an admin fills it in.
    pub url: String,
}
