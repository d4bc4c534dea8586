// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("title contains no characters usable in a slug")]
    InvalidSlugSource,
    /// Raised by storage when the slug unique index rejects a write.
    #[error("slug already taken: {0}")]
    SlugTaken(String),
    #[error("no free slug for `{base}` after {attempts} attempts")]
    SlugConflictRetryExhausted { base: String, attempts: u32 },
    #[error("ordinal {ordinal} already exists in session {session}")]
    DuplicateOrdinal { ordinal: i32, session: i32 },
    #[error("expected between 1 and 5 download links, got {0}")]
    DownloadLinkCountInvalid(usize),
    #[error("download link {index} is missing `{field}`")]
    DownloadLinkFieldMissing { index: usize, field: &'static str },
    #[error("parent title {0} not found")]
    ParentNotFound(i64),
}
