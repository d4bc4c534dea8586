// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_content;
mod postgres_social;
mod postgres_title;

pub use error::map_sqlx;
pub use postgres_content::PostgresContentRepository;
pub use postgres_social::PostgresSocialLinkRepository;
pub use postgres_title::{PostgresTitleReadRepository, PostgresTitleWriteRepository};
