pub mod cursor;
pub mod entity;
pub mod repository;
pub mod services;
pub mod slug;
pub mod value_objects;

pub use cursor::TitleListCursor;
pub use entity::{NewTitle, SeoMetadata, Title, TitleUpdate};
pub use repository::{TitleReadRepository, TitleWriteRepository};
pub use slug::{NewSlugRequest, compute_slug_if_needed, normalize_slug};
pub use value_objects::{ContentType, SubDubStatus, TitleId, TitleName, TitleSlug};
