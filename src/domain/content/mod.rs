pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{ContentUnit, ContentUpdate, NewContentUnit};
pub use repository::ContentRepository;
pub use services::ContentUniquenessGuard;
pub use value_objects::{
    ContentId, ContentKey, ContentKind, DownloadLink, DownloadLinks, MAX_DOWNLOAD_LINKS,
    MIN_DOWNLOAD_LINKS,
};
