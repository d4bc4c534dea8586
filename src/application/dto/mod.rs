pub mod content;
pub mod pagination;
pub mod serde_time;
pub mod social;
pub mod titles;

pub use content::{ContentUnitDto, DownloadLinkDto};
pub use pagination::CursorPage;
pub use social::SocialLinkDto;
pub use titles::TitleDto;
