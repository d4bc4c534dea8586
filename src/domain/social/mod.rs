pub mod entity;
pub mod repository;

pub use entity::{DEFAULT_SOCIAL_PLATFORMS, SocialLink, SocialPlatform};
pub use repository::SocialLinkRepository;
