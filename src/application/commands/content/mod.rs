// src/application/commands/content/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateContentCommand;
pub use delete::DeleteContentCommand;
pub use service::ContentCommandService;
pub use update::UpdateContentCommand;
