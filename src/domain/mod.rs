pub mod content;
pub mod errors;
pub mod social;
pub mod title;
