pub mod content;
pub mod social;
pub mod titles;
