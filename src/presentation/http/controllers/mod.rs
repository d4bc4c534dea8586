// src/presentation/http/controllers/mod.rs
pub mod content;
pub mod social;
pub mod titles;
