// tests/support/mocks/mod.rs
//! In-memory stand-ins for the Postgres repositories and the system clock.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod content;
pub mod security;
pub mod social;
pub mod time;
pub mod titles;

pub use content::InMemoryContentRepo;
pub use security::{TEST_ADMIN_TOKEN, test_authenticator};
pub use social::InMemorySocialRepo;
pub use time::{FixedClock, StepClock, fixed_now};
pub use titles::InMemoryTitleRepo;
