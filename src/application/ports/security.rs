// src/application/ports/security.rs
use crate::application::ApplicationResult;

/// Gate for admin-only mutation routes.
pub trait AdminAuthenticator: Send + Sync {
    /// `Err(ApplicationError::Unauthorized)` unless `token` is the admin token.
    fn verify(&self, token: &str) -> ApplicationResult<()>;
}
