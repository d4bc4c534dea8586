// tests/support/mocks/security.rs
use anidex_core::application::ports::security::AdminAuthenticator;
use anidex_core::infrastructure::security::admin_token::Blake3AdminAuthenticator;
use std::sync::Arc;

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token-0123456789";

pub fn test_authenticator() -> Arc<dyn AdminAuthenticator> {
    Arc::new(Blake3AdminAuthenticator::new(TEST_ADMIN_TOKEN))
}
