use crate::application::{
    ApplicationResult, error::ApplicationError, ports::security::AdminAuthenticator,
};

/// Compares bearer tokens against a configured admin secret.
///
/// Only the blake3 digest of the secret is kept; `blake3::Hash` equality is
/// constant time.
#[derive(Clone)]
pub struct Blake3AdminAuthenticator {
    expected: blake3::Hash,
}

impl Blake3AdminAuthenticator {
    pub fn new(secret: &str) -> Self {
        Self {
            expected: blake3::hash(secret.as_bytes()),
        }
    }
}

impl AdminAuthenticator for Blake3AdminAuthenticator {
    fn verify(&self, token: &str) -> ApplicationResult<()> {
        if blake3::hash(token.as_bytes()) == self.expected {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid admin token"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_the_configured_secret() {
        let auth = Blake3AdminAuthenticator::new("correct-horse-battery");
        assert!(auth.verify("correct-horse-battery").is_ok());
        assert!(matches!(
            auth.verify("correct-horse-batter"),
            Err(ApplicationError::Unauthorized(_))
        ));
    }
}
