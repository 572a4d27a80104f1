//! Credential verification.
//!
//! The login handler only sees [`CredentialVerifier`]. [`StaticCredentials`]
//! checks against a single configured pair; a user store can take its place
//! without touching the handler.

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::credentials::{AuthenticatedUser, Credentials};
use crate::config::AuthConfig;

/// Errors a verifier can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Username unknown or password wrong.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Checks a credential pair and yields the authenticated identity.
///
/// Implementations may do I/O; the handler awaits them under the request timeout.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError>;
}

/// Verifier that accepts exactly one username/password pair.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.username.clone(), config.password.clone())
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError> {
        // Both comparisons always run; `&` does not short-circuit.
        let username_ok = constant_time_eq(credentials.username.as_bytes(), self.username.as_bytes());
        let password_ok = constant_time_eq(credentials.password.as_bytes(), self.password.as_bytes());

        if username_ok & password_ok {
            Ok(AuthenticatedUser {
                username: self.username.clone(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Byte comparison whose running time depends only on the lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
