//! Credential and identity types.

use serde::Serialize;

/// A username/password pair taken from one login request.
///
/// Lives only for the duration of the request; the secret never appears in
/// `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identity returned by a verifier once credentials check out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let creds = Credentials::new("admin", "1234");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("1234"));
    }

    #[test]
    fn test_user_serializes_username_only() {
        let user = AuthenticatedUser { username: "admin".into() };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({ "username": "admin" })
        );
    }
}
