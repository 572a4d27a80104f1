//! Login response bodies and the mapping from failures to HTTP status codes.
//!
//! Every failure the handler can produce is a [`LoginError`] variant, and each
//! variant has exactly one status code and one message.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::auth::{AuthError, AuthenticatedUser};

pub const LOGIN_SUCCESSFUL: &str = "Login successful";

/// `{ "message": ..., "user": { "username": ... } }`
#[derive(Debug, Serialize)]
pub struct LoginSuccess {
    pub message: &'static str,
    pub user: AuthenticatedUser,
}

impl LoginSuccess {
    pub fn new(user: AuthenticatedUser) -> Self {
        Self {
            message: LOGIN_SUCCESSFUL,
            user,
        }
    }
}

/// `{ "message": ... }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Ways a login attempt can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Missing username or password")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl LoginError {
    pub fn status(&self) -> StatusCode {
        match self {
            LoginError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            LoginError::MissingCredentials => StatusCode::BAD_REQUEST,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        }
    }

    /// Label used for metrics and logs.
    pub fn outcome(&self) -> &'static str {
        match self {
            LoginError::MethodNotAllowed => "method_not_allowed",
            LoginError::MissingCredentials => "missing_fields",
            LoginError::InvalidCredentials => "invalid_credentials",
        }
    }
}

impl From<AuthError> for LoginError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => LoginError::InvalidCredentials,
        }
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        match self {
            // Plain text, not JSON.
            LoginError::MethodNotAllowed => (
                self.status(),
                [(header::ALLOW, "POST")],
                self.to_string(),
            )
                .into_response(),
            _ => (
                self.status(),
                Json(ErrorBody {
                    message: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
