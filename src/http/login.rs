//! `/login` handlers.
//!
//! `login` is only routed for POST; every other method lands in
//! `method_not_allowed` before the body is read or size-checked.
//! Inside `login` the body fields are checked first, then the verifier.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::time::Instant;

use crate::auth::{AuthenticatedUser, CredentialVerifier, Credentials};
use crate::http::request::RequestIdExt;
use crate::http::response::{LoginError, LoginSuccess};
use crate::http::server::AppState;
use crate::observability::metrics;

pub async fn login(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let start_time = Instant::now();
    let request_id = headers.request_id();

    tracing::info!(request_id = %request_id, method = %Method::POST, "Login API hit");

    match authenticate(state.verifier.as_ref(), &body).await {
        Ok(user) => {
            tracing::info!(request_id = %request_id, username = %user.username, "Login successful");
            metrics::record_login(metrics::OUTCOME_SUCCESS, start_time);
            Json(LoginSuccess::new(user)).into_response()
        }
        Err(err) => reject(request_id, err, start_time),
    }
}

/// Fallback for every method other than POST on `/login`.
pub async fn method_not_allowed(method: Method, headers: HeaderMap) -> Response {
    let start_time = Instant::now();
    let request_id = headers.request_id();

    tracing::info!(request_id = %request_id, method = %method, "Login API hit");
    reject(request_id, LoginError::MethodNotAllowed, start_time)
}

fn reject(request_id: &str, err: LoginError, start_time: Instant) -> Response {
    tracing::warn!(request_id = %request_id, outcome = err.outcome(), "Login rejected");
    metrics::record_login(err.outcome(), start_time);
    err.into_response()
}

/// Check a POSTed body against the verifier.
pub async fn authenticate(
    verifier: &dyn CredentialVerifier,
    body: &[u8],
) -> Result<AuthenticatedUser, LoginError> {
    let credentials = parse_credentials(body)?;
    Ok(verifier.verify(&credentials).await?)
}

/// A body member as seen by the presence check.
enum Field<'a> {
    /// Absent, `null`, `""`, `0` or `false`.
    Missing,
    Text(&'a str),
    /// Present and truthy but not a string; can never match a credential.
    Other,
}

fn field<'a>(body: &'a Value, key: &str) -> Field<'a> {
    match body.get(key) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Field::Missing,
        Some(Value::String(s)) if s.is_empty() => Field::Missing,
        Some(Value::String(s)) => Field::Text(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Field::Missing,
        Some(_) => Field::Other,
    }
}

/// Pull `username` and `password` out of a JSON body.
///
/// A missing or falsy field gives `MissingCredentials`. A truthy non-string
/// field gives `InvalidCredentials`. Bodies that are not JSON objects have no
/// fields.
pub fn parse_credentials(body: &[u8]) -> Result<Credentials, LoginError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| LoginError::MissingCredentials)?;

    match (field(&value, "username"), field(&value, "password")) {
        (Field::Missing, _) | (_, Field::Missing) => Err(LoginError::MissingCredentials),
        (Field::Text(username), Field::Text(password)) => {
            Ok(Credentials::new(username, password))
        }
        _ => Err(LoginError::InvalidCredentials),
    }
}
