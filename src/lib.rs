//! Login Service Library
//!
//! One endpoint, `POST /login`, that checks a username/password pair and
//! answers with JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ http::server (axum Router + middleware)
//!                         │  trace, request id, timeout,
//!                         │  body limit, max instances
//!                         ▼
//!                      http::login ──▶ auth::CredentialVerifier
//!                         │               (StaticCredentials)
//!                         ▼
//!     ◀─────────────── http::response (200 / 400 / 401 / 405)
//!
//!     Cross-cutting: config, observability, lifecycle
//! ```

pub mod auth;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use auth::{CredentialVerifier, Credentials, StaticCredentials};
pub use config::ServiceConfig;
pub use http::LoginServer;
pub use lifecycle::Shutdown;
