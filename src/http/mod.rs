//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned and propagated)
//!     → max instances (tower GlobalConcurrencyLimitLayer)
//!     → login.rs (POST: body limit, fields, verifier; else 405)
//!     → response.rs (status code + JSON or text body)
//!     → Send to client
//! ```

pub mod login;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, RequestIdExt, X_REQUEST_ID};
pub use response::{ErrorBody, LoginError, LoginSuccess};
pub use server::{build_router, AppState, LoginServer};
