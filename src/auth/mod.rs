//! Authentication subsystem.
//!
//! # Data Flow
//! ```text
//! login handler
//!     → credentials.rs (Credentials built from the request body)
//!     → verifier.rs (CredentialVerifier::verify)
//!     → AuthenticatedUser | AuthError
//! ```

pub mod credentials;
pub mod verifier;

pub use credentials::{AuthenticatedUser, Credentials};
pub use verifier::{AuthError, CredentialVerifier, StaticCredentials};
