//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! SIGTERM/SIGINT → Shutdown::trigger
//!     → server stops accepting → in-flight requests finish → exit
//! ```

pub mod signals;

pub use signals::{wait_for_signal, Shutdown};
