//! Error handling.
//!
//! Error types are split by phase:
//! - **Initialization**: logger and HTTP client setup
//! - **Lookup**: failures of DoH queries, provider calls and URL parsing
//!
//! Lookup errors never escape the orchestrator as `Err`; they are turned into
//! a failure response (or a missing field) there.

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError};
