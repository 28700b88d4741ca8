//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, limits)
//! - HTTP header name constants
//! - The library `Config` and logging option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel};
