//! Application initialization and resource setup.
//!
//! - HTTP client (timeouts, user agent)
//! - Logger (plain or JSON)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
