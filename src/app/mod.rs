//! Front-end helpers used by the binary.
//!
//! - Rendering a lookup as the one-line bar
//! - Shutdown signal handling for the bridge server

pub mod render;
pub mod shutdown;

// Re-export public API
pub use render::{render_bar, render_result};
pub use shutdown::shutdown_signal;
