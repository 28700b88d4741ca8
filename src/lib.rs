//! netbar library: page network details over DNS-over-HTTPS
//!
//! Given a page URL, resolves what a network-savvy status bar shows: the
//! page's hostname, its first IPv4 address, the reverse DNS name of that
//! address, the authoritative nameservers (walking up to the apex when the
//! hostname has none of its own), the `Server` header captured for the tab,
//! and the caller's own public IP and country.
//!
//! # Example
//!
//! ```no_run
//! use netbar::{Config, LookupResponse, NetBar};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let netbar = NetBar::from_config(&Config::default())?;
//!
//! match netbar.handle_lookup("https://www.example.com/", None, |_| None).await {
//!     LookupResponse::Success(result) => {
//!         println!("{} -> {:?} (NS: {})", result.domain, result.ip, result.ns.join(", "));
//!     }
//!     LookupResponse::Failure { message } => eprintln!("lookup failed: {message}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
#[allow(missing_docs)]
pub mod bridge;
pub mod config;
pub mod dns;
pub mod doh;
pub mod error_handling;
pub mod initialization;
pub mod lookup;
pub mod myip;
pub mod settings;
pub mod tabs;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, LookupError};
pub use lookup::{LookupResponse, LookupResult, MessageRequest, MessageResponse, NetBar};
pub use myip::{MyIp, MyIpResolver};
pub use settings::{BarPosition, BarSettings};
pub use tabs::{TabId, TabRegistry};
