//! DNS-over-HTTPS client.
//!
//! Queries a resolver speaking the JSON flavour of DoH
//! (`accept: application/dns-json`) and returns the `data` field of each
//! answer. Retry and fallback policy belongs to the callers in `crate::dns`.

mod answer;
mod client;

// Re-export public API
pub use answer::{answer_data, parse_answers};
pub use client::{DohClient, RecordType};
