//! DNS record resolution over DoH.
//!
//! Three independent lookups built on [`crate::doh::DohClient`]:
//! - forward IPv4 resolution (A records)
//! - nameserver resolution with ancestor-domain fallback (NS records)
//! - reverse resolution through `in-addr.arpa` (PTR records)

mod extract;
mod records;
mod resolution;

// Re-export public API
pub use extract::{is_ipv4_shaped, normalize_nameservers, reverse_arpa, strip_root_dot};
pub use records::{lookup_ns_records, resolve_ns_with_fallback, NsLookup};
pub use resolution::{resolve_a, resolve_ptr};
