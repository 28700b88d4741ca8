//! Configuration constants.
//!
//! Endpoints, timeouts and limits used as defaults throughout the application.

use std::time::Duration;

/// Public DNS-over-HTTPS resolver that answers `application/dns-json` queries.
pub const DEFAULT_DOH_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

/// Primary public IP provider. Returns `{ip, country_name, country, ...}`.
pub const DEFAULT_MY_IP_PRIMARY: &str = "https://ipapi.co/json/";

/// Fallback public IP provider. Returns `{ip}` only.
pub const DEFAULT_MY_IP_SECONDARY: &str = "https://api.ipify.org?format=json";

/// How long a public IP lookup stays valid.
///
/// Many tabs opening at once would otherwise hit the providers' rate limits.
pub const MY_IP_CACHE_TTL: Duration = Duration::from_secs(15);

/// Per-request HTTP timeout in seconds.
///
/// The lookup pipeline imposes no timeout of its own, so this bounds every
/// DoH query and provider call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for outgoing requests.
pub const DEFAULT_USER_AGENT: &str = concat!("netbar/", env!("CARGO_PKG_VERSION"));

/// Maximum number of names tried by the nameserver ancestor walk.
pub const NS_FALLBACK_MAX_ATTEMPTS: usize = 6;

/// Suffix of the IPv4 reverse-DNS namespace.
pub const IN_ADDR_ARPA_SUFFIX: &str = "in-addr.arpa";

/// Value reported for the server header when a tab has none on record.
pub const SERVER_PLACEHOLDER: &str = "-";

/// Default port for the local message bridge.
pub const DEFAULT_BRIDGE_PORT: u16 = 8765;
