//! Name and answer helpers shared by the record resolvers.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::IN_ADDR_ARPA_SUFFIX;

/// Four groups of one to three ASCII digits.
///
/// Octet ranges are not checked: `999.1.1.1` passes.
static IPV4_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,3}){3}$").expect("IPv4 shape pattern is valid")
});

/// Returns `true` if `value` looks like a dotted-quad IPv4 address.
pub fn is_ipv4_shaped(value: &str) -> bool {
    IPV4_SHAPE.is_match(value)
}

/// Removes a single trailing root dot (`ns1.example.com.` -> `ns1.example.com`).
pub fn strip_root_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Builds the `in-addr.arpa` name for an IPv4 address.
///
/// The input must split into exactly four dot-separated parts; the parts are
/// not validated beyond that.
///
/// # Examples
///
/// ```
/// use netbar::dns::reverse_arpa;
///
/// assert_eq!(
///     reverse_arpa("93.184.216.34").as_deref(),
///     Some("34.216.184.93.in-addr.arpa")
/// );
/// assert_eq!(reverse_arpa("2001:db8::1"), None);
/// ```
pub fn reverse_arpa(ip: &str) -> Option<String> {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return None;
    }
    let reversed: Vec<&str> = parts.into_iter().rev().collect();
    Some(format!("{}.{IN_ADDR_ARPA_SUFFIX}", reversed.join(".")))
}

/// Strips root dots and drops repeated nameservers, keeping first-seen order.
pub fn normalize_nameservers(records: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|record| strip_root_dot(record).to_string())
        .filter(|ns| seen.insert(ns.clone()))
        .collect()
}
