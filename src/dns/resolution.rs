//! Forward (A) and reverse (PTR) resolution.

use crate::doh::{DohClient, RecordType};
use crate::error_handling::LookupError;

use super::extract::{is_ipv4_shaped, reverse_arpa, strip_root_dot};

/// Resolves a hostname to its first IPv4 address.
///
/// CNAME targets and other non-address data in the answer section are skipped;
/// the first entry shaped like a dotted quad wins.
///
/// # Returns
///
/// `Ok(None)` if no answer looks like an IPv4 address.
///
/// # Errors
///
/// Propagates DoH transport failures.
pub async fn resolve_a(doh: &DohClient, host: &str) -> Result<Option<String>, LookupError> {
    let answers = doh.query(host, RecordType::A).await?;
    let ip = answers.into_iter().find(|data| is_ipv4_shaped(data));
    log::debug!("A {host} -> {}", ip.as_deref().unwrap_or("none"));
    Ok(ip)
}

/// Performs a reverse DNS lookup (PTR record) for an IPv4 address.
///
/// Returns `Ok(None)` without querying when `ip` does not have four
/// dot-separated parts, and when the resolver has no PTR answer.
///
/// # Errors
///
/// Propagates DoH transport failures; the orchestrator decides whether they
/// matter.
pub async fn resolve_ptr(doh: &DohClient, ip: &str) -> Result<Option<String>, LookupError> {
    let Some(arpa) = reverse_arpa(ip) else {
        log::debug!("Skipping PTR lookup for non-IPv4 address {ip}");
        return Ok(None);
    };

    let answers = doh.query(&arpa, RecordType::Ptr).await?;
    let ptr = answers
        .first()
        .map(|name| strip_root_dot(name).to_string());
    log::debug!("PTR {arpa} -> {}", ptr.as_deref().unwrap_or("none"));
    Ok(ptr)
}
