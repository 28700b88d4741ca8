//! Nameserver (NS) queries with ancestor-domain fallback.
//!
//! Most hostnames (`www.a.example.com`) carry no NS records of their own; the
//! authoritative set lives at the apex. Finding the apex properly needs a
//! public suffix list, so instead the lookup walks up one label at a time and
//! keeps the first non-empty answer.

use crate::config::NS_FALLBACK_MAX_ATTEMPTS;
use crate::doh::{DohClient, RecordType};
use crate::error_handling::LookupError;

use super::extract::normalize_nameservers;

/// Nameservers found for a hostname, and where they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NsLookup {
    /// Unique nameserver names, without trailing dots
    pub ns: Vec<String>,
    /// Domain whose NS query answered; `None` if none did
    pub ns_domain: Option<String>,
}

/// Queries NS records for exactly one name.
///
/// # Returns
///
/// Deduplicated nameserver names with root dots stripped; empty if the name
/// has no NS records.
///
/// # Errors
///
/// Propagates DoH transport failures.
pub async fn lookup_ns_records(doh: &DohClient, domain: &str) -> Result<Vec<String>, LookupError> {
    let answers = doh.query(domain, RecordType::Ns).await?;
    Ok(normalize_nameservers(answers))
}

/// Queries NS records for `hostname`, walking up to its ancestors until one
/// answers.
///
/// The walk makes at most six queries and never queries a name with fewer
/// than two labels after the first attempt: `www.a.b.com` tries
/// `www.a.b.com`, `a.b.com`, `b.com` and stops. A blank hostname makes no
/// query at all.
///
/// # Errors
///
/// A transport failure on any step aborts the walk.
pub async fn resolve_ns_with_fallback(
    doh: &DohClient,
    hostname: &str,
) -> Result<NsLookup, LookupError> {
    let mut current = hostname.trim();
    if current.is_empty() {
        return Ok(NsLookup::default());
    }

    for attempt in 1..=NS_FALLBACK_MAX_ATTEMPTS {
        let ns = lookup_ns_records(doh, current).await?;
        if !ns.is_empty() {
            log::debug!(
                "NS for {hostname} found at {current} on attempt {attempt}: {}",
                ns.join(", ")
            );
            return Ok(NsLookup {
                ns,
                ns_domain: Some(current.to_string()),
            });
        }

        match parent_domain(current) {
            Some(parent) => current = parent,
            None => break,
        }
    }

    log::debug!("No NS records found for {hostname} or its ancestors");
    Ok(NsLookup::default())
}

/// Drops the leftmost label, unless that would leave fewer than two labels.
fn parent_domain(domain: &str) -> Option<&str> {
    if domain.split('.').count() <= 2 {
        return None;
    }
    domain.split_once('.').map(|(_, rest)| rest)
}
