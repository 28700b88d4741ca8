//! Page URL to hostname.

use crate::error_handling::LookupError;

/// Extracts the hostname of a page URL.
///
/// The URL must be absolute and have a host; `about:blank`, `data:` URLs and
/// bare hostnames are rejected.
///
/// # Errors
///
/// Returns `LookupError::InvalidUrl` if the URL cannot be parsed or has no host.
pub fn extract_hostname(url: &str) -> Result<String, LookupError> {
    let parsed = url::Url::parse(url.trim()).map_err(|e| {
        log::debug!("Unparsable page URL {url:?}: {e}");
        LookupError::InvalidUrl(url.to_string())
    })?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(host.to_string()),
        _ => Err(LookupError::InvalidUrl(url.to_string())),
    }
}
