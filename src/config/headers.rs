//! HTTP header name and value constants.

/// Response header captured per tab and shown in the bar.
pub const HEADER_SERVER: &str = "server";

/// Media type requested from the DoH resolver.
pub const DNS_JSON_MEDIA_TYPE: &str = "application/dns-json";

/// Resource type of a top-level navigation response.
///
/// Only responses of this type update a tab's server header.
pub const RESOURCE_TYPE_MAIN_FRAME: &str = "main_frame";
