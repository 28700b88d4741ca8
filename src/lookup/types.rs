//! Lookup result and message types.

use serde::{Deserialize, Serialize};

use crate::tabs::TabId;

/// Message type of a lookup request.
pub const MESSAGE_TYPE_GET: &str = "NETBAR_GET";

/// Everything the bar shows for one page.
///
/// Built fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// Hostname of the page
    pub domain: String,
    /// First IPv4 address of the hostname
    pub ip: Option<String>,
    /// Authoritative nameservers, unique, without trailing dots
    pub ns: Vec<String>,
    /// Domain the nameservers were found at
    pub ns_domain: Option<String>,
    /// Reverse DNS name of `ip`
    pub ptr: Option<String>,
    /// `Server` header of the tab's page, `-` when unknown
    pub server: Option<String>,
    /// Caller's public IP
    #[serde(alias = "myip")]
    pub my_ip: Option<String>,
    /// Caller's country
    #[serde(alias = "mycountry")]
    pub my_country: Option<String>,
}

/// Outcome of a lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    /// The pipeline completed; individual fields may still be empty.
    Success(LookupResult),
    /// The pipeline failed as a whole.
    Failure {
        /// Short, user-presentable reason
        message: String,
    },
}

impl LookupResponse {
    /// Returns the result if the lookup succeeded.
    pub fn result(&self) -> Option<&LookupResult> {
        match self {
            LookupResponse::Success(result) => Some(result),
            LookupResponse::Failure { .. } => None,
        }
    }
}

/// Request half of the message contract.
///
/// ```json
/// {"type": "NETBAR_GET", "url": "https://example.com/", "tabId": 12}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    /// Message type, only `NETBAR_GET` is understood
    #[serde(rename = "type")]
    pub kind: String,
    /// Page URL to resolve
    #[serde(default)]
    pub url: Option<String>,
    /// Tab the request comes from, used to find the captured server header
    #[serde(default)]
    pub tab_id: Option<TabId>,
}

impl MessageRequest {
    /// Builds a `NETBAR_GET` request.
    pub fn get(url: impl Into<String>, tab_id: Option<TabId>) -> Self {
        Self {
            kind: MESSAGE_TYPE_GET.to_string(),
            url: Some(url.into()),
            tab_id,
        }
    }
}

/// Response half of the message contract.
///
/// Serializes as `{"ok": true, ...LookupResult}` or
/// `{"ok": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Whether `result` is present
    pub ok: bool,
    /// Lookup fields, flattened into the response object
    #[serde(flatten)]
    pub result: Option<LookupResult>,
    /// Failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    /// A failure response carrying `error`.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error.into()),
        }
    }
}

impl From<LookupResponse> for MessageResponse {
    fn from(response: LookupResponse) -> Self {
        match response {
            LookupResponse::Success(result) => Self {
                ok: true,
                result: Some(result),
                error: None,
            },
            LookupResponse::Failure { message } => Self::failure(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_result() -> LookupResult {
        LookupResult {
            domain: "sub.example.com".to_string(),
            ip: Some("93.184.216.34".to_string()),
            ns: vec!["ns1.example.com".to_string()],
            ns_domain: Some("example.com".to_string()),
            ptr: None,
            server: Some("-".to_string()),
            my_ip: Some("203.0.113.7".to_string()),
            my_country: None,
        }
    }

    #[test]
    fn test_success_response_is_flattened() {
        let response = MessageResponse::from(LookupResponse::Success(sample_result()));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "ok": true,
                "domain": "sub.example.com",
                "ip": "93.184.216.34",
                "ns": ["ns1.example.com"],
                "nsDomain": "example.com",
                "ptr": null,
                "server": "-",
                "myIp": "203.0.113.7",
                "myCountry": null
            })
        );
    }

    #[test]
    fn test_failure_response_shape() {
        let response = MessageResponse::from(LookupResponse::Failure {
            message: "No domain".to_string(),
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"ok": false, "error": "No domain"}));
    }

    #[test]
    fn test_message_response_deserializes_both_shapes() {
        let failure: MessageResponse =
            serde_json::from_value(json!({"ok": false, "error": "Unknown message"})).unwrap();
        assert_eq!(failure, MessageResponse::failure("Unknown message"));

        let success: MessageResponse = serde_json::from_value(json!({
            "ok": true,
            "domain": "sub.example.com",
            "ip": "93.184.216.34",
            "ns": ["ns1.example.com"],
            "nsDomain": "example.com",
            "server": "-",
            "myIp": "203.0.113.7"
        }))
        .unwrap();
        assert_eq!(success.result, Some(sample_result()));
    }

    #[test]
    fn test_lowercase_my_ip_fields_are_accepted() {
        let result: LookupResult = serde_json::from_value(json!({
            "domain": "sub.example.com",
            "ip": "93.184.216.34",
            "ns": ["ns1.example.com"],
            "nsDomain": "example.com",
            "server": "-",
            "myip": "203.0.113.7",
            "mycountry": "Netherlands"
        }))
        .unwrap();
        assert_eq!(result.my_ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(result.my_country.as_deref(), Some("Netherlands"));

        // Output always uses the camelCase names
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["myIp"], json!("203.0.113.7"));
        assert!(value.get("myip").is_none());
    }

    #[test]
    fn test_message_request_parsing() {
        let request: MessageRequest = serde_json::from_value(json!({
            "type": "NETBAR_GET",
            "url": "https://example.com/",
            "tabId": 42
        }))
        .unwrap();
        assert_eq!(request, MessageRequest::get("https://example.com/", Some(42)));

        let bare: MessageRequest = serde_json::from_value(json!({"type": "PING"})).unwrap();
        assert_eq!(bare.url, None);
        assert_eq!(bare.tab_id, None);
    }
}
