//! DoH query execution.

use std::fmt;

use reqwest::header::ACCEPT;

use crate::config::DNS_JSON_MEDIA_TYPE;
use crate::error_handling::LookupError;

use super::answer::parse_answers;

/// Record types the lookup pipeline asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// IPv4 address
    A,
    /// Authoritative nameserver
    Ns,
    /// Reverse pointer
    Ptr,
}

impl RecordType {
    /// Mnemonic sent in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Ns => "NS",
            RecordType::Ptr => "PTR",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client for a single DoH JSON endpoint.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct DohClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DohClient {
    /// Creates a client that sends every query to `endpoint`.
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The resolver URL queries are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Queries `name` for `record_type` and returns the answer data strings.
    ///
    /// No retries happen here.
    ///
    /// # Errors
    ///
    /// - `LookupError::Transport` if the resolver answers with a non-success status
    /// - `LookupError::Http` if the request fails before a response arrives
    pub async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, LookupError> {
        log::trace!("DoH query {record_type} {name} via {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", name), ("type", record_type.as_str())])
            .header(ACCEPT, DNS_JSON_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("DoH {record_type} {name} returned HTTP {status}");
            return Err(LookupError::Transport {
                service: "DoH",
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let answers = parse_answers(&body);
        log::trace!("DoH {record_type} {name}: {} answer(s)", answers.len());
        Ok(answers)
    }
}
