//! Public IP provider calls.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error_handling::LookupError;

/// Body of the primary provider (ipapi.co style).
#[derive(Debug, Deserialize)]
struct PrimaryResponse {
    ip: Option<String>,
    country_name: Option<String>,
    country: Option<String>,
}

/// Body of the secondary provider (ipify style).
#[derive(Debug, Deserialize)]
struct SecondaryResponse {
    ip: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    service: &'static str,
) -> Result<T, LookupError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Transport {
            service,
            status: status.as_u16(),
        });
    }
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| LookupError::Parse(format!("{service}: {e}")))
}

/// Asks the primary provider for the caller's IP and country.
///
/// Returns `Ok(None)` when the provider answered without an IP. The country
/// prefers the full name over the code.
pub(crate) async fn fetch_primary(
    client: &reqwest::Client,
    url: &str,
) -> Result<Option<(String, Option<String>)>, LookupError> {
    let body: PrimaryResponse = fetch_json(client, url, "primary IP provider").await?;
    let country = non_empty(body.country_name).or_else(|| non_empty(body.country));
    Ok(non_empty(body.ip).map(|ip| (ip, country)))
}

/// Asks the secondary provider for the caller's IP. It never reports a country.
pub(crate) async fn fetch_secondary(
    client: &reqwest::Client,
    url: &str,
) -> Result<Option<String>, LookupError> {
    let body: SecondaryResponse = fetch_json(client, url, "secondary IP provider").await?;
    Ok(non_empty(body.ip))
}
