//! Public IP lookup ("my IP").
//!
//! Fetches the caller's public IP and country from a primary provider, falls
//! back to a secondary provider that only knows the IP, and memoizes the
//! outcome for a short time so that many tabs opening at once do not trip the
//! providers' rate limits.

mod cache;
mod providers;

use std::time::{Duration, Instant};

use crate::config::Config;

pub use cache::MyIpCache;

/// The caller's public address as seen by the providers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MyIp {
    /// Public IP, `None` if every provider failed
    pub ip: Option<String>,
    /// Country name (or code), only known from the primary provider
    pub country: Option<String>,
}

/// Resolves the caller's public IP with provider fallback and caching.
#[derive(Debug)]
pub struct MyIpResolver {
    client: reqwest::Client,
    primary: String,
    secondary: String,
    cache: MyIpCache,
}

impl MyIpResolver {
    /// Creates a resolver for the given provider endpoints.
    pub fn new(
        client: reqwest::Client,
        primary: impl Into<String>,
        secondary: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            client,
            primary: primary.into(),
            secondary: secondary.into(),
            cache: MyIpCache::new(ttl),
        }
    }

    /// Creates a resolver from the configured endpoints and TTL.
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(
            client,
            config.my_ip_primary.clone(),
            config.my_ip_secondary.clone(),
            config.my_ip_ttl,
        )
    }

    /// The cache backing this resolver.
    pub fn cache(&self) -> &MyIpCache {
        &self.cache
    }

    /// Returns the caller's public IP and country.
    ///
    /// Never fails: provider errors are logged and end up as `None` fields.
    /// The outcome is cached even when it has no IP, so a failing provider is
    /// not retried until the TTL runs out.
    pub async fn my_ip(&self) -> MyIp {
        let started = Instant::now();
        if let Some(cached) = self.cache.get_at(started) {
            log::trace!("Using cached public IP");
            return cached;
        }

        let result = self.refresh().await;
        self.cache.store_at(result.clone(), started);
        result
    }

    async fn refresh(&self) -> MyIp {
        match providers::fetch_primary(&self.client, &self.primary).await {
            Ok(Some((ip, country))) => {
                log::debug!("Public IP {ip} from primary provider");
                return MyIp {
                    ip: Some(ip),
                    country,
                };
            }
            Ok(None) => log::warn!("Primary IP provider {} returned no IP", self.primary),
            Err(e) => log::warn!("Primary IP provider {} failed: {e}", self.primary),
        }

        match providers::fetch_secondary(&self.client, &self.secondary).await {
            Ok(Some(ip)) => {
                log::debug!("Public IP {ip} from secondary provider");
                MyIp {
                    ip: Some(ip),
                    country: None,
                }
            }
            Ok(None) => {
                log::warn!("Secondary IP provider {} returned no IP", self.secondary);
                MyIp::default()
            }
            Err(e) => {
                log::warn!("Secondary IP provider {} failed: {e}", self.secondary);
                MyIp::default()
            }
        }
    }
}
