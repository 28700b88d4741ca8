//! Lookup orchestration.
//!
//! Turns a page URL into one [`LookupResult`]: hostname, A record, NS records
//! with ancestor fallback, PTR record, and the caller's public IP. The A and NS
//! lookups run concurrently; the PTR lookup waits for the address and runs
//! alongside the public IP lookup.
//!
//! # Failure policy
//!
//! - An unparsable URL, or a failing A or NS query, fails the whole lookup.
//! - A failing PTR query only leaves `ptr` empty.
//! - Public IP lookups never fail (see [`crate::myip`]).

mod hostname;
mod types;

use std::sync::Arc;

use crate::config::{Config, SERVER_PLACEHOLDER};
use crate::dns::{resolve_a, resolve_ns_with_fallback, resolve_ptr};
use crate::doh::DohClient;
use crate::error_handling::{InitializationError, LookupError};
use crate::initialization::init_client;
use crate::myip::MyIpResolver;
use crate::tabs::TabId;

pub use hostname::extract_hostname;
pub use types::{
    LookupResponse, LookupResult, MessageRequest, MessageResponse, MESSAGE_TYPE_GET,
};

/// Shared lookup context: the DoH client and the public IP resolver.
///
/// Created once at startup. The public IP cache lives inside and is shared by
/// every clone.
#[derive(Debug, Clone)]
pub struct NetBar {
    doh: DohClient,
    my_ip: Arc<MyIpResolver>,
}

impl NetBar {
    /// Creates a context from already built parts.
    pub fn new(doh: DohClient, my_ip: MyIpResolver) -> Self {
        Self {
            doh,
            my_ip: Arc::new(my_ip),
        }
    }

    /// Creates a context with one HTTP client shared by DoH and the providers.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        let doh = DohClient::new(client.clone(), config.doh_endpoint.clone());
        let my_ip = MyIpResolver::from_config(client, config);
        Ok(Self::new(doh, my_ip))
    }

    /// The DoH client used for every record lookup.
    pub fn doh(&self) -> &DohClient {
        &self.doh
    }

    /// The public IP resolver (and its cache).
    pub fn my_ip_resolver(&self) -> &MyIpResolver {
        &self.my_ip
    }

    /// Runs the lookup pipeline for `url`.
    ///
    /// `server_lookup` maps the requesting tab to its captured `Server`
    /// header. Without a tab, or without a header, the result reports `-`.
    ///
    /// # Errors
    ///
    /// - `LookupError::InvalidUrl` if `url` has no hostname
    /// - DoH errors from the A or NS lookups
    pub async fn lookup<F>(
        &self,
        url: &str,
        tab_id: Option<TabId>,
        server_lookup: F,
    ) -> Result<LookupResult, LookupError>
    where
        F: Fn(TabId) -> Option<String>,
    {
        let domain = extract_hostname(url)?;
        let server = tab_id
            .and_then(server_lookup)
            .unwrap_or_else(|| SERVER_PLACEHOLDER.to_string());

        let (ip, ns) = tokio::join!(
            resolve_a(&self.doh, &domain),
            resolve_ns_with_fallback(&self.doh, &domain)
        );
        let ip = ip?;
        let ns = ns?;

        let ptr_lookup = async {
            let ip = ip.as_deref()?;
            match resolve_ptr(&self.doh, ip).await {
                Ok(ptr) => ptr,
                Err(e) => {
                    log::warn!("PTR lookup for {ip} failed: {e}");
                    None
                }
            }
        };
        let (ptr, me) = tokio::join!(ptr_lookup, self.my_ip.my_ip());

        Ok(LookupResult {
            domain,
            ip,
            ns: ns.ns,
            ns_domain: ns.ns_domain,
            ptr,
            server: Some(server),
            my_ip: me.ip,
            my_country: me.country,
        })
    }

    /// Runs the lookup pipeline and folds any error into a failure response.
    pub async fn handle_lookup<F>(
        &self,
        url: &str,
        tab_id: Option<TabId>,
        server_lookup: F,
    ) -> LookupResponse
    where
        F: Fn(TabId) -> Option<String>,
    {
        match self.lookup(url, tab_id, server_lookup).await {
            Ok(result) => {
                log::info!(
                    "{} -> {} (NS via {})",
                    result.domain,
                    result.ip.as_deref().unwrap_or("-"),
                    result.ns_domain.as_deref().unwrap_or("-")
                );
                LookupResponse::Success(result)
            }
            Err(e) => {
                log::warn!("Lookup for {url:?} failed: {e}");
                LookupResponse::Failure {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Answers one message of the request/response contract.
    ///
    /// Unknown message types are answered with `Unknown message`; a missing
    /// URL is treated like an unparsable one.
    pub async fn handle_message<F>(
        &self,
        request: &MessageRequest,
        server_lookup: F,
    ) -> MessageResponse
    where
        F: Fn(TabId) -> Option<String>,
    {
        if request.kind != MESSAGE_TYPE_GET {
            log::debug!("Ignoring message of type {:?}", request.kind);
            return MessageResponse::failure("Unknown message");
        }
        let url = request.url.as_deref().unwrap_or_default();
        self.handle_lookup(url, request.tab_id, server_lookup)
            .await
            .into()
    }
}
