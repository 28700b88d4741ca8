//! Per-tab metadata registry.
//!
//! The host environment reports top-level navigation responses and tab
//! closures; the registry keeps the `Server` header of the latest top-level
//! response per tab so that lookups can show it. Entries live exactly as long
//! as the tab and are never persisted.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::Deserialize;

use crate::config::{HEADER_SERVER, RESOURCE_TYPE_MAIN_FRAME};

/// Browser tab identifier.
pub type TabId = i64;

/// What is known about a tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabMeta {
    /// `Server` header of the last top-level response, if it had one
    pub server: Option<String>,
}

/// A response header as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseHeader {
    /// Header name, any case
    pub name: String,
    /// Header value; hosts may omit it for binary values
    #[serde(default)]
    pub value: Option<String>,
}

/// Returns the value of the first `Server` header, matching the name
/// case-insensitively. An empty value counts as absent.
pub fn extract_server_header(headers: &[ResponseHeader]) -> Option<String> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(HEADER_SERVER))
        .and_then(|h| h.value.clone())
        .filter(|value| !value.is_empty())
}

/// Registry of tab metadata keyed by tab id.
#[derive(Debug, Default)]
pub struct TabRegistry {
    tabs: RwLock<HashMap<TabId, TabMeta>>,
}

impl TabRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `meta` for `tab_id`, replacing any previous entry.
    pub fn insert(&self, tab_id: TabId, meta: TabMeta) {
        self.tabs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(tab_id, meta);
    }

    /// Handles a response observed in `tab_id`.
    ///
    /// Only top-level navigations (`main_frame`) update the registry;
    /// subresources are ignored. A navigation without a `Server` header still
    /// replaces the entry, so a stale value from the previous page never
    /// lingers.
    ///
    /// Returns `true` if the registry was updated.
    pub fn record_response(
        &self,
        tab_id: TabId,
        resource_type: &str,
        headers: &[ResponseHeader],
    ) -> bool {
        if resource_type != RESOURCE_TYPE_MAIN_FRAME {
            return false;
        }
        let server = extract_server_header(headers);
        log::debug!(
            "Tab {tab_id} navigated, server: {}",
            server.as_deref().unwrap_or("none")
        );
        self.insert(tab_id, TabMeta { server });
        true
    }

    /// Eviction hook for tab closure. Returns the removed entry.
    pub fn remove(&self, tab_id: TabId) -> Option<TabMeta> {
        let removed = self
            .tabs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&tab_id);
        if removed.is_some() {
            log::debug!("Tab {tab_id} closed, metadata dropped");
        }
        removed
    }

    /// Returns the metadata stored for `tab_id`.
    pub fn get(&self, tab_id: TabId) -> Option<TabMeta> {
        self.tabs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&tab_id)
            .cloned()
    }

    /// Returns the captured `Server` header for `tab_id`.
    pub fn server_for(&self, tab_id: TabId) -> Option<String> {
        self.get(tab_id).and_then(|meta| meta.server)
    }

    /// Number of tabs with metadata.
    pub fn len(&self) -> usize {
        self.tabs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if no tab has metadata.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
